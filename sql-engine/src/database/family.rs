//! Database family detection from connection URIs

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse database vendor classification derived from the URI scheme
///
/// The family is decided once at construction and never changes for the
/// lifetime of an engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseFamily {
    PostgreSql,
    MySql,
    Unknown,
}

impl fmt::Display for DatabaseFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DatabaseFamily::PostgreSql => "PostgreSQL",
            DatabaseFamily::MySql => "MySQL",
            DatabaseFamily::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

impl DatabaseFamily {
    /// Detect the family from a connection URI and normalize the URI to the
    /// scheme the driver registers.
    ///
    /// A bare `postgresql://` prefix is rewritten to `postgres://`; MySQL
    /// and MariaDB schemes pass through unchanged, as does anything the
    /// family detection does not recognize.
    pub fn from_uri(uri: &str) -> (Self, String) {
        if let Some(rest) = uri.strip_prefix("postgresql://") {
            return (DatabaseFamily::PostgreSql, format!("postgres://{rest}"));
        }
        if uri.starts_with("postgres") {
            return (DatabaseFamily::PostgreSql, uri.to_string());
        }
        if uri.starts_with("mysql") || uri.starts_with("mariadb") {
            return (DatabaseFamily::MySql, uri.to_string());
        }
        (DatabaseFamily::Unknown, uri.to_string())
    }

    /// Resolve the schema argument for column introspection.
    ///
    /// Only PostgreSQL scopes columns by a named schema (defaulting to
    /// `public`); MySQL uses the connected database as an implicit schema
    /// and the argument is dropped.
    pub fn effective_schema<'a>(&self, schema: Option<&'a str>) -> Option<&'a str> {
        match self {
            DatabaseFamily::PostgreSql => Some(schema.unwrap_or("public")),
            DatabaseFamily::MySql | DatabaseFamily::Unknown => None,
        }
    }
}
