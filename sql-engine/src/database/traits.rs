//! Database backend trait
//!
//! This trait defines the interface a database backend must provide:
//! family reporting, table and column introspection, and raw execution.

use crate::database::family::DatabaseFamily;
use crate::schema::{FieldInfo, RunOutcome, TableInfo};
use async_trait::async_trait;
use thiserror::Error;

/// Backend contract for schema discovery and raw SQL execution
///
/// Implementations wrap a concrete driver connection; [`DatabaseEngine`]
/// is the provided implementation over sqlx's `Any` driver.
///
/// [`DatabaseEngine`]: crate::database::engine::DatabaseEngine
#[async_trait]
pub trait DatabaseBackend: Send + Sync + 'static {
    /// The database family detected from the connection URI
    fn family(&self) -> DatabaseFamily;

    /// List all tables visible to the connection, with comments where the
    /// backend stores them
    ///
    /// Ordering is whatever the backend's catalog query returns.
    async fn list_tables(&self) -> Result<Vec<TableInfo>, EngineError>;

    /// List column metadata for `table`
    ///
    /// The `schema` argument only applies to PostgreSQL (defaulting to
    /// `public`); MySQL-family backends scope by the connected database and
    /// ignore it.
    async fn list_fields(
        &self,
        table: &str,
        schema: Option<&str>,
    ) -> Result<Vec<FieldInfo>, EngineError>;

    /// Execute raw SQL text as a single statement
    ///
    /// Failures are logged and returned as [`RunOutcome::Failed`] rather
    /// than propagated.
    async fn run(&self, command: &str) -> RunOutcome;
}

/// Errors surfaced by engine construction and introspection
#[derive(Debug, Error)]
pub enum EngineError {
    /// The URI could not be parsed or the connection could not be opened
    #[error("failed to open database connection: {0}")]
    Connection(#[source] sqlx::Error),

    /// A catalog query failed during table or column introspection
    #[error("schema introspection failed: {0}")]
    Introspection(#[source] sqlx::Error),

    /// Column introspection was asked about a table that does not exist
    #[error("table not found: {0}")]
    TableNotFound(String),
}

impl From<sqlx::Error> for EngineError {
    fn from(error: sqlx::Error) -> Self {
        EngineError::Introspection(error)
    }
}
