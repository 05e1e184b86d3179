//! Value types for schema introspection and raw query execution
//!
//! These types are plain records discovered at runtime; they hold no
//! connection state and are discarded once the caller has consumed them.

use serde::{Deserialize, Serialize};

/// Information about a single table (for listing)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableInfo {
    /// Table name
    pub name: String,

    /// Table comment, if the backend stores one
    pub comment: Option<String>,
}

/// Information about a single column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    /// Column name
    pub column_name: String,

    /// Backend-reported type name (e.g., "varchar", "INTEGER")
    pub column_type: String,

    /// Declared length for length-bound types (e.g., `VARCHAR(32)` -> 32)
    pub column_length: Option<u32>,

    /// Default value expression, if any
    pub column_default: Option<String>,

    /// Whether the column allows NULL values
    pub is_nullable: bool,

    /// Column comment, if the backend stores one
    pub column_comment: Option<String>,
}

/// Successful output of a raw SQL execution: the result's column names
/// followed by the fetched rows as positional tuples of JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryOutput {
    /// Column names in the result
    pub columns: Vec<String>,

    /// Rows returned (empty for statements that produce no rows)
    pub rows: Vec<Vec<serde_json::Value>>,
}

/// Outcome of executing a raw SQL statement.
///
/// Execution failures are logged and folded into the [`Failed`] variant
/// rather than propagated; callers discriminate by matching on the variant
/// instead of inspecting the shape of an overloaded return value.
///
/// [`Failed`]: RunOutcome::Failed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum RunOutcome {
    /// The statement executed; header and rows are attached
    Rows(QueryOutput),

    /// The statement failed; the driver's error text is attached
    Failed { message: String },
}

impl RunOutcome {
    /// Returns `true` for the [`Failed`](RunOutcome::Failed) variant.
    pub fn is_failed(&self) -> bool {
        matches!(self, RunOutcome::Failed { .. })
    }

    /// The successful output, or `None` if execution failed.
    pub fn rows(&self) -> Option<&QueryOutput> {
        match self {
            RunOutcome::Rows(output) => Some(output),
            RunOutcome::Failed { .. } => None,
        }
    }
}
