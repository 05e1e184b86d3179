//! # sql-engine
//!
//! A minimal facade over a relational database connection: list tables,
//! list column metadata per table, and execute raw SQL returning rows.
//!
//! All real work (pooling, dialects, wire protocol) is delegated to sqlx's
//! `Any` driver; the driver is selected at runtime from the connection URI
//! scheme. This crate adapts the results into plain value records and a
//! discriminated execution outcome.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sql_engine::{DatabaseBackend, DatabaseEngine};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), sql_engine::EngineError> {
//!     let engine = DatabaseEngine::connect("postgresql://user:pw@localhost/app").await?;
//!
//!     println!("family: {}", engine.family());
//!     for table in engine.list_tables().await? {
//!         println!("table: {}", table.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Concurrency
//!
//! Every operation is an independent request/response; no transaction or
//! cursor state is kept between calls. The engine's pool is internally
//! reference-counted and thread safe, so sharing one engine across tasks
//! needs no extra synchronization.

// Public modules
pub mod database;
pub mod schema;

// Public exports
pub use database::engine::DatabaseEngine;
pub use database::family::DatabaseFamily;
pub use database::traits::{DatabaseBackend, EngineError};
pub use schema::{FieldInfo, QueryOutput, RunOutcome, TableInfo};
