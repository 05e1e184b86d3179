//! Database abstraction layer
//!
//! This module provides the backend trait, family detection, and the
//! concrete engine over sqlx's `Any` driver.

pub mod engine;
pub mod family;
pub mod queries;
pub mod traits;

// Re-export the main trait and the concrete engine
pub use engine::DatabaseEngine;
pub use family::DatabaseFamily;
pub use traits::{DatabaseBackend, EngineError};
