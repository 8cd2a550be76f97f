/// Worker Record Store
///
/// This module owns the persisted worker rows and the id-renumbering policy:
/// - Type definitions (Worker, WorkerFields)
/// - SQLite persistence with sqlx
/// - Storage error taxonomy (not-found vs. storage failure)

use thiserror::Error;

// Worker type definitions
pub mod types;

// SQLite persistence layer for worker rows
pub mod storage;

// Re-export commonly used types
pub use storage::WorkerStorage;
pub use types::{UnknownField, Worker, WorkerField, WorkerFields};

/// Failures surfaced by the record store
#[derive(Debug, Error)]
pub enum RegistryError {
    /// No row carries the requested id
    #[error("worker not found: {0}")]
    NotFound(i64),

    /// Any database-layer failure
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
