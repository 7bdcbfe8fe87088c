//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors surfaced by the flat-file store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying file operation failed
    #[error("store i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
