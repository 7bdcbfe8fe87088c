//! CLI error types
//!
//! Every failure from the subsystems surfaces here; main prints the
//! message and exits non-zero.

use thiserror::Error;

use crate::catalog::CatalogError;
use crate::parser::ParseError;
use crate::store::StoreError;

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Errors surfaced by CLI commands
#[derive(Debug, Error)]
pub enum CliError {
    /// Catalog rejected the operation
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Article file could not be parsed
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// Flat-file store failed
    #[error("{0}")]
    Store(#[from] StoreError),

    /// Title queried but not indexed
    #[error("article '{0}' is not indexed")]
    UnknownTitle(String),

    /// JSON rendering failed
    #[error("failed to render JSON output: {0}")]
    Json(#[from] serde_json::Error),
}
