//! Catalog error types
//!
//! Query misses are not errors here: absent lookups come back as empty
//! results. The only failure the catalog reports is a rejected insert.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors surfaced by catalog mutations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// The table already holds a record under this title. The rejected
    /// add touches nothing.
    #[error("article '{0}' is already indexed")]
    DuplicateTitle(String),
}
