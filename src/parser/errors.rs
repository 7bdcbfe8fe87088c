//! Parser error types

use thiserror::Error;

/// Result type for parser operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors surfaced while reading an article file
#[derive(Debug, Error)]
pub enum ParseError {
    /// No title line before end of input
    #[error("article file has no title line")]
    MissingTitle,

    /// Underlying read failed
    #[error("failed to read article file: {0}")]
    Io(#[from] std::io::Error),
}
