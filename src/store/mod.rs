//! Flat-file persistence for article records
//!
//! One record per line, fields separated by `##`, list items by `;`.
//! Append-only: the index is rebuilt from this file at startup, never
//! stored on disk itself.

mod errors;
mod flat_file;

pub use errors::{StoreError, StoreResult};
pub use flat_file::FlatFileStore;
