//! scholardb - A deterministic in-memory index for scientific article records
//!
//! Articles are stored once in an open-addressing hash table keyed by title,
//! and discoverable through two AVL secondary indexes (authors, keywords).

pub mod analyzer;
pub mod catalog;
pub mod cli;
pub mod collections;
pub mod model;
pub mod observability;
pub mod parser;
pub mod store;
