//! Index controller for scholardb
//!
//! The catalog owns one hash table (title -> record) and two AVL trees
//! (authors -> titles, keywords -> titles) and keeps them consistent:
//! every query goes tree -> titles -> table -> records.
//!
//! # API
//!
//! - `add_article(record)` - index a record, rejecting duplicate titles
//! - `find_by_title(title)` - O(1) primary lookup
//! - `find_by_author(author)` / `find_by_keyword(keyword)` - secondary lookups
//! - `all_titles()` / `all_authors()` / `all_keywords()` - full enumerations

mod catalog;
mod errors;

pub use catalog::Catalog;
pub use errors::{CatalogError, CatalogResult};
