//! Article record model for scholardb
//!
//! The record is immutable once constructed. The title is the primary key;
//! authors and keywords feed the secondary indexes.

mod record;

pub use record::ArticleRecord;
