//! Keyword-frequency analyzer
//!
//! Counts keyword occurrences in an article body and renders the report
//! text. Counting is substring-based over punctuation-stripped, lower-cased
//! text, so multi-word keyword phrases match across the stripped
//! punctuation.

mod frequency;

pub use frequency::{frequency_report, keyword_frequency};
