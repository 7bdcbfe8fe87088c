//! Article record type
//!
//! One record per indexed article. The catalog owns the record exclusively
//! once it is indexed; the secondary indexes hold only the title as a
//! back-reference, never a copy of the record.

use serde::{Deserialize, Serialize};

/// A scientific article record.
///
/// Immutable once constructed: the struct exposes read accessors only.
/// Author names keep their original casing; keyword normalization is the
/// catalog's concern, not the record's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    title: String,
    authors: Vec<String>,
    body: String,
    keywords: Vec<String>,
}

impl ArticleRecord {
    /// Create a new article record.
    pub fn new(
        title: impl Into<String>,
        authors: Vec<String>,
        body: impl Into<String>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            authors,
            body: body.into(),
            keywords,
        }
    }

    /// The article title, used as the primary key.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Author names in original order and casing.
    pub fn authors(&self) -> &[String] {
        &self.authors
    }

    /// The abstract body text.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Keyword phrases as they appeared in the source file.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// All authors joined with a comma, for display.
    pub fn authors_joined(&self) -> String {
        self.authors.join(", ")
    }
}
