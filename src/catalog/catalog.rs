//! Catalog implementation
//!
//! Indexing order is fixed: the table insert happens before any tree
//! insert, so replaying persisted records is idempotent even if a replay
//! is interrupted between the two steps.

use crate::collections::{AvlTree, HashTable, LinkedList};
use crate::model::ArticleRecord;

use super::errors::{CatalogError, CatalogResult};

/// The index controller.
///
/// Exclusively owns the primary store and both secondary indexes; results
/// leave as clones or borrows, never as handles into internal slots.
pub struct Catalog {
    articles: HashTable<String, ArticleRecord>,
    authors: AvlTree<String>,
    keywords: AvlTree<String>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self {
            articles: HashTable::new(),
            authors: AvlTree::new(),
            keywords: AvlTree::new(),
        }
    }

    /// Indexes a record.
    ///
    /// Rejects a duplicate title before any mutation. On success the record
    /// goes into the table first, then each author (trimmed, original
    /// casing) and each keyword (trimmed, lower-cased) is inserted into its
    /// tree with the title as the associated value. Returns the stored
    /// title.
    pub fn add_article(&mut self, record: ArticleRecord) -> CatalogResult<String> {
        if self.articles.contains_key(record.title()) {
            return Err(CatalogError::DuplicateTitle(record.title().to_string()));
        }

        let title = record.title().to_string();
        let authors: Vec<String> = record
            .authors()
            .iter()
            .map(|author| author.trim().to_string())
            .collect();
        let keywords: Vec<String> = record
            .keywords()
            .iter()
            .map(|keyword| keyword.trim().to_lowercase())
            .collect();

        // Table before trees; see module docs.
        self.articles.put(title.clone(), record);
        for author in authors {
            self.authors.insert(author, &title);
        }
        for keyword in keywords {
            self.keywords.insert(keyword, &title);
        }

        Ok(title)
    }

    /// Direct table lookup by exact title.
    pub fn find_by_title(&self, title: &str) -> Option<&ArticleRecord> {
        self.articles.get(title)
    }

    /// Articles written by `author`. Case-sensitive: the query is trimmed
    /// but not case-folded.
    pub fn find_by_author(&self, author: &str) -> LinkedList<ArticleRecord> {
        self.resolve_titles(self.authors.titles_for(author.trim()))
    }

    /// Articles tagged with `keyword`. Case-insensitive: the query is
    /// trimmed and lower-cased, matching the indexing normalization.
    pub fn find_by_keyword(&self, keyword: &str) -> LinkedList<ArticleRecord> {
        let query = keyword.trim().to_lowercase();
        self.resolve_titles(self.keywords.titles_for(query.as_str()))
    }

    /// All indexed titles, in the table's physical slot order.
    pub fn all_titles(&self) -> LinkedList<String> {
        self.articles.keys().into_iter().cloned().collect()
    }

    /// All indexed authors, ascending.
    pub fn all_authors(&self) -> LinkedList<String> {
        self.authors.in_order().into_iter().cloned().collect()
    }

    /// All indexed keywords, ascending.
    pub fn all_keywords(&self) -> LinkedList<String> {
        self.keywords.in_order().into_iter().cloned().collect()
    }

    /// Number of indexed articles.
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// True when no article is indexed.
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Resolves tree titles through the table. A title the table no longer
    /// holds is skipped rather than failing the query.
    fn resolve_titles(&self, titles: &[String]) -> LinkedList<ArticleRecord> {
        let mut results = LinkedList::new();
        for title in titles {
            if let Some(record) = self.articles.get(title.as_str()) {
                results.push_back(record.clone());
            }
        }
        results
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
