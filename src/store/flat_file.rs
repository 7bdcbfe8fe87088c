//! Append-only flat-file record store
//!
//! Line format: `title##author;author##keyword;keyword##body`.
//! Body newlines are flattened to spaces on write so a record always
//! occupies exactly one line. Lines with fewer than four fields are
//! skipped on load; a partial trailing line from an interrupted append
//! must not poison the rest of the file.

use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::model::ArticleRecord;

use super::errors::StoreResult;

const FIELD_SEPARATOR: &str = "##";
const LIST_SEPARATOR: char = ';';

/// A flat-file record store bound to one path.
pub struct FlatFileStore {
    path: PathBuf,
}

impl FlatFileStore {
    /// Binds a store to `path`. The file is created lazily on first append.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads every decodable record, in file order.
    ///
    /// A missing file is an empty store, not an error.
    pub fn load_all(&self) -> StoreResult<Vec<ArticleRecord>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)?;
        let mut records = Vec::new();
        for line in BufReader::new(file).lines() {
            let line = line?;
            if let Some(record) = decode_line(&line) {
                records.push(record);
            }
        }
        Ok(records)
    }

    /// Appends one record as a single line.
    pub fn append(&self, record: &ArticleRecord) -> StoreResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", encode_line(record))?;
        Ok(())
    }
}

fn encode_line(record: &ArticleRecord) -> String {
    let body = record.body().replace(['\n', '\r'], " ");
    format!(
        "{title}{sep}{authors}{sep}{keywords}{sep}{body}",
        title = record.title(),
        authors = record.authors().join(";"),
        keywords = record.keywords().join(";"),
        body = body,
        sep = FIELD_SEPARATOR,
    )
}

fn decode_line(line: &str) -> Option<ArticleRecord> {
    let parts: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if parts.len() < 4 {
        return None;
    }

    let title = parts[0].trim();
    if title.is_empty() {
        return None;
    }

    Some(ArticleRecord::new(
        title,
        split_list(parts[1]),
        parts[3].trim(),
        split_list(parts[2]),
    ))
}

fn split_list(raw: &str) -> Vec<String> {
    raw.split(LIST_SEPARATOR)
        .map(|item| item.trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}
