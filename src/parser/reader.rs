//! Section-driven line parser for article files
//!
//! Format, in order:
//!
//! ```text
//! <title line>
//! Authors
//! <one author per line>
//! Abstract
//! <body lines, joined with spaces>
//! Keywords: first, second, third
//! ```
//!
//! Headings are matched case-insensitively. Blank lines are skipped
//! everywhere; the keywords line terminates parsing.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::model::ArticleRecord;

use super::errors::{ParseError, ParseResult};

enum Section {
    Preamble,
    Authors,
    Body,
}

/// Parses an article file from disk.
pub fn parse_file(path: impl AsRef<Path>) -> ParseResult<ArticleRecord> {
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}

/// Parses an article from any buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> ParseResult<ArticleRecord> {
    let mut title: Option<String> = None;
    let mut authors: Vec<String> = Vec::new();
    let mut body_lines: Vec<String> = Vec::new();
    let mut keywords: Vec<String> = Vec::new();
    let mut section = Section::Preamble;

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();

        // The first non-heading line is the title; headings seen before a
        // title are ignored.
        if title.is_none() {
            if !is_heading(&lower) {
                title = Some(line.to_string());
            }
            continue;
        }

        if lower == "authors" {
            section = Section::Authors;
            continue;
        }
        if lower == "abstract" {
            section = Section::Body;
            continue;
        }
        if lower.starts_with("keywords") {
            if let Some((_, rest)) = line.split_once(':') {
                keywords = rest
                    .split(',')
                    .map(|keyword| keyword.trim().to_string())
                    .filter(|keyword| !keyword.is_empty())
                    .collect();
            }
            break;
        }

        match section {
            Section::Authors => authors.push(line.to_string()),
            Section::Body => body_lines.push(line.to_string()),
            Section::Preamble => {}
        }
    }

    let title = title.ok_or(ParseError::MissingTitle)?;
    Ok(ArticleRecord::new(
        title,
        authors,
        body_lines.join(" "),
        keywords,
    ))
}

fn is_heading(lower: &str) -> bool {
    lower == "authors" || lower == "abstract" || lower.starts_with("keywords")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
Onion Routing at Scale

Authors
Ada Lovelace
Alan Turing

Abstract
A first line of the abstract.
A second line of the abstract.

Keywords: networks, Privacy , anonymity
";

    #[test]
    fn test_parse_full_article() {
        let record = parse_reader(Cursor::new(SAMPLE)).unwrap();

        assert_eq!(record.title(), "Onion Routing at Scale");
        assert_eq!(record.authors(), &["Ada Lovelace", "Alan Turing"]);
        assert_eq!(
            record.body(),
            "A first line of the abstract. A second line of the abstract."
        );
        assert_eq!(record.keywords(), &["networks", "Privacy", "anonymity"]);
    }

    #[test]
    fn test_headings_matched_case_insensitively() {
        let input = "Title\nAUTHORS\nSomeone\nABSTRACT\nBody.\nKEYWORDS: one\n";
        let record = parse_reader(Cursor::new(input)).unwrap();

        assert_eq!(record.authors(), &["Someone"]);
        assert_eq!(record.body(), "Body.");
        assert_eq!(record.keywords(), &["one"]);
    }

    #[test]
    fn test_heading_before_title_ignored() {
        let input = "Authors\nReal Title\nAuthors\nAda\nKeywords: k\n";
        let record = parse_reader(Cursor::new(input)).unwrap();

        assert_eq!(record.title(), "Real Title");
        assert_eq!(record.authors(), &["Ada"]);
    }

    #[test]
    fn test_keywords_line_terminates_parsing() {
        let input = "Title\nKeywords: a, b\nAbstract\nNot the body.\n";
        let record = parse_reader(Cursor::new(input)).unwrap();

        assert_eq!(record.keywords(), &["a", "b"]);
        assert_eq!(record.body(), "");
    }

    #[test]
    fn test_keywords_without_colon_yield_none() {
        let input = "Title\nKeywords a b c\n";
        let record = parse_reader(Cursor::new(input)).unwrap();
        assert!(record.keywords().is_empty());
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let input = "\n\nAuthors\nAda\n";
        let err = parse_reader(Cursor::new(input)).unwrap_err();
        assert!(matches!(err, ParseError::MissingTitle));
    }

    #[test]
    fn test_empty_input_is_missing_title() {
        let err = parse_reader(Cursor::new("")).unwrap_err();
        assert!(matches!(err, ParseError::MissingTitle));
    }
}
