//! Frequency counting and report rendering

use crate::model::ArticleRecord;

/// Counts non-overlapping occurrences of `keyword` in `body`.
///
/// Both sides are lower-cased and have `. , ; : ( )` replaced by spaces
/// before matching, so "word." and "word" agree. An empty keyword counts
/// zero.
pub fn keyword_frequency(body: &str, keyword: &str) -> usize {
    let needle = normalize(keyword);
    if needle.is_empty() {
        return 0;
    }
    let text = normalize(body);

    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = text[from..].find(&needle) {
        count += 1;
        from += pos + needle.len();
    }
    count
}

/// Renders the frequency report for one article: a header with title and
/// authors, then one `keyword: count` line per keyword.
pub fn frequency_report(record: &ArticleRecord) -> String {
    let mut out = String::new();
    out.push_str("--- Keyword Frequency ---\n");
    out.push_str(&format!("Title: {}\n", record.title()));
    out.push_str(&format!("Authors: {}\n", record.authors_joined()));

    for keyword in record.keywords() {
        let count = keyword_frequency(record.body(), keyword);
        out.push_str(&format!("  {}: {}\n", keyword, count));
    }
    out
}

fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped: String = lowered
        .chars()
        .map(|c| match c {
            '.' | ',' | ';' | ':' | '(' | ')' => ' ',
            other => other,
        })
        .collect();
    stripped.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_case_insensitively() {
        assert_eq!(keyword_frequency("Crypto and crypto and CRYPTO", "crypto"), 3);
    }

    #[test]
    fn test_punctuation_does_not_block_matches() {
        assert_eq!(keyword_frequency("routing. Routing, (routing)", "routing"), 3);
    }

    #[test]
    fn test_multi_word_phrase() {
        let body = "Onion routing; onion routing is layered.";
        assert_eq!(keyword_frequency(body, "onion routing"), 2);
    }

    #[test]
    fn test_occurrences_do_not_overlap() {
        assert_eq!(keyword_frequency("aaaa", "aa"), 2);
    }

    #[test]
    fn test_empty_keyword_counts_zero() {
        assert_eq!(keyword_frequency("anything", ""), 0);
        assert_eq!(keyword_frequency("anything", "   "), 0);
    }

    #[test]
    fn test_missing_keyword_counts_zero() {
        assert_eq!(keyword_frequency("a short body", "absent"), 0);
    }

    #[test]
    fn test_report_layout() {
        let record = ArticleRecord::new(
            "T",
            vec!["Ada".to_string(), "Alan".to_string()],
            "net net other",
            vec!["net".to_string(), "gone".to_string()],
        );
        let report = frequency_report(&record);

        assert!(report.starts_with("--- Keyword Frequency ---\n"));
        assert!(report.contains("Title: T\n"));
        assert!(report.contains("Authors: Ada, Alan\n"));
        assert!(report.contains("  net: 2\n"));
        assert!(report.contains("  gone: 0\n"));
    }
}
