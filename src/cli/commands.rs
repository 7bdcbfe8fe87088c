//! CLI command implementations
//!
//! Boot sequence is the same for every command: bind the flat-file store,
//! replay it through the catalog, then run the one requested operation.
//! Replay tolerates duplicate titles so a re-run over an already-appended
//! file stays idempotent.

use std::path::Path;

use crate::analyzer;
use crate::catalog::{Catalog, CatalogError};
use crate::collections::LinkedList;
use crate::model::ArticleRecord;
use crate::observability::{Logger, Severity};
use crate::parser;
use crate::store::FlatFileStore;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parses arguments and dispatches; the entry point used by main.
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

/// Runs one parsed command.
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Add { file, db } => add(&file, &db),
        Command::Get { title, db, json } => get(&title, &db, json),
        Command::ByAuthor { author, db, json } => by_author(&author, &db, json),
        Command::ByKeyword { keyword, db, json } => by_keyword(&keyword, &db, json),
        Command::Titles { db } => titles(&db),
        Command::Authors { db } => authors(&db),
        Command::Keywords { db } => keywords(&db),
        Command::Analyze { title, db } => analyze(&title, &db),
    }
}

/// Rebuilds the catalog from the persisted records.
fn boot_catalog(store: &FlatFileStore) -> CliResult<Catalog> {
    let mut catalog = Catalog::new();
    for record in store.load_all()? {
        let title = record.title().to_string();
        if let Err(CatalogError::DuplicateTitle(_)) = catalog.add_article(record) {
            Logger::log_stderr(
                Severity::Warn,
                "replay_duplicate_skipped",
                &[("title", &title)],
            );
        }
    }
    Logger::log_stderr(
        Severity::Info,
        "catalog_loaded",
        &[("articles", &catalog.len().to_string())],
    );
    Ok(catalog)
}

fn add(file: &Path, db: &Path) -> CliResult<()> {
    let record = parser::parse_file(file)?;
    let store = FlatFileStore::open(db);
    let mut catalog = boot_catalog(&store)?;

    let title = catalog.add_article(record.clone())?;
    store.append(&record)?;

    Logger::log_stderr(Severity::Info, "article_indexed", &[("title", &title)]);
    println!("indexed '{}'", title);
    Ok(())
}

fn get(title: &str, db: &Path, json: bool) -> CliResult<()> {
    let catalog = boot_catalog(&FlatFileStore::open(db))?;
    let record = catalog
        .find_by_title(title)
        .ok_or_else(|| CliError::UnknownTitle(title.to_string()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(record)?);
    } else {
        print_record(record);
    }
    Ok(())
}

fn by_author(author: &str, db: &Path, json: bool) -> CliResult<()> {
    let catalog = boot_catalog(&FlatFileStore::open(db))?;
    print_records(&catalog.find_by_author(author), json)
}

fn by_keyword(keyword: &str, db: &Path, json: bool) -> CliResult<()> {
    let catalog = boot_catalog(&FlatFileStore::open(db))?;
    print_records(&catalog.find_by_keyword(keyword), json)
}

fn titles(db: &Path) -> CliResult<()> {
    let catalog = boot_catalog(&FlatFileStore::open(db))?;
    for title in &catalog.all_titles() {
        println!("{}", title);
    }
    Ok(())
}

fn authors(db: &Path) -> CliResult<()> {
    let catalog = boot_catalog(&FlatFileStore::open(db))?;
    for author in &catalog.all_authors() {
        println!("{}", author);
    }
    Ok(())
}

fn keywords(db: &Path) -> CliResult<()> {
    let catalog = boot_catalog(&FlatFileStore::open(db))?;
    for keyword in &catalog.all_keywords() {
        println!("{}", keyword);
    }
    Ok(())
}

fn analyze(title: &str, db: &Path) -> CliResult<()> {
    let catalog = boot_catalog(&FlatFileStore::open(db))?;
    let record = catalog
        .find_by_title(title)
        .ok_or_else(|| CliError::UnknownTitle(title.to_string()))?;

    print!("{}", analyzer::frequency_report(record));
    Ok(())
}

fn print_records(records: &LinkedList<ArticleRecord>, json: bool) -> CliResult<()> {
    if json {
        let all: Vec<&ArticleRecord> = records.iter().collect();
        println!("{}", serde_json::to_string_pretty(&all)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("no matching articles");
        return Ok(());
    }
    for record in records {
        print_record(record);
    }
    Ok(())
}

fn print_record(record: &ArticleRecord) {
    println!("TITLE: {}", record.title());
    println!("AUTHORS: {}", record.authors_joined());
    println!("KEYWORDS: {}", record.keywords().join(", "));
    println!("{}", record.body());
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    fn record(title: &str) -> ArticleRecord {
        ArticleRecord::new(
            title,
            vec!["Ada".to_string()],
            "body",
            vec!["net".to_string()],
        )
    }

    #[test]
    fn test_boot_catalog_replays_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = FlatFileStore::open(dir.path().join("articles.db"));
        store.append(&record("A")).unwrap();
        store.append(&record("B")).unwrap();

        let catalog = boot_catalog(&store).unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.find_by_title("A").is_some());
    }

    #[test]
    fn test_boot_catalog_skips_replayed_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        let store = FlatFileStore::open(dir.path().join("articles.db"));
        store.append(&record("A")).unwrap();
        store.append(&record("A")).unwrap();

        let catalog = boot_catalog(&store).unwrap();
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_boot_catalog_ignores_partial_trailing_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("articles.db");
        let store = FlatFileStore::open(&path);
        store.append(&record("A")).unwrap();

        // Simulate an interrupted append.
        let mut file = std::fs::OpenOptions::new()
            .append(true)
            .open(&path)
            .unwrap();
        write!(file, "Half##a##record").unwrap();

        let catalog = boot_catalog(&store).unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
