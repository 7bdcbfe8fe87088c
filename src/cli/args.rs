//! CLI argument definitions using clap
//!
//! Commands:
//! - scholardb add <file> [--db <path>]
//! - scholardb get <title> [--db <path>] [--json]
//! - scholardb by-author <author> / by-keyword <keyword>
//! - scholardb titles / authors / keywords
//! - scholardb analyze <title>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const DEFAULT_DB: &str = "./articles.db";

/// scholardb - a deterministic in-memory index for scientific articles
#[derive(Parser, Debug)]
#[command(name = "scholardb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Parse an article file and add it to the index
    Add {
        /// Path to the article text file
        file: PathBuf,

        /// Path to the flat-file article database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },

    /// Look up one article by exact title
    Get {
        /// Exact article title
        title: String,

        /// Path to the flat-file article database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,

        /// Emit the record as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List articles written by an author (case-sensitive)
    ByAuthor {
        /// Author name, matched exactly after trimming
        author: String,

        /// Path to the flat-file article database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,

        /// Emit the records as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List articles tagged with a keyword (case-insensitive)
    ByKeyword {
        /// Keyword, matched after trimming and lower-casing
        keyword: String,

        /// Path to the flat-file article database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,

        /// Emit the records as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List all indexed titles
    Titles {
        /// Path to the flat-file article database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },

    /// List all indexed authors, ascending
    Authors {
        /// Path to the flat-file article database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },

    /// List all indexed keywords, ascending
    Keywords {
        /// Path to the flat-file article database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },

    /// Print the keyword-frequency report for one article
    Analyze {
        /// Exact article title
        title: String,

        /// Path to the flat-file article database
        #[arg(long, default_value = DEFAULT_DB)]
        db: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
