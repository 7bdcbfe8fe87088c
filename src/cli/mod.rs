//! CLI module for scholardb
//!
//! Provides the command-line surface:
//! - add: parse an article file and index it
//! - get / by-author / by-keyword: one-shot queries
//! - titles / authors / keywords: full enumerations
//! - analyze: keyword-frequency report for one article
//!
//! Every command rebuilds the catalog by replaying the flat-file store,
//! runs one operation, and exits.

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliResult};
