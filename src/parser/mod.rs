//! Flat-file article parser
//!
//! Reads the project's structured text format: a title line, an `Authors`
//! section with one name per line, an `Abstract` section, and a terminating
//! `Keywords: a, b, c` line.

mod errors;
mod reader;

pub use errors::{ParseError, ParseResult};
pub use reader::{parse_file, parse_reader};
