//! scholardb CLI entry point
//!
//! Minimal by design: parse and dispatch happen in cli::run; main only
//! reports failure and sets the exit code.

use scholardb::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
