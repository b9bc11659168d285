//! objschema CLI entry point
//!
//! Parses arguments, runs the command and exits non-zero on failure.
//! Everything else lives in the CLI module.

use objschema::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
