//! CLI module for objschema
//!
//! Provides command-line interface for:
//! - check: classify and validate a class model directory
//! - kinds: print the field-kind registry
//! - resolve: look up one type name

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, compile_model, kinds, report_json, resolve, run, run_command};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response, write_value};
