//! CLI argument definitions using clap
//!
//! Commands:
//! - objschema check --config <path>
//! - objschema kinds
//! - objschema resolve <type> [--list-element]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// objschema - field classification and schema validation for persistent entity classes
#[derive(Parser, Debug)]
#[command(name = "objschema")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Classify and validate every class in the model directory
    Check {
        /// Path to configuration file
        #[arg(long, default_value = "./objschema.json")]
        config: PathBuf,
    },

    /// Print the field-kind registry
    Kinds,

    /// Resolve a single type name against the mapping table
    Resolve {
        /// Declared type name, exactly as written in source
        type_name: String,

        /// Resolve as a list element type instead of a scalar
        #[arg(long)]
        list_element: bool,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_default_config() {
        let cli = Cli::try_parse_from(["objschema", "check"]).unwrap();
        match cli.command {
            Command::Check { config } => assert_eq!(config, PathBuf::from("./objschema.json")),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_resolve_list_element_flag() {
        let cli = Cli::try_parse_from(["objschema", "resolve", "java.lang.Long", "--list-element"]).unwrap();
        match cli.command {
            Command::Resolve { type_name, list_element } => {
                assert_eq!(type_name, "java.lang.Long");
                assert!(list_element);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }
}
