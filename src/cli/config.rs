//! Configuration file
//!
//! ```json
//! {
//!   "model_dir": "model",
//!   "parallel": true,
//!   "max_threads": 4,
//!   "extra_collection_types": ["kotlin.collections.List"],
//!   "log_level": "info"
//! }
//! ```
//!
//! A relative `model_dir` is resolved against the directory holding the
//! configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::grammar;
use crate::observability::Severity;
use crate::schema::{CompilerOptions, EntityCatalog};

use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory of class model JSON files (required)
    pub model_dir: String,

    /// Compile classes on worker threads (optional, default true)
    #[serde(default = "default_parallel")]
    pub parallel: bool,

    /// Worker thread limit (optional, default 4)
    #[serde(default = "default_max_threads")]
    pub max_threads: usize,

    /// Additional container types recognized as collections (optional)
    #[serde(default)]
    pub extra_collection_types: Vec<String>,

    /// Lowest log severity written (optional, default "info")
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Directory the file was loaded from
    #[serde(skip)]
    base_dir: PathBuf,
}

fn default_parallel() -> bool {
    true
}
fn default_max_threads() -> usize {
    4
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_json(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse and validate configuration JSON
    pub fn from_json(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if self.model_dir.trim().is_empty() {
            return Err(CliError::config_error("model_dir must not be empty"));
        }

        if self.max_threads == 0 {
            return Err(CliError::config_error("max_threads must be > 0"));
        }

        for name in &self.extra_collection_types {
            if !grammar::is_qualified_name(name) {
                return Err(CliError::config_error(format!(
                    "Invalid extra_collection_types entry: '{}'",
                    name
                )));
            }
        }

        self.severity()?;

        Ok(())
    }

    /// Model directory, resolved against the config file location
    pub fn model_path(&self) -> PathBuf {
        let dir = Path::new(&self.model_dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            self.base_dir.join(dir)
        }
    }

    pub fn severity(&self) -> CliResult<Severity> {
        Severity::parse(&self.log_level).ok_or_else(|| {
            CliError::config_error(format!(
                "Invalid log_level: '{}'. Must be one of trace, info, warn, error, fatal.",
                self.log_level
            ))
        })
    }

    pub fn compiler_options(&self) -> CompilerOptions {
        CompilerOptions {
            parallel: self.parallel,
            max_threads: self.max_threads,
        }
    }

    /// Adds the configured collection types to a catalog
    pub fn apply_to_catalog(&self, catalog: &mut EntityCatalog) {
        for name in &self.extra_collection_types {
            catalog.add_collection_type(name.as_str());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::from_json(r#"{"model_dir": "model"}"#).unwrap();
        assert!(config.parallel);
        assert_eq!(config.max_threads, 4);
        assert!(config.extra_collection_types.is_empty());
        assert_eq!(config.severity().unwrap(), Severity::Info);
    }

    #[test]
    fn test_missing_model_dir() {
        let err = Config::from_json(r#"{"parallel": false}"#).unwrap_err();
        assert_eq!(err.code_str(), "OBJSCHEMA_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_zero_threads_rejected() {
        let err = Config::from_json(r#"{"model_dir": "m", "max_threads": 0}"#).unwrap_err();
        assert!(err.message().contains("max_threads"));
    }

    #[test]
    fn test_bad_collection_type_rejected() {
        let err = Config::from_json(r#"{"model_dir": "m", "extra_collection_types": ["List<T>"]}"#).unwrap_err();
        assert!(err.message().contains("extra_collection_types"));
    }

    #[test]
    fn test_bad_log_level_rejected() {
        let err = Config::from_json(r#"{"model_dir": "m", "log_level": "chatty"}"#).unwrap_err();
        assert!(err.message().contains("log_level"));
    }

    #[test]
    fn test_model_path_relative_to_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("objschema.json");
        fs::write(&path, r#"{"model_dir": "model"}"#).unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.model_path(), temp_dir.path().join("model"));
    }

    #[test]
    fn test_apply_to_catalog() {
        let config = Config::from_json(
            r#"{"model_dir": "m", "extra_collection_types": ["kotlin.collections.List"]}"#,
        )
        .unwrap();
        let mut catalog = EntityCatalog::new();
        config.apply_to_catalog(&mut catalog);
        assert!(catalog.is_collection("kotlin.collections.List"));
        assert!(config.compiler_options().parallel);
    }
}
