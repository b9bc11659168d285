//! CLI-specific error types

use std::fmt;
use std::io;

use crate::model::ModelError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (stdout)
    IoError,
    /// Class model could not be loaded
    ModelError,
    /// At least one class was rejected
    SchemaRejected,
    /// Type name did not resolve
    Unresolved,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "OBJSCHEMA_CLI_CONFIG_ERROR",
            Self::IoError => "OBJSCHEMA_CLI_IO_ERROR",
            Self::ModelError => "OBJSCHEMA_CLI_MODEL_ERROR",
            Self::SchemaRejected => "OBJSCHEMA_CLI_SCHEMA_REJECTED",
            Self::Unresolved => "OBJSCHEMA_CLI_UNRESOLVED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Some classes must not proceed to emission
    pub fn schema_rejected(rejected: usize) -> Self {
        Self::new(
            CliErrorCode::SchemaRejected,
            format!("{} class(es) rejected", rejected),
        )
    }

    pub fn unresolved(type_name: &str) -> Self {
        Self::new(
            CliErrorCode::Unresolved,
            format!("No field kind registered for '{}'", type_name),
        )
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<ModelError> for CliError {
    fn from(e: ModelError) -> Self {
        Self::new(CliErrorCode::ModelError, format!("{}: {}", e.code(), e))
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
