//! # Class model errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for class model loading
pub type ModelResult<T> = Result<T, ModelError>;

/// Failures reading or checking a class model.
///
/// These are input errors: the model never reached the classifier.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid class model JSON in '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Malformed class name '{0}'")]
    InvalidClassName(String),

    #[error("Malformed field name '{field}' in class '{class}'")]
    InvalidFieldName { class: String, field: String },

    #[error("Malformed type name '{type_name}' on field '{class}.{field}'")]
    InvalidTypeName {
        class: String,
        field: String,
        type_name: String,
    },

    #[error("Class '{0}' declared more than once")]
    DuplicateClass(String),
}

impl ModelError {
    /// Stable code for reporting
    pub fn code(&self) -> &'static str {
        match self {
            ModelError::Io { .. } => "OBJSCHEMA_MODEL_IO",
            ModelError::Parse { .. } => "OBJSCHEMA_MODEL_PARSE",
            ModelError::InvalidClassName(_)
            | ModelError::InvalidFieldName { .. }
            | ModelError::InvalidTypeName { .. } => "OBJSCHEMA_MODEL_MALFORMED_NAME",
            ModelError::DuplicateClass(_) => "OBJSCHEMA_MODEL_DUPLICATE_CLASS",
        }
    }
}
