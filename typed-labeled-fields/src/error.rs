//! Error types for the field registry

use thiserror::Error;

/// Result type for field registry operations
pub type Result<T> = std::result::Result<T, FieldsError>;

/// Errors that can occur in field registry operations
#[derive(Debug, Error)]
pub enum FieldsError {
    /// Field not found by name
    #[error("field not found: {name}")]
    FieldNotFound { name: String },

    /// Field not found by ULID
    #[error("field not found by id: {id}")]
    FieldNotFoundById { id: String },

    /// Another definition already uses this name
    #[error("duplicate field name: {name}")]
    DuplicateFieldName { name: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}
