//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// The singleton settings record has not been created yet
    #[error("Settings not found: {0}")]
    SettingsNotFound(String),

    /// Record not found
    #[error("Record not found: {record_type} {name}")]
    RecordNotFound { record_type: String, name: String },

    /// Schema definition is not known to the store
    #[error("Schema not found: {0}")]
    SchemaNotFound(String),

    /// Primary key already taken
    #[error("Duplicate record: {record_type} {name}")]
    DuplicateRecord { record_type: String, name: String },

    /// Secret field has no stored value
    #[error("Secret not set: {0}")]
    SecretNotSet(String),

    /// Secret could not be encrypted or decrypted
    #[error("Secret error: {0}")]
    SecretError(String),

    /// Storage layer error
    #[error("Storage error: {0}")]
    StorageError(String),

    /// serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Validation error
    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl CoreError {
    /// Whether it is expected behavior (missing setup, bad input, etc.), used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    /// **Please update this method simultaneously when new variants are added. **
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::SettingsNotFound(_)
            | Self::RecordNotFound { .. }
            | Self::SecretNotSet(_)
            | Self::ValidationError(_) => true,
            Self::SchemaNotFound(_)
            | Self::DuplicateRecord { .. }
            | Self::SecretError(_)
            | Self::StorageError(_)
            | Self::SerializationError(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
