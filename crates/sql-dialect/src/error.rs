//! Error types for the dialect library.

use thiserror::Error;

use crate::core::value::ValueKind;

/// Main error type for dialect and rendering operations.
#[derive(Error, Debug)]
pub enum DialectError {
    /// Configuration error (unknown dialect, invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// The dialect has no sequence support, so no sequence query can be rendered.
    #[error("The {0} dialect does not support sequences")]
    SequencesUnsupported(String),

    /// A converter received a value of a kind it is not defined for.
    #[error("{converter} cannot convert a value of kind {kind}")]
    Conversion {
        converter: &'static str,
        kind: ValueKind,
    },

    /// IO error (config file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for dialect operations.
pub type Result<T> = std::result::Result<T, DialectError>;
