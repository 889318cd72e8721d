//! Error types for the content-guard CLI
//!
//! Provides structured error types for input loading, parsing and output.

use content_guard_changelog::GateError;
use content_guard_schema::SchemaError;
use thiserror::Error;

/// Main error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid input data or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// File access or I/O error
    #[error("File error: {0}")]
    FileError(String),

    /// Document parsing error
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Gate configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Schema registry error
    #[error("Schema error: {0}")]
    SchemaError(String),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Internal error
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl CliError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        CliError::InvalidInput(msg.into())
    }

    /// Create a file error
    pub fn file_error(msg: impl Into<String>) -> Self {
        CliError::FileError(msg.into())
    }

    /// Create a parse error
    pub fn parse_error(msg: impl Into<String>) -> Self {
        CliError::ParseError(msg.into())
    }

    /// Check if this is a user-facing error (vs internal)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            CliError::InvalidInput(_)
                | CliError::FileError(_)
                | CliError::ParseError(_)
                | CliError::ConfigError(_)
                | CliError::SchemaError(_)
        )
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::FileError(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::ParseError(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for CliError {
    fn from(err: serde_yaml::Error) -> Self {
        CliError::ParseError(format!("YAML error: {}", err))
    }
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::ConfigError(format!("TOML error: {}", err))
    }
}

impl From<GateError> for CliError {
    fn from(err: GateError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}

impl From<SchemaError> for CliError {
    fn from(err: SchemaError) -> Self {
        CliError::SchemaError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
