//! Error types for gate configuration

use thiserror::Error;

/// Errors raised while loading or compiling a gate configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GateError {
    /// The configuration document could not be parsed
    #[error("Invalid gate configuration: {0}")]
    Config(String),

    /// A needs-changelog pattern is not a valid glob
    #[error("Invalid needs-changelog pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    /// The changelog file name is blank
    #[error("Changelog file name must not be empty")]
    EmptyChangelogFile,
}

impl From<toml::de::Error> for GateError {
    fn from(err: toml::de::Error) -> Self {
        GateError::Config(err.to_string())
    }
}
