//! Error types for schema construction and typed decoding

use thiserror::Error;

use crate::violation::Violation;

/// Errors raised while assembling a schema registry
///
/// Validation itself never fails; these only surface when a registry is
/// built from inconsistent definitions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    /// The root schema named by the builder was never registered
    #[error("Root schema '{0}' is not registered")]
    UnknownRoot(String),

    /// A lookup named a schema that does not exist
    #[error("Schema '{0}' is not registered")]
    UnknownSchema(String),

    /// A field refers to a schema that does not exist
    #[error("Schema '{schema}' field '{field}' references unregistered schema '{reference}'")]
    UnknownReference {
        schema: String,
        field: String,
        reference: String,
    },

    /// Two definitions share a name
    #[error("Schema '{0}' is registered more than once")]
    DuplicateSchema(String),
}

/// Errors raised while decoding a document into the typed report model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    /// The document does not satisfy the report schema
    #[error("Document does not match the report schema ({} violation(s))", .0.len())]
    Invalid(Vec<Violation>),

    /// The document validated but could not be mapped onto the typed model
    #[error("Document could not be decoded: {0}")]
    Malformed(String),
}

impl DecodeError {
    /// Violations carried by an invalid document, empty otherwise
    pub fn violations(&self) -> &[Violation] {
        match self {
            DecodeError::Invalid(violations) => violations,
            DecodeError::Malformed(_) => &[],
        }
    }
}
