//! Violations and validation outcomes

use serde::Serialize;
use std::fmt;

use crate::kind::{ExpectedKind, ValueKind};
use crate::path::FieldPath;

/// Why a field failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// A required field is absent
    MissingRequiredField,
    /// A required field is present but null
    NullRequiredField,
    /// A field holds a value of the wrong kind
    WrongType,
    /// The document root is not a map
    InvalidRoot,
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationKind::MissingRequiredField => write!(f, "missing_required_field"),
            ViolationKind::NullRequiredField => write!(f, "null_required_field"),
            ViolationKind::WrongType => write!(f, "wrong_type"),
            ViolationKind::InvalidRoot => write!(f, "invalid_root"),
        }
    }
}

/// A single failing field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Violation {
    /// Reason for the failure
    pub kind: ViolationKind,
    /// Location of the failing field (e.g. "$.templates_data[0].global_id")
    pub path: FieldPath,
    /// Kind the schema declares for this field
    pub expected: ExpectedKind,
    /// Kind actually found, when a value was present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<ValueKind>,
}

impl Violation {
    pub fn missing(path: FieldPath, expected: ExpectedKind) -> Self {
        Self {
            kind: ViolationKind::MissingRequiredField,
            path,
            expected,
            actual: None,
        }
    }

    pub fn null(path: FieldPath, expected: ExpectedKind) -> Self {
        Self {
            kind: ViolationKind::NullRequiredField,
            path,
            expected,
            actual: Some(ValueKind::Null),
        }
    }

    pub fn wrong_type(path: FieldPath, expected: ExpectedKind, actual: ValueKind) -> Self {
        Self {
            kind: ViolationKind::WrongType,
            path,
            expected,
            actual: Some(actual),
        }
    }

    pub fn invalid_root(expected: ExpectedKind, actual: ValueKind) -> Self {
        Self {
            kind: ViolationKind::InvalidRoot,
            path: FieldPath::root(),
            expected,
            actual: Some(actual),
        }
    }

    /// Human-readable description, without the path
    pub fn message(&self) -> String {
        match self.kind {
            ViolationKind::MissingRequiredField => {
                format!("Required field is missing (expected {})", self.expected)
            }
            ViolationKind::NullRequiredField => {
                format!("Required field is null (expected {})", self.expected)
            }
            ViolationKind::WrongType => format!(
                "Expected {} but found {}",
                self.expected,
                self.actual_name()
            ),
            ViolationKind::InvalidRoot => format!(
                "Document root must be {} but found {}",
                self.expected,
                self.actual_name()
            ),
        }
    }

    fn actual_name(&self) -> String {
        self.actual
            .map(|kind| kind.to_string())
            .unwrap_or_else(|| "nothing".to_string())
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] at '{}': {}", self.kind, self.path, self.message())
    }
}

/// Result of validating one document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "violations", rename_all = "snake_case")]
pub enum ValidationOutcome {
    Valid,
    Invalid(Vec<Violation>),
}

impl ValidationOutcome {
    /// `Valid` when the list is empty
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        if violations.is_empty() {
            ValidationOutcome::Valid
        } else {
            ValidationOutcome::Invalid(violations)
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn violations(&self) -> &[Violation] {
        match self {
            ValidationOutcome::Valid => &[],
            ValidationOutcome::Invalid(violations) => violations,
        }
    }

    pub fn into_result(self) -> Result<(), Vec<Violation>> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(violations) => Err(violations),
        }
    }
}
