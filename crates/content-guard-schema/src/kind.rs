//! Value kinds observed in documents and expected by rules

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

/// Kind of a node in an untyped document tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Sequence,
    Map,
}

impl ValueKind {
    /// Classify a tree node
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Sequence,
            Value::Object(_) => ValueKind::Map,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueKind::Null => write!(f, "null"),
            ValueKind::Bool => write!(f, "bool"),
            ValueKind::Number => write!(f, "number"),
            ValueKind::String => write!(f, "string"),
            ValueKind::Sequence => write!(f, "sequence"),
            ValueKind::Map => write!(f, "map"),
        }
    }
}

/// Scalar kinds a field may declare
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    String,
    Number,
    Bool,
}

impl PrimitiveKind {
    /// Strict kind check: no coercion between scalars
    pub fn matches(&self, value: &Value) -> bool {
        matches!(
            (self, value),
            (PrimitiveKind::String, Value::String(_))
                | (PrimitiveKind::Number, Value::Number(_))
                | (PrimitiveKind::Bool, Value::Bool(_))
        )
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveKind::String => write!(f, "string"),
            PrimitiveKind::Number => write!(f, "number"),
            PrimitiveKind::Bool => write!(f, "bool"),
        }
    }
}

/// What a rule expected to find, as reported in violations
///
/// Renders as `string`, `number`, `bool`, `object`, `sequence<NAME>` or
/// `map<NAME>`, where `NAME` is the referenced schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ExpectedKind {
    String,
    Number,
    Bool,
    /// Any map, contents not inspected
    Object,
    /// Sequence whose elements follow the named schema
    Sequence(String),
    /// Map following the named schema
    Map(String),
}

impl From<PrimitiveKind> for ExpectedKind {
    fn from(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::String => ExpectedKind::String,
            PrimitiveKind::Number => ExpectedKind::Number,
            PrimitiveKind::Bool => ExpectedKind::Bool,
        }
    }
}

impl fmt::Display for ExpectedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpectedKind::String => write!(f, "string"),
            ExpectedKind::Number => write!(f, "number"),
            ExpectedKind::Bool => write!(f, "bool"),
            ExpectedKind::Object => write!(f, "object"),
            ExpectedKind::Sequence(name) => write!(f, "sequence<{}>", name),
            ExpectedKind::Map(name) => write!(f, "map<{}>", name),
        }
    }
}

impl Serialize for ExpectedKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
