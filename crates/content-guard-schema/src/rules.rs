//! Field rules and named schema definitions
//!
//! A schema is an ordered list of field specifications. Nested structure is
//! expressed by referring to other schemas by name, so one sub-schema can be
//! shared by several parents.

use crate::kind::{ExpectedKind, PrimitiveKind};

/// How a single field's value is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRule {
    /// Scalar of the given kind
    Primitive(PrimitiveKind),
    /// Any map; contents are not inspected
    AnyObject,
    /// Map validated against the named schema
    Schema(String),
    /// Sequence whose elements are maps validated against the named schema
    SequenceOf(String),
}

impl FieldRule {
    pub fn string() -> Self {
        FieldRule::Primitive(PrimitiveKind::String)
    }

    pub fn number() -> Self {
        FieldRule::Primitive(PrimitiveKind::Number)
    }

    pub fn bool() -> Self {
        FieldRule::Primitive(PrimitiveKind::Bool)
    }

    pub fn schema(name: impl Into<String>) -> Self {
        FieldRule::Schema(name.into())
    }

    pub fn sequence_of(name: impl Into<String>) -> Self {
        FieldRule::SequenceOf(name.into())
    }

    /// Kind reported when a value does not satisfy this rule
    pub fn expected(&self) -> ExpectedKind {
        match self {
            FieldRule::Primitive(kind) => (*kind).into(),
            FieldRule::AnyObject => ExpectedKind::Object,
            FieldRule::Schema(name) => ExpectedKind::Map(name.clone()),
            FieldRule::SequenceOf(name) => ExpectedKind::Sequence(name.clone()),
        }
    }

    /// Schema this rule delegates to, if any
    pub fn referenced_schema(&self) -> Option<&str> {
        match self {
            FieldRule::Schema(name) | FieldRule::SequenceOf(name) => Some(name),
            FieldRule::Primitive(_) | FieldRule::AnyObject => None,
        }
    }
}

/// One field of a schema
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: String,
    pub required: bool,
    pub rule: FieldRule,
}

impl FieldSpec {
    pub fn required(name: impl Into<String>, rule: FieldRule) -> Self {
        Self {
            name: name.into(),
            required: true,
            rule,
        }
    }

    pub fn optional(name: impl Into<String>, rule: FieldRule) -> Self {
        Self {
            name: name.into(),
            required: false,
            rule,
        }
    }
}

/// A named map schema
///
/// Fields not listed are accepted without inspection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDef {
    name: String,
    fields: Vec<FieldSpec>,
}

impl SchemaDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a required field
    pub fn required(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.push(FieldSpec::required(name, rule));
        self
    }

    /// Add an optional field
    pub fn optional(mut self, name: impl Into<String>, rule: FieldRule) -> Self {
        self.fields.push(FieldSpec::optional(name, rule));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }
}
