//! Schema registry and recursive validator
//!
//! Schemas are registered by name and refer to each other through
//! [`FieldRule::Schema`] and [`FieldRule::SequenceOf`]. The builder checks
//! every reference once, so walking a document never has to fail.

use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::error::SchemaError;
use crate::kind::{ExpectedKind, ValueKind};
use crate::path::FieldPath;
use crate::rules::{FieldRule, SchemaDef};
use crate::violation::{ValidationOutcome, Violation};

/// Builder for [`SchemaRegistry`]
#[derive(Debug, Clone)]
pub struct SchemaRegistryBuilder {
    root: String,
    schemas: HashMap<String, SchemaDef>,
    duplicates: Vec<String>,
}

impl SchemaRegistryBuilder {
    /// Start a registry whose documents are validated against `root`
    pub fn new(root: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            schemas: HashMap::new(),
            duplicates: Vec::new(),
        }
    }

    /// Register a named schema
    pub fn register(mut self, schema: SchemaDef) -> Self {
        let name = schema.name().to_string();
        if self.schemas.insert(name.clone(), schema).is_some() {
            self.duplicates.push(name);
        }
        self
    }

    /// Register several schemas
    pub fn register_all<I>(mut self, schemas: I) -> Self
    where
        I: IntoIterator<Item = SchemaDef>,
    {
        for schema in schemas {
            self = self.register(schema);
        }
        self
    }

    /// Check the root and every reference, then freeze the registry
    pub fn build(self) -> Result<SchemaRegistry, SchemaError> {
        if let Some(name) = self.duplicates.first() {
            return Err(SchemaError::DuplicateSchema(name.clone()));
        }

        if !self.schemas.contains_key(&self.root) {
            return Err(SchemaError::UnknownRoot(self.root));
        }

        let mut names: Vec<&String> = self.schemas.keys().collect();
        names.sort();
        for name in names {
            let schema = &self.schemas[name];
            for field in schema.fields() {
                if let Some(reference) = field.rule.referenced_schema() {
                    if !self.schemas.contains_key(reference) {
                        return Err(SchemaError::UnknownReference {
                            schema: name.clone(),
                            field: field.name.clone(),
                            reference: reference.to_string(),
                        });
                    }
                }
            }
        }

        Ok(self.build_unchecked())
    }

    /// Freeze without checking references; for definitions fixed at compile time
    pub(crate) fn build_unchecked(self) -> SchemaRegistry {
        SchemaRegistry {
            root: self.root,
            schemas: self.schemas,
        }
    }
}

/// A closed set of named schemas with a designated root
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    root: String,
    schemas: HashMap<String, SchemaDef>,
}

impl SchemaRegistry {
    pub fn builder(root: impl Into<String>) -> SchemaRegistryBuilder {
        SchemaRegistryBuilder::new(root)
    }

    /// Name of the root schema
    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn get(&self, name: &str) -> Option<&SchemaDef> {
        self.schemas.get(name)
    }

    /// Registered schema names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.schemas.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Validate a whole document against the root schema
    ///
    /// A root that is not a map yields a single `InvalidRoot` violation.
    pub fn validate(&self, document: &Value) -> ValidationOutcome {
        self.validate_root(&self.root, document)
    }

    /// Validate a value against any registered schema
    pub fn validate_as(&self, schema: &str, value: &Value) -> Result<ValidationOutcome, SchemaError> {
        if !self.schemas.contains_key(schema) {
            return Err(SchemaError::UnknownSchema(schema.to_string()));
        }
        Ok(self.validate_root(schema, value))
    }

    fn validate_root(&self, schema: &str, value: &Value) -> ValidationOutcome {
        let violations = match value {
            Value::Object(map) => {
                let mut violations = Vec::new();
                self.validate_map(schema, map, &FieldPath::root(), &mut violations);
                violations
            }
            other => vec![Violation::invalid_root(
                ExpectedKind::Map(schema.to_string()),
                ValueKind::of(other),
            )],
        };

        tracing::debug!(
            schema = %schema,
            violations = violations.len(),
            "Validated document"
        );

        ValidationOutcome::from_violations(violations)
    }

    fn validate_map(
        &self,
        schema: &str,
        map: &Map<String, Value>,
        path: &FieldPath,
        violations: &mut Vec<Violation>,
    ) {
        // References are resolved by the builder
        let Some(def) = self.schemas.get(schema) else {
            return;
        };

        for field in def.fields() {
            let field_path = path.key(field.name.as_str());
            match map.get(&field.name) {
                None if field.required => {
                    violations.push(Violation::missing(field_path, field.rule.expected()));
                }
                Some(Value::Null) if field.required => {
                    violations.push(Violation::null(field_path, field.rule.expected()));
                }
                None => {}
                // An optional null still has to match the rule
                Some(value) => self.validate_value(&field.rule, value, &field_path, violations),
            }
        }
    }

    fn validate_value(
        &self,
        rule: &FieldRule,
        value: &Value,
        path: &FieldPath,
        violations: &mut Vec<Violation>,
    ) {
        match (rule, value) {
            (FieldRule::Primitive(kind), value) if kind.matches(value) => {}
            (FieldRule::AnyObject, Value::Object(_)) => {}
            (FieldRule::Schema(name), Value::Object(map)) => {
                self.validate_map(name, map, path, violations);
            }
            (FieldRule::SequenceOf(name), Value::Array(items)) => {
                for (index, item) in items.iter().enumerate() {
                    let item_path = path.index(index);
                    match item {
                        Value::Object(map) => self.validate_map(name, map, &item_path, violations),
                        other => violations.push(Violation::wrong_type(
                            item_path,
                            ExpectedKind::Map(name.clone()),
                            ValueKind::of(other),
                        )),
                    }
                }
            }
            (rule, value) => violations.push(Violation::wrong_type(
                path.clone(),
                rule.expected(),
                ValueKind::of(value),
            )),
        }
    }
}
