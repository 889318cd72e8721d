//! Printable description of a registry

use serde::Serialize;

use crate::error::SchemaError;
use crate::registry::SchemaRegistry;
use crate::rules::FieldRule;

/// One node of the schema tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaDescription {
    /// Field name (the schema name for the root)
    pub name: String,
    /// Expected kind, e.g. "string" or "sequence<layout>"
    pub kind: String,
    pub required: bool,
    /// Fields of the referenced schema, for nested maps and sequences
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<SchemaDescription>,
}

impl SchemaRegistry {
    /// Expand the root schema into a tree
    ///
    /// Self-referencing schemas are expanded once per branch.
    pub fn describe(&self) -> SchemaDescription {
        self.describe_node(self.root())
    }

    /// Expand a single registered schema
    pub fn describe_schema(&self, name: &str) -> Result<SchemaDescription, SchemaError> {
        if self.get(name).is_none() {
            return Err(SchemaError::UnknownSchema(name.to_string()));
        }
        Ok(self.describe_node(name))
    }

    fn describe_node(&self, name: &str) -> SchemaDescription {
        let mut stack = Vec::new();
        SchemaDescription {
            name: name.to_string(),
            kind: format!("map<{}>", name),
            required: true,
            children: self.describe_fields(name, &mut stack),
        }
    }

    fn describe_fields<'a>(&'a self, schema: &'a str, stack: &mut Vec<&'a str>) -> Vec<SchemaDescription> {
        let Some(def) = self.get(schema) else {
            return Vec::new();
        };
        if stack.contains(&schema) {
            return Vec::new();
        }

        stack.push(schema);
        let children = def
            .fields()
            .iter()
            .map(|field| SchemaDescription {
                name: field.name.clone(),
                kind: field.rule.expected().to_string(),
                required: field.required,
                children: match &field.rule {
                    FieldRule::Schema(name) | FieldRule::SequenceOf(name) => {
                        self.describe_fields(name, stack)
                    }
                    FieldRule::Primitive(_) | FieldRule::AnyObject => Vec::new(),
                },
            })
            .collect();
        stack.pop();

        children
    }
}

#[cfg(test)]
mod tests {
    use crate::error::SchemaError;
    use crate::registry::SchemaRegistry;
    use crate::rules::{FieldRule, SchemaDef};

    #[test]
    fn test_describe_expands_references() {
        let registry = SchemaRegistry::builder("root")
            .register(SchemaDef::new("root").optional("children", FieldRule::sequence_of("node")))
            .register(
                SchemaDef::new("node")
                    .required("id", FieldRule::string())
                    .optional("next", FieldRule::schema("node")),
            )
            .build()
            .unwrap();

        let tree = registry.describe();
        assert_eq!(tree.kind, "map<root>");
        let children = &tree.children[0];
        assert_eq!(children.kind, "sequence<node>");
        assert_eq!(children.children.len(), 2);

        // "next" refers back to "node", which is already being expanded
        let next = &children.children[1];
        assert_eq!(next.kind, "map<node>");
        assert!(next.children.is_empty());

        let node = registry.describe_schema("node").unwrap();
        assert_eq!(node.kind, "map<node>");
        assert_eq!(node.children[1].children.len(), 0);

        assert_eq!(
            registry.describe_schema("leaf").unwrap_err(),
            SchemaError::UnknownSchema("leaf".to_string())
        );
    }
}
