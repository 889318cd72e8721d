//! Contract tests for the XSIAM report schema
//!
//! Covers:
//! - fully populated documents
//! - one missing, null or mistyped field at each nesting level
//! - allow-empty maps and open-world extra fields
//! - non-map roots and YAML input

use content_guard_schema::{
    report_registry, validate_report, ExpectedKind, ValueKind, Violation, ViolationKind,
};
use serde_json::{json, Value};

/// A document exercising every described field
fn complete_report() -> Value {
    json!({
        "fromVersion": "8.3.0",
        "toVersion": "8.9.9",
        "templates_data": [{
            "global_id": "3ec4b0a6",
            "report_name": "Incident overview",
            "report_description": "Open incidents by severity",
            "default_template_id": 12,
            "time_frame": {"relativeTime": 86400000},
            "time_offset": 0,
            "layout": [
                {
                    "id": "row-1",
                    "data": [
                        {"key": "widget-1", "data": {"type": "Custom", "width": 50}},
                        {"key": "widget-2", "data": {}}
                    ]
                },
                {"id": "row-2", "data": []}
            ]
        }],
        "widgets_data": [{
            "widget_key": "widget-1",
            "title": "Severity",
            "creation_time": 1690000000000u64,
            "description": "Incidents grouped by severity",
            "data": {"phrase": "dataset = incidents | comp count() by severity"},
            "support_time_range": true,
            "additional_info": {"query_tables": ["incidents"]}
        }]
    })
}

fn violations_of(document: &Value) -> Vec<Violation> {
    validate_report(document).violations().to_vec()
}

fn remove(document: &mut Value, pointer: &str, field: &str) {
    document
        .pointer_mut(pointer)
        .and_then(Value::as_object_mut)
        .unwrap()
        .remove(field);
}

fn set(document: &mut Value, pointer: &str, field: &str, value: Value) {
    document
        .pointer_mut(pointer)
        .and_then(Value::as_object_mut)
        .unwrap()
        .insert(field.to_string(), value);
}

#[test]
fn test_complete_report_is_valid() {
    assert!(validate_report(&complete_report()).is_valid());
}

#[test]
fn test_empty_report_is_valid() {
    assert!(validate_report(&json!({})).is_valid());
}

#[test]
fn test_each_missing_required_field_is_reported_once() {
    let cases = [
        ("/templates_data/0", "global_id", "$.templates_data[0].global_id", ExpectedKind::String),
        ("/templates_data/0", "report_name", "$.templates_data[0].report_name", ExpectedKind::String),
        ("/templates_data/0", "time_offset", "$.templates_data[0].time_offset", ExpectedKind::Number),
        (
            "/templates_data/0",
            "layout",
            "$.templates_data[0].layout",
            ExpectedKind::Sequence("layout".to_string()),
        ),
        (
            "/templates_data/0/time_frame",
            "relativeTime",
            "$.templates_data[0].time_frame.relativeTime",
            ExpectedKind::Number,
        ),
        ("/templates_data/0/layout/1", "id", "$.templates_data[0].layout[1].id", ExpectedKind::String),
        (
            "/templates_data/0/layout/0",
            "data",
            "$.templates_data[0].layout[0].data",
            ExpectedKind::Sequence("layout_data".to_string()),
        ),
        (
            "/templates_data/0/layout/0/data/1",
            "key",
            "$.templates_data[0].layout[0].data[1].key",
            ExpectedKind::String,
        ),
        (
            "/templates_data/0/layout/0/data/0",
            "data",
            "$.templates_data[0].layout[0].data[0].data",
            ExpectedKind::Object,
        ),
    ];

    for (pointer, field, path, expected) in cases {
        let mut document = complete_report();
        remove(&mut document, pointer, field);

        let violations = violations_of(&document);
        assert_eq!(violations.len(), 1, "removing {}", path);
        assert_eq!(violations[0].kind, ViolationKind::MissingRequiredField);
        assert_eq!(violations[0].path, path);
        assert_eq!(violations[0].expected, expected);
        assert_eq!(violations[0].actual, None);
    }
}

#[test]
fn test_missing_optional_fields_are_accepted() {
    let mut document = complete_report();
    for field in ["report_description", "default_template_id", "time_frame"] {
        remove(&mut document, "/templates_data/0", field);
    }
    for field in ["widget_key", "title", "creation_time", "description", "data", "support_time_range", "additional_info"] {
        remove(&mut document, "/widgets_data/0", field);
    }
    remove(&mut document, "", "fromVersion");
    remove(&mut document, "", "toVersion");

    assert!(validate_report(&document).is_valid());
}

#[test]
fn test_required_numeric_field_with_string_value() {
    let mut document = complete_report();
    set(&mut document, "/templates_data/0", "time_offset", json!("0"));

    let violations = violations_of(&document);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::WrongType);
    assert_eq!(violations[0].expected, ExpectedKind::Number);
    assert_eq!(violations[0].actual, Some(ValueKind::String));
    assert_eq!(violations[0].path, "$.templates_data[0].time_offset");
}

#[test]
fn test_numeric_fields_reject_bool_and_string() {
    let mut document = complete_report();
    set(&mut document, "/templates_data/0/time_frame", "relativeTime", json!(true));
    set(&mut document, "/templates_data/0", "default_template_id", json!("12"));
    set(&mut document, "/widgets_data/0", "creation_time", json!("yesterday"));

    let violations = violations_of(&document);
    assert_eq!(violations.len(), 3);
    assert!(violations
        .iter()
        .all(|v| v.kind == ViolationKind::WrongType && v.expected == ExpectedKind::Number));
}

#[test]
fn test_null_required_field_is_distinct_from_missing() {
    let mut document = complete_report();
    set(&mut document, "/templates_data/0", "global_id", Value::Null);

    let violations = violations_of(&document);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::NullRequiredField);
    assert_eq!(violations[0].path, "$.templates_data[0].global_id");
    assert_eq!(violations[0].actual, Some(ValueKind::Null));
}

#[test]
fn test_optional_fields_set_to_null_are_wrong_type() {
    let mut document = complete_report();
    set(&mut document, "/templates_data/0", "default_template_id", Value::Null);
    set(&mut document, "/widgets_data/0", "creation_time", Value::Null);
    set(&mut document, "/widgets_data/0", "support_time_range", Value::Null);
    set(&mut document, "", "fromVersion", Value::Null);

    let violations = violations_of(&document);
    let found: Vec<(String, ExpectedKind)> = violations
        .iter()
        .map(|v| (v.path.to_string(), v.expected.clone()))
        .collect();
    assert_eq!(
        found,
        vec![
            ("$.templates_data[0].default_template_id".to_string(), ExpectedKind::Number),
            ("$.fromVersion".to_string(), ExpectedKind::String),
            ("$.widgets_data[0].creation_time".to_string(), ExpectedKind::Number),
            ("$.widgets_data[0].support_time_range".to_string(), ExpectedKind::Bool),
        ]
    );
    assert!(violations
        .iter()
        .all(|v| v.kind == ViolationKind::WrongType && v.actual == Some(ValueKind::Null)));
}

#[test]
fn test_allow_empty_data_accepts_anything_object_shaped() {
    let mut document = complete_report();
    set(
        &mut document,
        "/templates_data/0/layout/0/data/0",
        "data",
        json!({"a": {"b": [1, "two", null, {"c": false}]}, "": {}}),
    );
    set(&mut document, "/templates_data/0/layout/0/data/1", "data", json!({}));
    set(&mut document, "/widgets_data/0", "additional_info", json!({"nested": {"deeper": {}}}));

    assert!(validate_report(&document).is_valid());
}

#[test]
fn test_allow_empty_data_still_requires_an_object() {
    let mut document = complete_report();
    set(&mut document, "/templates_data/0/layout/0/data/0", "data", json!("{}"));

    let violations = violations_of(&document);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].expected, ExpectedKind::Object);
    assert_eq!(violations[0].actual, Some(ValueKind::String));
}

#[test]
fn test_extra_fields_are_accepted_at_every_level() {
    let mut document = complete_report();
    set(&mut document, "", "marketplaces", json!(["marketplacev2"]));
    set(&mut document, "/templates_data/0", "created_by", json!("admin"));
    set(&mut document, "/templates_data/0/time_frame", "absolute", json!(false));
    set(&mut document, "/templates_data/0/layout/0", "height", json!(3));
    set(&mut document, "/templates_data/0/layout/0/data/0", "span", json!(2));
    set(&mut document, "/widgets_data/0", "owner", json!(null));

    assert!(validate_report(&document).is_valid());
}

#[test]
fn test_non_map_root_short_circuits() {
    for root in [json!("report"), json!(42), json!(null), json!(true), json!([complete_report()])] {
        let violations = violations_of(&root);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].kind, ViolationKind::InvalidRoot);
        assert_eq!(violations[0].path, "$");
        assert_eq!(violations[0].expected, ExpectedKind::Map("report".to_string()));
    }
}

#[test]
fn test_template_element_that_is_not_a_map() {
    let document = json!({"templates_data": ["not-a-template"]});

    let violations = violations_of(&document);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::WrongType);
    assert_eq!(violations[0].path, "$.templates_data[0]");
    assert_eq!(violations[0].expected, ExpectedKind::Map("templates_data".to_string()));
}

#[test]
fn test_sequence_field_holding_a_map() {
    let document = json!({"widgets_data": {"widget_key": "w"}});

    let violations = violations_of(&document);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].expected, ExpectedKind::Sequence("widgets_data".to_string()));
    assert_eq!(violations[0].actual, Some(ValueKind::Map));
}

#[test]
fn test_versions_must_be_strings() {
    let document = json!({"fromVersion": 8, "toVersion": "8.9.9"});

    let violations = violations_of(&document);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "$.fromVersion");
    assert_eq!(violations[0].expected, ExpectedKind::String);
}

#[test]
fn test_violations_accumulate_across_entries() {
    let document = json!({
        "templates_data": [
            {"global_id": "a", "report_name": "A", "time_offset": 0, "layout": []},
            {"report_name": 7, "time_offset": 0, "layout": [{"id": "r", "data": [{"key": 1, "data": {}}]}]}
        ]
    });

    let paths: Vec<String> = violations_of(&document)
        .iter()
        .map(|v| v.path.to_string())
        .collect();
    assert_eq!(
        paths,
        vec![
            "$.templates_data[1].global_id",
            "$.templates_data[1].report_name",
            "$.templates_data[1].layout[0].data[0].key",
        ]
    );
}

#[test]
fn test_yaml_document() {
    let yaml = r#"
fromVersion: 8.3.0
templates_data:
- global_id: 3ec4b0a6
  report_name: Incident overview
  time_frame:
    relativeTime: 86400000
  time_offset: "0"
  layout:
  - id: row-1
    data:
    - key: widget-1
      data: {}
widgets_data: []
"#;
    let document: Value = serde_yaml::from_str(yaml).unwrap();

    let violations = violations_of(&document);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].path, "$.templates_data[0].time_offset");
    assert_eq!(violations[0].actual, Some(ValueKind::String));
}

#[test]
fn test_schema_description_lists_layout_tree() {
    let tree = report_registry().describe();
    let templates = tree
        .children
        .iter()
        .find(|c| c.name == "templates_data")
        .unwrap();
    let layout = templates.children.iter().find(|c| c.name == "layout").unwrap();

    assert!(layout.required);
    assert_eq!(layout.kind, "sequence<layout>");
    assert_eq!(layout.children[1].kind, "sequence<layout_data>");
    assert_eq!(layout.children[1].children[1].kind, "object");
}
