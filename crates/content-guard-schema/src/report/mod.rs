//! XSIAM report schemas
//!
//! ```text
//! report
//! ├── templates_data: sequence<templates_data>
//! │   ├── time_frame: map<time_frame>
//! │   └── layout: sequence<layout>
//! │       └── data: sequence<layout_data>
//! └── widgets_data: sequence<widgets_data>
//! ```

pub mod model;

use serde_json::Value;
use std::sync::OnceLock;

use crate::registry::SchemaRegistry;
use crate::rules::{FieldRule, SchemaDef};
use crate::violation::ValidationOutcome;

pub const REPORT: &str = "report";
pub const TEMPLATES_DATA: &str = "templates_data";
pub const TIME_FRAME: &str = "time_frame";
pub const LAYOUT: &str = "layout";
pub const LAYOUT_DATA: &str = "layout_data";
pub const WIDGETS_DATA: &str = "widgets_data";

/// The schema definitions making up the report contract
pub fn report_schemas() -> Vec<SchemaDef> {
    vec![
        SchemaDef::new(REPORT)
            .optional("templates_data", FieldRule::sequence_of(TEMPLATES_DATA))
            .optional("fromVersion", FieldRule::string())
            .optional("toVersion", FieldRule::string())
            .optional("widgets_data", FieldRule::sequence_of(WIDGETS_DATA)),
        SchemaDef::new(TEMPLATES_DATA)
            .required("global_id", FieldRule::string())
            .required("report_name", FieldRule::string())
            .optional("report_description", FieldRule::string())
            .optional("default_template_id", FieldRule::number())
            .optional("time_frame", FieldRule::schema(TIME_FRAME))
            .required("time_offset", FieldRule::number())
            .required("layout", FieldRule::sequence_of(LAYOUT)),
        SchemaDef::new(TIME_FRAME).required("relativeTime", FieldRule::number()),
        SchemaDef::new(LAYOUT)
            .required("id", FieldRule::string())
            .required("data", FieldRule::sequence_of(LAYOUT_DATA)),
        SchemaDef::new(LAYOUT_DATA)
            .required("key", FieldRule::string())
            .required("data", FieldRule::AnyObject),
        SchemaDef::new(WIDGETS_DATA)
            .optional("widget_key", FieldRule::string())
            .optional("title", FieldRule::string())
            .optional("creation_time", FieldRule::number())
            .optional("description", FieldRule::string())
            .optional("data", FieldRule::AnyObject)
            .optional("support_time_range", FieldRule::bool())
            .optional("additional_info", FieldRule::AnyObject),
    ]
}

static REPORT_REGISTRY: OnceLock<SchemaRegistry> = OnceLock::new();

/// Shared registry for report documents
pub fn report_registry() -> &'static SchemaRegistry {
    REPORT_REGISTRY.get_or_init(|| {
        SchemaRegistry::builder(REPORT)
            .register_all(report_schemas())
            .build_unchecked()
    })
}

/// Validate a document tree against the report contract
pub fn validate_report(document: &Value) -> ValidationOutcome {
    report_registry().validate(document)
}
