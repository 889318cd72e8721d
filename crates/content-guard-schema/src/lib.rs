//! Report schema contract
//!
//! Validates untyped document trees (parsed from JSON or YAML) against the
//! structure of an XSIAM report, and decodes conforming documents into typed
//! structs.
//!
//! ## Architecture
//!
//! 1. **Rules** (`rules`): field specifications and the per-field rule kinds
//!    (primitive, accept-any object, nested schema, sequence of schema).
//!
//! 2. **Registry** (`registry`): named schemas composed by reference and the
//!    recursive validator walking a document against them.
//!
//! 3. **Report** (`report`): the XSIAM report schemas and the typed model.
//!
//! ## Example
//!
//! ```rust
//! use content_guard_schema::{validate_report, ViolationKind};
//! use serde_json::json;
//!
//! let document = json!({
//!     "templates_data": [{
//!         "report_name": "Daily",
//!         "time_offset": 0,
//!         "layout": []
//!     }]
//! });
//!
//! let outcome = validate_report(&document);
//! assert!(!outcome.is_valid());
//! assert_eq!(outcome.violations()[0].kind, ViolationKind::MissingRequiredField);
//! assert_eq!(outcome.violations()[0].path, "$.templates_data[0].global_id");
//! ```

pub mod describe;
pub mod error;
pub mod kind;
pub mod path;
pub mod registry;
pub mod report;
pub mod rules;
pub mod violation;

pub use describe::SchemaDescription;
pub use error::{DecodeError, SchemaError};
pub use kind::{ExpectedKind, PrimitiveKind, ValueKind};
pub use path::FieldPath;
pub use registry::{SchemaRegistry, SchemaRegistryBuilder};
pub use report::model::{
    LayoutDataEntry, LayoutEntry, ReportDocument, TemplateEntry, TimeFrame, WidgetEntry,
};
pub use report::{report_registry, validate_report};
pub use rules::{FieldRule, FieldSpec, SchemaDef};
pub use violation::{ValidationOutcome, Violation, ViolationKind};
