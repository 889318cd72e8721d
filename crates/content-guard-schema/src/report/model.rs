//! Typed view of a validated report document

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::DecodeError;
use crate::violation::ValidationOutcome;

/// Top-level XSIAM report document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportDocument {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub templates_data: Option<Vec<TemplateEntry>>,

    #[serde(rename = "fromVersion", default, skip_serializing_if = "Option::is_none")]
    pub from_version: Option<String>,

    #[serde(rename = "toVersion", default, skip_serializing_if = "Option::is_none")]
    pub to_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widgets_data: Option<Vec<WidgetEntry>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateEntry {
    pub global_id: String,
    pub report_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_template_id: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_frame: Option<TimeFrame>,
    pub time_offset: f64,
    pub layout: Vec<LayoutEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeFrame {
    #[serde(rename = "relativeTime")]
    pub relative_time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutEntry {
    pub id: String,
    pub data: Vec<LayoutDataEntry>,
}

/// A keyed layout cell; `data` is opaque
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutDataEntry {
    pub key: String,
    pub data: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WidgetEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creation_time: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub support_time_range: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<Map<String, Value>>,
}

impl ReportDocument {
    /// Validate `value` and decode it
    ///
    /// Invalid documents return their violations rather than a serde error.
    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        match super::validate_report(value) {
            ValidationOutcome::Valid => serde_json::from_value(value.clone())
                .map_err(|e| DecodeError::Malformed(e.to_string())),
            ValidationOutcome::Invalid(violations) => Err(DecodeError::Invalid(violations)),
        }
    }

    pub fn templates(&self) -> &[TemplateEntry] {
        self.templates_data.as_deref().unwrap_or_default()
    }

    pub fn widgets(&self) -> &[WidgetEntry] {
        self.widgets_data.as_deref().unwrap_or_default()
    }
}
