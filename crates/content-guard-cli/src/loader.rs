//! Input loading for CLI commands
//!
//! All file and stdin reads happen here, before the schema or the gate
//! is invoked.

use std::io::Read;
use std::path::Path;

use content_guard_changelog::GateConfig;
use serde_json::Value;

use crate::error::{CliError, Result};

/// Document formats accepted by `report`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "json" => Ok(DocumentFormat::Json),
            "yaml" | "yml" => Ok(DocumentFormat::Yaml),
            _ => Err(CliError::invalid_input(format!(
                "Unsupported file format '{}' for {}. Supported formats: json, yaml, yml",
                extension,
                path.display()
            ))),
        }
    }
}

/// Read and parse a report document
pub fn read_document(path: &Path) -> Result<Value> {
    let format = DocumentFormat::from_path(path)?;
    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::file_error(format!("Failed to read file '{}': {}", path.display(), e))
    })?;
    tracing::debug!(file = %path.display(), bytes = content.len(), "Loaded document");
    parse_document(format, &content)
}

/// Parse document text into a generic tree
pub fn parse_document(format: DocumentFormat, content: &str) -> Result<Value> {
    match format {
        DocumentFormat::Json => serde_json::from_str(content)
            .map_err(|e| CliError::parse_error(format!("Invalid JSON: {}", e))),
        DocumentFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| CliError::parse_error(format!("Invalid YAML: {}", e))),
    }
}

/// Collect changed paths from `--files` and `--files-from`
///
/// `-` reads the list from stdin.
pub fn read_changed_paths(files: &[String], files_from: Option<&Path>) -> Result<Vec<String>> {
    let mut changed = files.to_vec();

    if let Some(source) = files_from {
        let content = if source == Path::new("-") {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            std::fs::read_to_string(source).map_err(|e| {
                CliError::file_error(format!(
                    "Failed to read changed-file list '{}': {}",
                    source.display(),
                    e
                ))
            })?
        };
        changed.extend(parse_path_list(&content));
    }

    tracing::debug!(count = changed.len(), "Collected changed paths");
    Ok(changed)
}

/// One path per line; blank lines are skipped
pub fn parse_path_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Load the gate configuration, falling back to defaults
pub fn load_gate_config(path: Option<&Path>) -> Result<GateConfig> {
    let Some(path) = path else {
        tracing::debug!("No gate configuration given, using defaults");
        return Ok(GateConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|e| {
        CliError::file_error(format!(
            "Failed to read configuration '{}': {}",
            path.display(),
            e
        ))
    })?;
    let config = GateConfig::from_toml_str(&content)?;
    tracing::info!(config = %path.display(), "Loaded gate configuration");
    Ok(config)
}
