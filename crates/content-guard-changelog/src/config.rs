//! Gate configuration
//!
//! Read from the `[changelog]` table of a TOML file:
//!
//! ```toml
//! [changelog]
//! needs_changelog = ["**/*.py", "pyproject.toml"]
//! changelog_file = "CHANGELOG.md"
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GateError;

pub const DEFAULT_CHANGELOG_FILE: &str = "CHANGELOG.md";
pub const DEFAULT_NEEDS_CHANGELOG: [&str; 2] = ["**/*.py", "pyproject.toml"];

/// Rules the gate applies to a changed-path set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GateConfig {
    /// Globs; a change to any matching path requires a changelog update
    pub needs_changelog: Vec<String>,
    /// Path whose presence in the change set satisfies the requirement
    pub changelog_file: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            needs_changelog: DEFAULT_NEEDS_CHANGELOG.iter().map(|s| s.to_string()).collect(),
            changelog_file: DEFAULT_CHANGELOG_FILE.to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigDocument {
    changelog: GateConfig,
}

impl GateConfig {
    /// Parse the `[changelog]` table; other tables are ignored
    pub fn from_toml_str(content: &str) -> Result<Self, GateError> {
        let document: ConfigDocument = toml::from_str(content)?;
        Ok(document.changelog)
    }

    /// Replace the needs-changelog patterns
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.needs_changelog = patterns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_changelog_file(mut self, file: impl Into<String>) -> Self {
        self.changelog_file = file.into();
        self
    }
}
