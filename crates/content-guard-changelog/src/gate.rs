//! Changelog gate decision procedure

use std::collections::BTreeSet;

use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};

use crate::config::GateConfig;
use crate::error::GateError;
use crate::paths::normalize_path;

/// Failure message for the default configuration
pub const FAILURE_MESSAGE: &str = "The PR includes a change of a file that requires a CHANGELOG.md update, but the changelog was not modified.";

/// Failure message naming the configured changelog file
pub fn failure_message(changelog_file: &str) -> String {
    format!(
        "The PR includes a change of a file that requires a {} update, but the changelog was not modified.",
        changelog_file
    )
}

/// Gate verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateOutcome {
    Pass,
    Fail,
}

impl std::fmt::Display for GateOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GateOutcome::Pass => write!(f, "pass"),
            GateOutcome::Fail => write!(f, "fail"),
        }
    }
}

/// Fail iff a changelog is required and was not supplied
pub fn decide(required: bool, satisfied: bool) -> GateOutcome {
    if required && !satisfied {
        GateOutcome::Fail
    } else {
        GateOutcome::Pass
    }
}

/// Result of evaluating one changed-path set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GateDecision {
    pub required: bool,
    pub satisfied: bool,
    pub outcome: GateOutcome,
    /// Non-blank entries in the change set
    pub changed: usize,
    /// Normalised paths that made a changelog necessary, sorted
    pub triggered_by: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl GateDecision {
    pub fn passed(&self) -> bool {
        self.outcome == GateOutcome::Pass
    }
}

/// Compiled gate configuration
#[derive(Debug, Clone)]
pub struct ChangelogGate {
    needs_changelog: GlobSet,
    changelog_file: String,
}

impl ChangelogGate {
    /// Compile the patterns of a configuration
    pub fn new(config: &GateConfig) -> Result<Self, GateError> {
        let changelog_file =
            normalize_path(&config.changelog_file).ok_or(GateError::EmptyChangelogFile)?;

        let mut builder = GlobSetBuilder::new();
        for pattern in &config.needs_changelog {
            let glob = GlobBuilder::new(pattern)
                .literal_separator(true)
                .build()
                .map_err(|err| GateError::InvalidPattern {
                    pattern: pattern.clone(),
                    reason: err.kind().to_string(),
                })?;
            builder.add(glob);
        }
        let needs_changelog = builder.build().map_err(|err| GateError::InvalidPattern {
            pattern: err.glob().unwrap_or_default().to_string(),
            reason: err.kind().to_string(),
        })?;

        tracing::debug!(
            patterns = config.needs_changelog.len(),
            changelog_file = %changelog_file,
            "Compiled changelog gate"
        );

        Ok(Self {
            needs_changelog,
            changelog_file,
        })
    }

    /// Gate with `**/*.py`, `pyproject.toml` and `CHANGELOG.md`
    pub fn with_defaults() -> Result<Self, GateError> {
        Self::new(&GateConfig::default())
    }

    pub fn changelog_file(&self) -> &str {
        &self.changelog_file
    }

    /// Whether a changed path makes a changelog necessary
    pub fn requires_changelog(&self, path: &str) -> bool {
        normalize_path(path).is_some_and(|p| self.needs_changelog.is_match(p.as_str()))
    }

    pub fn is_changelog(&self, path: &str) -> bool {
        normalize_path(path).is_some_and(|p| p == self.changelog_file)
    }

    /// Decide the gate for a set of changed paths
    pub fn evaluate<I, S>(&self, changed: I) -> GateDecision
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut triggered = BTreeSet::new();
        let mut satisfied = false;
        let mut changed_count = 0usize;

        for raw in changed {
            let Some(path) = normalize_path(raw.as_ref()) else {
                continue;
            };
            changed_count += 1;
            if path == self.changelog_file {
                satisfied = true;
            }
            if self.needs_changelog.is_match(path.as_str()) {
                triggered.insert(path);
            }
        }

        let required = !triggered.is_empty();
        let outcome = decide(required, satisfied);
        let message = match outcome {
            GateOutcome::Fail => Some(failure_message(&self.changelog_file)),
            GateOutcome::Pass => None,
        };

        tracing::info!(
            changed = changed_count,
            required,
            satisfied,
            outcome = %outcome,
            "Evaluated changelog gate"
        );

        GateDecision {
            required,
            satisfied,
            outcome,
            changed: changed_count,
            triggered_by: triggered.into_iter().collect(),
            message,
        }
    }
}
