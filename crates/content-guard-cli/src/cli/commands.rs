//! CLI command definitions for content-guard
//!
//! Provides Clap-based commands for validating XSIAM report documents,
//! running the changelog gate and printing the report schema.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use content_guard_changelog::ChangelogGate;
use content_guard_schema::{report_registry, validate_report};

use super::output::{render_schema, FileReport, GateOutput, OutputFormat, ReportOutput};
use super::ExitCode;
use crate::ci::CiEnvironment;
use crate::error::CliError;
use crate::loader;

/// Content pull-request checks
///
/// Validate XSIAM report documents and decide whether a change set needs
/// a changelog entry.
#[derive(Parser, Debug)]
#[command(name = "content-guard")]
#[command(about = "Content Guard - Report schema validation and changelog gate", long_about = None)]
#[command(version)]
pub struct ContentGuardCli {
    /// Output verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate XSIAM report documents
    ///
    /// Each file is parsed by extension (.json, .yaml, .yml) and checked
    /// against the report schema. All violations are listed.
    Report {
        /// Report files to validate
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Output format for validation results
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Check that a change set updates the changelog when required
    ///
    /// Fails when a changed file matches a needs-changelog pattern and the
    /// changelog file is not part of the change set.
    Changelog {
        /// Changed file paths
        #[arg(long, num_args = 1.., required_unless_present = "files_from")]
        files: Vec<String>,

        /// File holding one changed path per line, or `-` for stdin
        #[arg(long)]
        files_from: Option<PathBuf>,

        /// Gate configuration (TOML with a [changelog] table)
        #[arg(short, long, env = "CONTENT_GUARD_CONFIG")]
        config: Option<PathBuf>,

        /// Output format for the gate decision
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },

    /// Print the report schema tree
    Schema {
        /// Describe one named schema instead of the whole report
        #[arg(short, long)]
        name: Option<String>,

        /// Output format for the schema tree
        #[arg(long, value_enum, default_value = "table")]
        format: Option<OutputFormat>,
    },
}

/// Execute the report command
pub fn execute_report(
    files: Vec<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<ExitCode, CliError> {
    if files.is_empty() {
        return Err(CliError::invalid_input("At least one report file is required"));
    }

    // Load every document before validating any
    let mut documents = Vec::new();
    for path in &files {
        let value = loader::read_document(path)?;
        documents.push((path, value));
    }

    let reports: Vec<FileReport> = documents
        .iter()
        .map(|(path, value)| {
            let outcome = validate_report(value);
            tracing::info!(
                file = %path.display(),
                violations = outcome.violations().len(),
                "Validated report"
            );
            FileReport::new(path, outcome)
        })
        .collect();

    let output = ReportOutput::from_files(reports);
    output.render(format.unwrap_or_default())?;

    Ok(ExitCode::from_validation_result(!output.valid))
}

/// Execute the changelog command
pub fn execute_changelog(
    files: Vec<String>,
    files_from: Option<PathBuf>,
    config: Option<PathBuf>,
    format: Option<OutputFormat>,
) -> Result<ExitCode, CliError> {
    let gate_config = loader::load_gate_config(config.as_deref())?;
    let gate = ChangelogGate::new(&gate_config)?;

    let changed = loader::read_changed_paths(&files, files_from.as_deref())?;
    let decision = gate.evaluate(&changed);

    let format = format.unwrap_or_default();
    let output = GateOutput {
        changelog_file: gate.changelog_file(),
        decision: &decision,
    };
    output.render(format)?;

    if let Some(message) = &decision.message {
        CiEnvironment::detect().signal_failure(message, format != OutputFormat::Table);
    }

    Ok(ExitCode::from_validation_result(!decision.passed()))
}

/// Execute the schema command
pub fn execute_schema(
    name: Option<String>,
    format: Option<OutputFormat>,
) -> Result<ExitCode, CliError> {
    let registry = report_registry();
    let tree = match name {
        Some(name) => registry.describe_schema(&name)?,
        None => registry.describe(),
    };

    render_schema(&tree, format.unwrap_or_default())?;
    Ok(ExitCode::Success)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_report_command() {
        let cli = ContentGuardCli::parse_from(["content-guard", "report", "a.json", "b.yml"]);
        match cli.command {
            Commands::Report { files, format } => {
                assert_eq!(files.len(), 2);
                assert_eq!(format, Some(OutputFormat::Table));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_changelog_command() {
        let cli = ContentGuardCli::parse_from([
            "content-guard",
            "-vv",
            "changelog",
            "--files",
            "a.py",
            "CHANGELOG.md",
            "--format",
            "json",
        ]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Changelog { files, format, .. } => {
                assert_eq!(files, vec!["a.py", "CHANGELOG.md"]);
                assert_eq!(format, Some(OutputFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_changelog_requires_a_path_source() {
        let result = ContentGuardCli::try_parse_from(["content-guard", "changelog"]);
        assert!(result.is_err());

        let result =
            ContentGuardCli::try_parse_from(["content-guard", "changelog", "--files-from", "-"]);
        assert!(result.is_ok());
    }

    #[test]
    fn test_report_requires_files() {
        assert!(ContentGuardCli::try_parse_from(["content-guard", "report"]).is_err());
    }

    #[test]
    fn test_unknown_schema_name() {
        let result = execute_schema(Some("dashboard".to_string()), Some(OutputFormat::Json));
        assert!(matches!(result, Err(CliError::SchemaError(_))));
    }
}
