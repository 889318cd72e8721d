//! CLI module for content-guard
//!
//! This module provides the command-line interface for validating report
//! documents, running the changelog gate and printing the report schema.

pub mod commands;
pub mod output;

pub use commands::{Commands, ContentGuardCli};
pub use output::{FileReport, GateOutput, OutputFormat, ReportOutput};

use crate::error::CliError;

/// Exit codes for CLI operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Successful execution, all checks passed
    Success = 0,
    /// Report validation or changelog gate failed
    ValidationError = 1,
    /// Invalid input or arguments
    InvalidInput = 3,
    /// File not found or inaccessible
    FileError = 4,
    /// Schema or gate configuration errors
    SchemaError = 5,
    /// Internal error
    InternalError = 10,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

impl ExitCode {
    /// Determine exit code from a check result
    pub fn from_validation_result(has_errors: bool) -> Self {
        if has_errors {
            ExitCode::ValidationError
        } else {
            ExitCode::Success
        }
    }

    /// Exit code reported for a failed command
    pub fn from_error(err: &CliError) -> Self {
        match err {
            CliError::InvalidInput(_) | CliError::ParseError(_) => ExitCode::InvalidInput,
            CliError::FileError(_) => ExitCode::FileError,
            CliError::ConfigError(_) | CliError::SchemaError(_) => ExitCode::SchemaError,
            CliError::SerializationError(_) | CliError::InternalError(_) => {
                ExitCode::InternalError
            }
        }
    }
}

/// Run the CLI with the given arguments and return the exit code
pub fn run(cli: ContentGuardCli) -> Result<ExitCode, CliError> {
    match cli.command {
        Commands::Report { files, format } => commands::execute_report(files, format),
        Commands::Changelog {
            files,
            files_from,
            config,
            format,
        } => commands::execute_changelog(files, files_from, config, format),
        Commands::Schema { name, format } => commands::execute_schema(name, format),
    }
}
