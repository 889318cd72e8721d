//! Output formatting for the content-guard CLI
//!
//! Provides structured output in JSON, YAML, and human-readable table formats.

use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

use content_guard_changelog::GateDecision;
use content_guard_schema::{SchemaDescription, ValidationOutcome, Violation, ViolationKind};

use crate::error::CliError;

/// Output format options for CLI results
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Default)]
pub enum OutputFormat {
    /// Human-readable table format with colors
    #[default]
    Table,
    /// JSON format for machine processing
    Json,
    /// YAML format
    Yaml,
}

/// Print a serializable value as JSON or YAML
fn render_serialized<T: Serialize>(value: &T, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(value)
                .map_err(|e| CliError::SerializationError(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Yaml => {
            let yaml = serde_yaml::to_string(value)
                .map_err(|e| CliError::SerializationError(e.to_string()))?;
            println!("{}", yaml);
        }
        OutputFormat::Table => {
            return Err(CliError::InternalError(
                "table output has no serialized form".to_string(),
            ))
        }
    }
    Ok(())
}

/// Validation result for one report file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub file: String,
    pub valid: bool,
    pub violations: Vec<Violation>,
}

impl FileReport {
    pub fn new(path: &Path, outcome: ValidationOutcome) -> Self {
        Self {
            file: path.display().to_string(),
            valid: outcome.is_valid(),
            violations: outcome.violations().to_vec(),
        }
    }
}

/// Results of the `report` command
#[derive(Debug, Clone, Serialize)]
pub struct ReportOutput {
    pub valid: bool,
    pub file_count: usize,
    pub invalid_count: usize,
    pub violation_count: usize,
    pub files: Vec<FileReport>,
}

impl ReportOutput {
    pub fn from_files(files: Vec<FileReport>) -> Self {
        let invalid_count = files.iter().filter(|f| !f.valid).count();
        let violation_count = files.iter().map(|f| f.violations.len()).sum();
        Self {
            valid: invalid_count == 0,
            file_count: files.len(),
            invalid_count,
            violation_count,
            files,
        }
    }

    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<(), CliError> {
        match format {
            OutputFormat::Table => self.render_table(),
            _ => render_serialized(self, format),
        }
    }

    fn render_table(&self) -> Result<(), CliError> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Report Validation Results".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();

        for file in &self.files {
            writeln!(stdout).ok();
            let status = if file.valid {
                "+".green()
            } else {
                "x".red()
            };
            writeln!(stdout, "{} {}", status, file.file.bold()).ok();

            for violation in &file.violations {
                let label = match violation.kind {
                    ViolationKind::MissingRequiredField => "MISSING".red().bold(),
                    ViolationKind::NullRequiredField => "NULL".red().bold(),
                    ViolationKind::WrongType => "TYPE".yellow().bold(),
                    ViolationKind::InvalidRoot => "ROOT".magenta().bold(),
                };
                writeln!(
                    stdout,
                    "    [{}] {} {}",
                    label,
                    violation.path.to_string().dimmed(),
                    violation.message()
                )
                .ok();
            }
        }

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "-".repeat(60)).ok();
        let summary = if self.valid {
            format!("All {} file(s) valid", self.file_count).green()
        } else {
            format!(
                "{} of {} file(s) invalid, {} violation(s)",
                self.invalid_count, self.file_count, self.violation_count
            )
            .red()
        };
        writeln!(stdout, "{}", summary).ok();

        stdout.flush().ok();
        Ok(())
    }
}

/// Results of the `changelog` command
#[derive(Debug, Clone, Serialize)]
pub struct GateOutput<'a> {
    pub changelog_file: &'a str,
    #[serde(flatten)]
    pub decision: &'a GateDecision,
}

impl GateOutput<'_> {
    /// Render output in the specified format
    pub fn render(&self, format: OutputFormat) -> Result<(), CliError> {
        match format {
            OutputFormat::Table => self.render_table(),
            _ => render_serialized(self, format),
        }
    }

    fn render_table(&self) -> Result<(), CliError> {
        let mut stdout = io::stdout();

        writeln!(stdout).ok();
        writeln!(stdout, "{}", "Changelog Gate".cyan().bold()).ok();
        writeln!(stdout, "{}", "=".repeat(60)).ok();
        writeln!(stdout).ok();

        let status = if self.decision.passed() {
            "PASS".green().bold()
        } else {
            "FAIL".red().bold()
        };
        writeln!(stdout, "Status:         {}", status).ok();
        writeln!(stdout, "Changed files:  {}", self.decision.changed).ok();
        writeln!(stdout, "Required:       {}", yes_no(self.decision.required)).ok();
        writeln!(
            stdout,
            "Satisfied:      {} ({})",
            yes_no(self.decision.satisfied),
            self.changelog_file.dimmed()
        )
        .ok();

        if !self.decision.triggered_by.is_empty() {
            writeln!(stdout).ok();
            writeln!(stdout, "{}", "Requires changelog:".cyan().bold()).ok();
            for path in &self.decision.triggered_by {
                writeln!(stdout, "  {} {}", "-".blue(), path).ok();
            }
        }

        stdout.flush().ok();
        Ok(())
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Render a schema tree
pub fn render_schema(tree: &SchemaDescription, format: OutputFormat) -> Result<(), CliError> {
    match format {
        OutputFormat::Table => {
            println!("{}", format!("Schema: {}", tree.name).green().bold());
            println!("{}", "(* marks required fields)".dimmed());
            println!();
            let count = tree.children.len();
            for (i, child) in tree.children.iter().enumerate() {
                print_schema_tree(child, "", i + 1 == count);
            }
            Ok(())
        }
        _ => render_serialized(tree, format),
    }
}

/// Recursively print a schema tree
fn print_schema_tree(node: &SchemaDescription, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    let new_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let kind = match node.kind.as_str() {
        "string" => node.kind.yellow(),
        "number" => node.kind.cyan(),
        "bool" => node.kind.magenta(),
        "object" => node.kind.green(),
        _ => node.kind.blue(),
    };
    let required = if node.required {
        "*".red().to_string()
    } else {
        String::new()
    };

    println!("{}{}{}{}: {}", prefix, connector, node.name.bold(), required, kind);

    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        print_schema_tree(child, &new_prefix, i + 1 == count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use content_guard_changelog::ChangelogGate;
    use content_guard_schema::validate_report;
    use serde_json::json;
    use std::path::PathBuf;

    #[test]
    fn test_report_output_counts() {
        let valid = FileReport::new(&PathBuf::from("a.json"), validate_report(&json!({})));
        let invalid = FileReport::new(
            &PathBuf::from("b.json"),
            validate_report(&json!({"templates_data": [{}]})),
        );

        let output = ReportOutput::from_files(vec![valid, invalid]);
        assert!(!output.valid);
        assert_eq!(output.file_count, 2);
        assert_eq!(output.invalid_count, 1);
        assert_eq!(output.violation_count, 4);
    }

    #[test]
    fn test_report_output_serializes_violations() {
        let file = FileReport::new(
            &PathBuf::from("r.json"),
            validate_report(&json!({"templates_data": [{"global_id": "g", "report_name": "n", "layout": []}]})),
        );
        let json = serde_json::to_value(ReportOutput::from_files(vec![file])).unwrap();

        let violation = &json["files"][0]["violations"][0];
        assert_eq!(violation["kind"], "missing_required_field");
        assert_eq!(violation["path"], "$.templates_data[0].time_offset");
        assert_eq!(violation["expected"], "number");
    }

    #[test]
    fn test_gate_output_flattens_decision() {
        let gate = ChangelogGate::with_defaults().unwrap();
        let decision = gate.evaluate(["a.py"]);
        let output = GateOutput {
            changelog_file: gate.changelog_file(),
            decision: &decision,
        };

        let json = serde_json::to_value(&output).unwrap();
        assert_eq!(json["changelog_file"], "CHANGELOG.md");
        assert_eq!(json["changed"], 1);
        assert_eq!(json["outcome"], "fail");
        assert_eq!(json["triggered_by"][0], "a.py");
    }

    #[test]
    fn test_table_has_no_serialized_form() {
        assert!(matches!(
            render_serialized(&json!({}), OutputFormat::Table),
            Err(CliError::InternalError(_))
        ));
    }
}
