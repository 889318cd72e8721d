//! # content-guard
//!
//! Pull-request checks for security content repositories:
//!
//! - **report**: validate XSIAM report documents against the report schema
//! - **changelog**: fail a change set that touches Python sources or
//!   `pyproject.toml` without updating `CHANGELOG.md`
//! - **schema**: print the report schema tree
//!
//! ## Exit Codes
//!
//! | Code | Meaning |
//! |------|---------|
//! | 0 | All checks passed |
//! | 1 | Report invalid or changelog gate failed |
//! | 3 | Invalid input or arguments |
//! | 4 | File not found or inaccessible |
//! | 5 | Schema or gate configuration error |
//! | 10 | Internal error |

pub mod ci;
pub mod cli;
pub mod error;
pub mod loader;

pub use ci::CiEnvironment;
pub use cli::{Commands, ContentGuardCli, ExitCode, OutputFormat};
pub use error::{CliError, Result};

/// Run the CLI and map failures to exit codes
///
/// # Example
///
/// ```rust,no_run
/// use clap::Parser;
/// use content_guard_cli::{run_cli, ContentGuardCli};
///
/// fn main() {
///     let cli = ContentGuardCli::parse();
///     let exit_code = run_cli(cli);
///     std::process::exit(exit_code.into());
/// }
/// ```
pub fn run_cli(cli: ContentGuardCli) -> ExitCode {
    match cli::run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            if !e.is_user_error() {
                tracing::error!(error = %e, "Command failed");
            }
            ExitCode::from_error(&e)
        }
    }
}
