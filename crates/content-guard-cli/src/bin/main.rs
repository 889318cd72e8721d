//! content-guard CLI
//!
//! # Usage
//!
//! ```bash
//! # Validate report documents
//! content-guard report Reports/report-incidents.json Reports/report-alerts.yml
//!
//! # Run the changelog gate on a pull request's changed files
//! git diff --name-only origin/master... | content-guard changelog --files-from -
//!
//! # Print the report schema
//! content-guard schema --format yaml
//! ```
//!
//! # Exit Codes
//!
//! - 0: Success - all checks passed
//! - 1: Report invalid or changelog missing
//! - 3: Invalid input or arguments
//! - 4: File not found or inaccessible
//! - 5: Schema or gate configuration errors
//! - 10: Internal error

use clap::Parser;
use content_guard_cli::{run_cli, ContentGuardCli};
use tracing::Level;
use tracing_subscriber::EnvFilter;

fn main() {
    // Parse CLI arguments
    let cli = ContentGuardCli::parse();

    // Logs go to stderr so stdout stays machine-readable
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Run the CLI and exit with appropriate code
    let exit_code = run_cli(cli);
    std::process::exit(exit_code.into());
}
