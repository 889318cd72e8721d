//! CI failure signalling
//!
//! Under GitHub Actions a failure is surfaced as an `::error::` workflow
//! command; elsewhere the plain message goes to stderr. The runner reads
//! workflow commands from both streams, so when stdout carries JSON or YAML
//! the command is written to stderr instead.

/// Where the CLI is running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CiEnvironment {
    GitHubActions,
    Local,
}

/// Output stream for a failure signal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignalStream {
    Stdout,
    Stderr,
}

impl CiEnvironment {
    /// Detect from the `GITHUB_ACTIONS` environment variable
    pub fn detect() -> Self {
        Self::from_github_actions_var(std::env::var("GITHUB_ACTIONS").ok().as_deref())
    }

    pub fn from_github_actions_var(value: Option<&str>) -> Self {
        match value {
            Some("true") => CiEnvironment::GitHubActions,
            _ => CiEnvironment::Local,
        }
    }

    /// Line to emit for a failure message
    pub fn failure_line(&self, message: &str) -> String {
        match self {
            CiEnvironment::GitHubActions => format!("::error::{}", escape_annotation(message)),
            CiEnvironment::Local => message.to_string(),
        }
    }

    /// Stream for the failure line; stdout only when it holds a table
    pub fn failure_stream(&self, structured_stdout: bool) -> SignalStream {
        match self {
            CiEnvironment::GitHubActions if !structured_stdout => SignalStream::Stdout,
            _ => SignalStream::Stderr,
        }
    }

    /// Emit a failure message on the stream the environment expects
    pub fn signal_failure(&self, message: &str, structured_stdout: bool) {
        let line = self.failure_line(message);
        match self.failure_stream(structured_stdout) {
            SignalStream::Stdout => println!("{}", line),
            SignalStream::Stderr => eprintln!("{}", line),
        }
    }
}

/// Escape workflow-command data
pub fn escape_annotation(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}
