//! Changelog gate
//!
//! Decides, from the paths changed by a pull request, whether a changelog
//! update is required and whether it was supplied.
//!
//! | required | satisfied | outcome |
//! |----------|-----------|---------|
//! | false    | false     | pass    |
//! | false    | true      | pass    |
//! | true     | true      | pass    |
//! | true     | false     | fail    |
//!
//! ## Example
//!
//! ```rust
//! use content_guard_changelog::{ChangelogGate, GateOutcome, FAILURE_MESSAGE};
//!
//! let gate = ChangelogGate::with_defaults().unwrap();
//!
//! let decision = gate.evaluate(["pyproject.toml"]);
//! assert_eq!(decision.outcome, GateOutcome::Fail);
//! assert_eq!(decision.message.as_deref(), Some(FAILURE_MESSAGE));
//!
//! let decision = gate.evaluate(["src/a.py", "CHANGELOG.md"]);
//! assert!(decision.passed());
//! ```

pub mod config;
pub mod error;
pub mod gate;
pub mod paths;

pub use config::{GateConfig, DEFAULT_CHANGELOG_FILE, DEFAULT_NEEDS_CHANGELOG};
pub use error::GateError;
pub use gate::{decide, failure_message, ChangelogGate, GateDecision, GateOutcome, FAILURE_MESSAGE};
pub use paths::normalize_path;
