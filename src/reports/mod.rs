//! Report generation for match results.
//!
//! The presentation contract: results are grouped by category into three
//! ordered lists, each sorted by overall score descending with a stable
//! sort, and `total` reports the sum of the three list lengths.

mod grouped;
mod json;
mod summary;

pub use grouped::{MatchReport, ProgramMatch};
pub use json::render_json;
pub use summary::render_summary;

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
pub enum ReportFormat {
    /// Auto-detect: summary on a terminal, JSON otherwise
    #[default]
    Auto,
    /// Structured JSON output
    Json,
    /// Human-readable summary
    Summary,
}

impl ReportFormat {
    /// Resolve `Auto` against whether stdout is a terminal.
    #[must_use]
    pub fn resolve(self, stdout_is_tty: bool) -> Self {
        match self {
            Self::Auto if stdout_is_tty => Self::Summary,
            Self::Auto => Self::Json,
            other => other,
        }
    }
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}
