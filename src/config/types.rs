//! Configuration types for unimatch.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::matching::ScoringConfig;
use crate::reports::ReportFormat;

/// Unified application configuration, loadable from a YAML file and
/// overridable by CLI arguments (CLI wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring calibration for the matching engine.
    pub scoring: ScoringConfig,
    /// Output defaults for the CLI.
    pub output: OutputDefaults,
}

impl AppConfig {
    /// Create an `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Output defaults for the CLI.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputDefaults {
    /// Default report format.
    pub format: ReportFormat,
    /// Disable colored output.
    pub no_color: bool,
}
