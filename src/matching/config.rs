//! Scoring configuration.
//!
//! Band widths, category thresholds, and the competitive-factor domain are
//! lifted into named configuration so they can be tested and tuned without
//! touching the scoring logic itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Upper bound of the overall score scale.
pub const MAX_OVERALL_SCORE: i32 = 100;

/// Maximum width of each scoring component.
///
/// The academic components (gpa + language + tests) sum into a 0–60
/// academic band before the overall clamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoreBands {
    /// GPA component (0–25)
    pub gpa: i32,
    /// Language test component (0–20)
    pub language: i32,
    /// Standardized test component (0–15)
    pub tests: i32,
    /// Competitive component (0–30)
    pub competitive: i32,
    /// Financial component (0–20)
    pub financial: i32,
    /// Achievement component (0–10)
    pub special: i32,
}

impl Default for ScoreBands {
    fn default() -> Self {
        Self {
            gpa: 25,
            language: 20,
            tests: 15,
            competitive: 30,
            financial: 20,
            special: 10,
        }
    }
}

impl ScoreBands {
    /// Width of the combined academic band (gpa + language + tests).
    #[must_use]
    pub const fn academic(&self) -> i32 {
        self.gpa + self.language + self.tests
    }
}

/// Configuration for the matching engine.
///
/// The defaults reproduce the documented scoring contract; presets are not
/// needed because the contract has a single calibration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ScoringConfig {
    /// Component band widths.
    pub bands: ScoreBands,
    /// Overall scores below this are classified as `reach`.
    pub reach_threshold: i32,
    /// Overall scores at or above this are classified as `safety`.
    pub safety_threshold: i32,
    /// Neutral competitive score used when selectivity data is missing.
    pub competitive_default: i32,
    /// Lower bound of the expected competitive-factor domain.
    pub competitive_factor_min: f64,
    /// Upper bound of the expected competitive-factor domain.
    pub competitive_factor_max: f64,
    /// Overall score the improvement path aims for.
    pub improvement_target: i32,
    /// Maximum number of improvement steps reported.
    pub max_improvement_steps: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            bands: ScoreBands::default(),
            reach_threshold: 40,
            safety_threshold: 70,
            competitive_default: 15,
            competitive_factor_min: 0.8,
            competitive_factor_max: 1.4,
            improvement_target: 70,
            max_improvement_steps: 3,
        }
    }
}

impl ScoringConfig {
    /// Whether a competitive factor lies in the documented domain.
    ///
    /// The engine never rejects out-of-range values — the factor is used
    /// as a divisor as-is. This check is for callers that validate program
    /// data before invoking the engine.
    #[must_use]
    pub fn competitive_factor_in_range(&self, factor: f64) -> bool {
        (self.competitive_factor_min..=self.competitive_factor_max).contains(&factor)
    }
}
