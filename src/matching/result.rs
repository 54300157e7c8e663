//! Match result types.
//!
//! One [`MatchResult`] is built per engine call and fully owned by the
//! caller: value semantics only, no references back into the inputs.

use serde::{Deserialize, Serialize};

use super::config::ScoringConfig;

/// Outcome classification by ascending estimated admission likelihood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Admission unlikely (overall score below the reach threshold).
    Reach,
    /// Plausible admission.
    Target,
    /// Strong admission chance (overall score at or above the safety
    /// threshold).
    Safety,
}

impl Category {
    /// Classify an overall score. Pure function of the score and the
    /// configured thresholds; no other state is consulted.
    #[must_use]
    pub fn from_score(score: i32, config: &ScoringConfig) -> Self {
        if score >= config.safety_threshold {
            Self::Safety
        } else if score < config.reach_threshold {
            Self::Reach
        } else {
            Self::Target
        }
    }

    /// Wire/display name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reach => "reach",
            Self::Target => "target",
            Self::Safety => "safety",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display sub-scores shown to the end user alongside the overall score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakdown {
    /// GPA contribution (0–25)
    pub gpa: i32,
    /// Language test contribution (0–20)
    pub language: i32,
    /// Standardized test contribution (0–15)
    pub tests: i32,
    /// Achievement contribution (0–10)
    pub extras: i32,
}

/// Financial feasibility details.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialStatus {
    /// Budget alone covers the full tuition.
    pub covered_by_budget: bool,
    /// Annual cost in USD, as supplied by the program context.
    pub annual_cost_usd: f64,
    /// Student budget in USD.
    pub budget_usd: f64,
    /// Gap between tuition and budget; populated only when coverage < 1.0.
    pub shortfall_usd: f64,
    /// Best scholarship coverage that would make the program feasible.
    pub best_scholarship_coverage: Option<f64>,
    /// Whether feasibility depends on scholarship support.
    pub needs_scholarship: bool,
}

/// Prioritized path towards a safety-tier score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImprovementPath {
    /// Score the path aims for.
    pub target_score: i32,
    /// Current overall score.
    pub current_score: i32,
    /// Points missing to the target; 0 when already at or above it.
    pub gap_points: i32,
    /// GPA to aim for, when a realistic GPA step exists.
    pub recommended_gpa: Option<f64>,
    /// SAT score to aim for, when taking the SAT is recommended.
    pub recommended_sat: Option<i32>,
    /// Estimated impact of the GPA step, in percent.
    pub gpa_impact_percent: i32,
    /// Estimated impact of the SAT step, in percent.
    pub sat_impact_percent: i32,
    /// Estimated impact of the achievements step, in percent.
    #[serde(rename = "achieve_impact_percent")]
    pub achiev_impact_percent: i32,
    /// Up to three concrete steps, in fixed priority order.
    pub next_3_steps: Vec<String>,
}

/// The full outcome of matching one student against one program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Combined academic contribution (0–60).
    pub academic_score: i32,
    /// Competitive contribution (0–30).
    pub competitive_score: i32,
    /// Financial contribution (0–20).
    pub financial_score: i32,
    /// Achievement contribution (0–10).
    pub special_score: i32,
    /// Display sub-scores.
    pub breakdown: Breakdown,

    /// Overall score, clamped to 0–100.
    pub overall_score: i32,
    /// Classification derived from the overall score.
    pub category: Category,

    /// One entry per triggered rule, in stage order. Append-only: no stage
    /// removes or reorders entries written by an earlier stage.
    pub reasons: Vec<String>,
    /// Single actionable advice string chosen by score tier.
    pub advice: String,

    /// Financial feasibility details.
    pub financial_status: FinancialStatus,
    /// Improvement path; steps are populated only below the target score.
    pub improvement_path: ImprovementPath,
}
