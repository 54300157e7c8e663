//! Financial scoring: budget coverage and scholarship-assisted feasibility.

use crate::model::{ProgramContext, StudentProfile};

use super::config::ScoringConfig;
use super::result::FinancialStatus;

/// Coverage ratio that still counts as "most of the tuition".
const MOSTLY_COVERED_RATIO: f64 = 0.7;
/// Fraction of tuition that budget plus scholarship must reach.
const SCHOLARSHIP_GAP_RATIO: f64 = 0.8;

const MOSTLY_COVERED_SCORE: i32 = 14;
const SCHOLARSHIP_FEASIBLE_SCORE: i32 = 16;
const UNDERFUNDED_SCORE: i32 = 6;
/// Contribution when no figures are known but scholarships exist.
const SCHOLARSHIP_ONLY_SCORE: i32 = 12;

pub(crate) fn score(
    student: &StudentProfile,
    program: &ProgramContext,
    config: &ScoringConfig,
    reasons: &mut Vec<String>,
) -> (i32, FinancialStatus) {
    let mut status = FinancialStatus::default();

    let (Some(annual_cost), Some(budget)) = (program.tuition_amount, student.budget_year) else {
        if program.has_scholarship {
            status.needs_scholarship = true;
            reasons.push("The program offers scholarships".into());
            return (SCHOLARSHIP_ONLY_SCORE, status);
        }
        return (0, status);
    };

    let coverage = budget / annual_cost;
    status.annual_cost_usd = annual_cost;
    status.budget_usd = budget;

    let score = if coverage >= 1.0 {
        status.covered_by_budget = true;
        reasons.push("Budget fully covers tuition".into());
        config.bands.financial
    } else if coverage >= MOSTLY_COVERED_RATIO {
        reasons.push("Budget covers most of the tuition; a loan could close the gap".into());
        MOSTLY_COVERED_SCORE
    } else if let Some(best_coverage) = program
        .has_scholarship
        .then(|| program.best_scholarship_coverage())
        .flatten()
    {
        status.needs_scholarship = true;
        let scholarship_amount = annual_cost * (best_coverage / 100.0);
        if budget + scholarship_amount >= annual_cost * SCHOLARSHIP_GAP_RATIO {
            status.best_scholarship_coverage = Some(best_coverage);
            reasons.push("A scholarship plus your budget could cover tuition".into());
            SCHOLARSHIP_FEASIBLE_SCORE
        } else {
            reasons.push("Additional funding is needed even with a scholarship".into());
            UNDERFUNDED_SCORE
        }
    } else {
        reasons.push("Budget is not sufficient for this program".into());
        UNDERFUNDED_SCORE
    };

    if coverage < 1.0 {
        status.shortfall_usd = (annual_cost - budget).max(0.0);
    }

    (score, status)
}
