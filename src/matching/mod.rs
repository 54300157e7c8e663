//! Student/program matching engine.
//!
//! The engine is a pure, synchronous function over immutable inputs: it
//! performs no I/O, holds no state between calls, and is safe to invoke
//! concurrently from any number of threads. Six ordered stages feed one
//! result accumulator — eligibility, academic, competitive, financial,
//! achievements, and aggregation/recommendation — and data flows strictly
//! top-to-bottom.
//!
//! Missing or malformed optional input never fails a call; every such case
//! degrades to a documented default contribution plus a reason entry.
//!
//! ```
//! use unimatch::matching::MatchEngine;
//! use unimatch::model::{ProgramContext, StudentProfile};
//!
//! let engine = MatchEngine::default();
//! let student = StudentProfile {
//!     gpa: Some(3.6),
//!     gpa_scale: Some(4.0),
//!     ielts: Some(7.0),
//!     budget_year: Some(30_000.0),
//!     ..Default::default()
//! };
//! let program = ProgramContext {
//!     title: "Computer Science".into(),
//!     avg_gpa: Some(3.5),
//!     avg_ielts: Some(6.5),
//!     tuition_amount: Some(25_000.0),
//!     competitive_factor: 1.0,
//!     ..Default::default()
//! };
//!
//! let result = engine.evaluate(&student, &program);
//! assert!((0..=100).contains(&result.overall_score));
//! ```

mod academic;
mod achievements;
mod competitive;
pub mod config;
mod eligibility;
mod financial;
mod recommend;
mod result;

pub use config::{MAX_OVERALL_SCORE, ScoreBands, ScoringConfig};
pub use result::{Breakdown, Category, FinancialStatus, ImprovementPath, MatchResult};

use rayon::prelude::*;

use crate::model::{ProgramContext, StudentProfile};

/// The matching engine. Construction captures the scoring configuration;
/// everything else is per-call state.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: ScoringConfig,
}

impl MatchEngine {
    /// Create an engine with a custom scoring configuration.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// The active scoring configuration.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Match one student against one program.
    ///
    /// Never fails and never panics: absent data is handled by internal
    /// defaulting. The returned result owns all of its data.
    #[must_use]
    pub fn evaluate(&self, student: &StudentProfile, program: &ProgramContext) -> MatchResult {
        let config = &self.config;
        let mut reasons = Vec::new();

        eligibility::check(student, program, &mut reasons);
        let academic = academic::score(student, program, config, &mut reasons);
        let competitive_score = competitive::score(student, program, config, &mut reasons);
        let (financial_score, financial_status) =
            financial::score(student, program, config, &mut reasons);
        let (special_score, achievement_weight) =
            achievements::score(student, config, &mut reasons);

        let academic_score = academic.total();
        let overall_score = (academic_score + competitive_score + financial_score + special_score)
            .clamp(0, MAX_OVERALL_SCORE);
        let category = Category::from_score(overall_score, config);

        let improvement_path =
            recommend::improvement_path(student, program, config, overall_score, achievement_weight);
        let advice = recommend::advice(overall_score, &improvement_path, config);

        tracing::debug!(
            program = %program.id,
            academic = academic_score,
            competitive = competitive_score,
            financial = financial_score,
            special = special_score,
            overall = overall_score,
            category = category.as_str(),
            "match computed"
        );

        MatchResult {
            academic_score,
            competitive_score,
            financial_score,
            special_score,
            breakdown: Breakdown {
                gpa: academic.gpa,
                language: academic.language,
                tests: academic.tests,
                extras: special_score,
            },
            overall_score,
            category,
            reasons,
            advice,
            financial_status,
            improvement_path,
        }
    }

    /// Match one student against many programs, in parallel.
    ///
    /// Results come back in input order. Evaluation is embarrassingly
    /// parallel because each call is pure and independent.
    #[must_use]
    pub fn evaluate_all(
        &self,
        student: &StudentProfile,
        programs: &[ProgramContext],
    ) -> Vec<MatchResult> {
        programs
            .par_iter()
            .map(|program| self.evaluate(student, program))
            .collect()
    }
}

/// Match a student against a program using the default configuration.
#[must_use]
pub fn match_program(student: &StudentProfile, program: &ProgramContext) -> MatchResult {
    MatchEngine::default().evaluate(student, program)
}
