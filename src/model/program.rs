//! Program context data structures.

use serde::{Deserialize, Serialize};

/// Everything the engine needs to know about one study program, pre-joined
/// with the latest admission statistics by the catalog layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramContext {
    /// Program identifier.
    pub id: String,
    /// Owning university identifier.
    pub university_id: String,
    /// Display name of the university.
    pub university_name: String,
    /// ISO country code of the university.
    pub country_code: String,
    /// Program title.
    pub title: String,
    /// Degree level (e.g., "bachelor", "master").
    pub degree_level: String,
    /// Field of study.
    pub field: String,

    /// Annual tuition, USD equivalent.
    pub tuition_amount: Option<f64>,
    /// Currency the tuition was originally stated in.
    pub tuition_currency: Option<String>,
    /// Whether the program offers any scholarship.
    pub has_scholarship: bool,
    /// Scholarship coverage percentages, ascending; the last entry is the
    /// best available coverage.
    pub scholarship_coverages: Vec<f64>,

    /// Program-level difficulty multiplier beyond raw acceptance rate.
    ///
    /// Expected domain is 0.8–1.4 and the value is used as a divisor
    /// as-is; callers are responsible for validating the range before
    /// invoking the engine.
    pub competitive_factor: f64,
    /// Acceptance rate in percent (0–100).
    pub acceptance_rate: Option<f64>,
    /// Average GPA of admitted students, on the same reporting scale as
    /// the student's GPA.
    pub avg_gpa: Option<f64>,
    /// Average IELTS of admitted students.
    pub avg_ielts: Option<f64>,
    /// Average TOEFL of admitted students.
    pub avg_toefl: Option<i32>,
    /// Average SAT of admitted students.
    pub avg_sat: Option<i32>,

    /// Citizenships eligible for the program's scholarships; empty means
    /// unrestricted.
    pub eligible_citizenships: Vec<String>,
    /// Whether admission requires a portfolio.
    pub requires_portfolio: bool,
    /// Minimum work experience in years. Reserved: accepted and carried
    /// through serialization, not consumed by scoring.
    pub min_work_experience_yrs: Option<i32>,
}

impl ProgramContext {
    /// Best (highest) scholarship coverage percentage on offer, if any.
    ///
    /// Coverages are ascending by convention, so this is the last entry.
    #[must_use]
    pub fn best_scholarship_coverage(&self) -> Option<f64> {
        self.scholarship_coverages.last().copied()
    }

    /// Whether the program's scholarships are restricted to citizenships
    /// that do not include the given one.
    #[must_use]
    pub fn scholarship_restricted_for(&self, citizenship: &str) -> bool {
        self.has_scholarship
            && !self.eligible_citizenships.is_empty()
            && !self
                .eligible_citizenships
                .iter()
                .any(|code| code == citizenship)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_coverage_is_last_entry() {
        let program = ProgramContext {
            scholarship_coverages: vec![25.0, 50.0, 100.0],
            ..Default::default()
        };
        assert_eq!(program.best_scholarship_coverage(), Some(100.0));
        assert_eq!(
            ProgramContext::default().best_scholarship_coverage(),
            None
        );
    }

    #[test]
    fn scholarship_restriction_requires_all_three_conditions() {
        let mut program = ProgramContext {
            has_scholarship: true,
            eligible_citizenships: vec!["KZ".into(), "UZ".into()],
            ..Default::default()
        };
        assert!(program.scholarship_restricted_for("US"));
        assert!(!program.scholarship_restricted_for("KZ"));

        program.eligible_citizenships.clear();
        assert!(!program.scholarship_restricted_for("US"));

        program.has_scholarship = false;
        program.eligible_citizenships = vec!["KZ".into()];
        assert!(!program.scholarship_restricted_for("US"));
    }

    #[test]
    fn reserved_work_experience_round_trips() {
        let program = ProgramContext {
            min_work_experience_yrs: Some(2),
            ..Default::default()
        };
        let json = serde_json::to_string(&program).expect("serialize");
        let back: ProgramContext = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.min_work_experience_yrs, Some(2));
    }
}
