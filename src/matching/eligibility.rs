//! Eligibility pre-check.
//!
//! Hard disqualifiers are advisory in this engine: a restriction is logged
//! as a reason and matching continues at full strength.

use crate::model::{ProgramContext, StudentProfile};

/// Flag citizenship-restricted scholarships the student does not qualify
/// for. Never short-circuits and never changes any score.
pub(crate) fn check(
    student: &StudentProfile,
    program: &ProgramContext,
    reasons: &mut Vec<String>,
) {
    if program.scholarship_restricted_for(&student.citizenship) {
        reasons.push("Scholarships for this program are limited to specific citizenships".into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn restricted_program() -> ProgramContext {
        ProgramContext {
            has_scholarship: true,
            eligible_citizenships: vec!["KZ".into(), "UZ".into()],
            ..Default::default()
        }
    }

    #[test]
    fn restriction_logs_a_reason_for_outsiders() {
        let student = StudentProfile {
            citizenship: "US".into(),
            ..Default::default()
        };
        let mut reasons = Vec::new();
        check(&student, &restricted_program(), &mut reasons);
        assert_eq!(reasons.len(), 1);
    }

    #[test]
    fn eligible_citizenship_stays_silent() {
        let student = StudentProfile {
            citizenship: "KZ".into(),
            ..Default::default()
        };
        let mut reasons = Vec::new();
        check(&student, &restricted_program(), &mut reasons);
        assert!(reasons.is_empty());
    }

    #[test]
    fn unrestricted_program_stays_silent() {
        let student = StudentProfile {
            citizenship: "US".into(),
            ..Default::default()
        };
        let mut reasons = Vec::new();
        check(&student, &ProgramContext::default(), &mut reasons);
        assert!(reasons.is_empty());
    }
}
