//! Competitive scoring: selectivity adjusted for the student's standing.
//!
//! The base term rewards low acceptance rates; the student's standing
//! versus the admitted-average GPA scales it, and the program-level
//! competitive factor divides it. Missing data yields a fixed neutral
//! default rather than an error.

use crate::model::{ProgramContext, StudentProfile};

use super::config::ScoringConfig;

/// Relative GPA lead that counts as clearly above the admitted pool.
const STANDING_LEAD: f64 = 0.1;
/// Relative GPA deficit still counted as slightly below the pool.
const STANDING_SLIGHT_DEFICIT: f64 = -0.1;

const LEAD_MULTIPLIER: f64 = 1.2;
const AT_AVG_MULTIPLIER: f64 = 1.0;
const SLIGHT_DEFICIT_MULTIPLIER: f64 = 0.7;
const FAR_DEFICIT_MULTIPLIER: f64 = 0.3;

/// Acceptance rate above which competition is reported as low.
const LOW_COMPETITION_RATE: f64 = 30.0;
/// Acceptance rate above which competition is reported as moderate.
const MODERATE_COMPETITION_RATE: f64 = 10.0;

pub(crate) fn score(
    student: &StudentProfile,
    program: &ProgramContext,
    config: &ScoringConfig,
    reasons: &mut Vec<String>,
) -> i32 {
    let data = (
        program.acceptance_rate,
        program.avg_gpa,
        student.normalized_gpa(),
        student.gpa,
    );
    let (Some(rate), Some(avg), Some(_), Some(gpa)) = data else {
        // Neutral prior: selectivity data or the student's GPA is missing.
        return config.competitive_default;
    };
    if avg <= 0.0 {
        return config.competitive_default;
    }

    // Relative standing versus the admitted pool; scale-invariant as long
    // as the average shares the student's reporting scale.
    let student_vs_avg = (gpa - avg) / avg;

    let multiplier = if student_vs_avg >= STANDING_LEAD {
        LEAD_MULTIPLIER
    } else if student_vs_avg >= 0.0 {
        AT_AVG_MULTIPLIER
    } else if student_vs_avg >= STANDING_SLIGHT_DEFICIT {
        SLIGHT_DEFICIT_MULTIPLIER
    } else {
        FAR_DEFICIT_MULTIPLIER
    };

    let base = f64::from(config.bands.competitive) * (1.0 - rate / 100.0);
    let raw = base * multiplier / program.competitive_factor;

    // The reason tier follows the raw acceptance rate alone and may
    // disagree with the clamped score near tier boundaries.
    if rate > LOW_COMPETITION_RATE {
        reasons.push("Low admission competition".into());
    } else if rate > MODERATE_COMPETITION_RATE {
        reasons.push("Moderate admission competition".into());
    } else {
        reasons.push("Highly competitive admissions".into());
    }

    (raw as i32).clamp(0, config.bands.competitive)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn student(gpa: f64, scale: f64) -> StudentProfile {
        StudentProfile {
            gpa: Some(gpa),
            gpa_scale: Some(scale),
            ..Default::default()
        }
    }

    fn program(rate: f64, avg_gpa: f64, factor: f64) -> ProgramContext {
        ProgramContext {
            acceptance_rate: Some(rate),
            avg_gpa: Some(avg_gpa),
            competitive_factor: factor,
            ..Default::default()
        }
    }

    #[test]
    fn missing_data_returns_neutral_default() {
        let config = ScoringConfig::default();
        let mut reasons = Vec::new();

        let score_no_rate = score(
            &student(3.5, 4.0),
            &ProgramContext {
                avg_gpa: Some(3.5),
                competitive_factor: 1.0,
                ..Default::default()
            },
            &config,
            &mut reasons,
        );
        assert_eq!(score_no_rate, 15);

        let score_no_gpa = score(
            &StudentProfile::default(),
            &program(10.0, 3.5, 1.0),
            &config,
            &mut reasons,
        );
        assert_eq!(score_no_gpa, 15);
        assert!(reasons.is_empty(), "neutral default logs no reason");
    }

    #[test]
    fn zero_gpa_scale_falls_back_to_default() {
        let config = ScoringConfig::default();
        let mut reasons = Vec::new();
        let s = StudentProfile {
            gpa: Some(3.5),
            gpa_scale: Some(0.0),
            ..Default::default()
        };
        assert_eq!(score(&s, &program(10.0, 3.5, 1.0), &config, &mut reasons), 15);
    }

    #[test]
    fn standing_tiers_scale_the_base_term() {
        let config = ScoringConfig::default();
        // base = 30 * (1 - 0.10) = 27, factor 1.0
        let p = program(10.0, 3.5, 1.0);

        let mut reasons = Vec::new();
        // 4.0 vs 3.5: +14% -> 27 * 1.2 = 32.4 -> clamped to 30
        assert_eq!(score(&student(4.0, 4.0), &p, &config, &mut reasons), 30);
        // at average -> 27
        assert_eq!(score(&student(3.5, 4.0), &p, &config, &mut reasons), 27);
        // 3.3 vs 3.5: -5.7% -> 27 * 0.7 = 18.9 -> 18
        assert_eq!(score(&student(3.3, 4.0), &p, &config, &mut reasons), 18);
        // 2.5 vs 3.5: far below -> 27 * 0.3 = 8.1 -> 8
        assert_eq!(score(&student(2.5, 4.0), &p, &config, &mut reasons), 8);
    }

    #[test]
    fn competitive_factor_divides_the_score() {
        let config = ScoringConfig::default();
        let mut reasons = Vec::new();
        // at average, rate 10: base 27; factor 1.4 -> 19.28 -> 19
        assert_eq!(
            score(&student(3.5, 4.0), &program(10.0, 3.5, 1.4), &config, &mut reasons),
            19
        );
        // factor 0.8 boosts: 27 / 0.8 = 33.75 -> clamped to 30
        assert_eq!(
            score(&student(3.5, 4.0), &program(10.0, 3.5, 0.8), &config, &mut reasons),
            30
        );
    }

    #[test]
    fn reason_tier_follows_acceptance_rate_alone() {
        let config = ScoringConfig::default();

        let mut reasons = Vec::new();
        score(&student(3.5, 4.0), &program(40.0, 3.5, 1.0), &config, &mut reasons);
        assert_eq!(reasons.last().map(String::as_str), Some("Low admission competition"));

        reasons.clear();
        score(&student(3.5, 4.0), &program(15.0, 3.5, 1.0), &config, &mut reasons);
        assert_eq!(
            reasons.last().map(String::as_str),
            Some("Moderate admission competition")
        );

        reasons.clear();
        score(&student(3.5, 4.0), &program(3.0, 3.5, 1.0), &config, &mut reasons);
        assert_eq!(
            reasons.last().map(String::as_str),
            Some("Highly competitive admissions")
        );
    }

    #[test]
    fn score_stays_in_band_for_extreme_inputs() {
        let config = ScoringConfig::default();
        let mut reasons = Vec::new();
        // Acceptance rate over 100 drives the base negative; clamp to 0.
        assert_eq!(
            score(&student(3.5, 4.0), &program(150.0, 3.5, 1.0), &config, &mut reasons),
            0
        );
        // A zero competitive factor would blow up; clamp to the band.
        assert_eq!(
            score(&student(4.0, 4.0), &program(1.0, 3.5, 0.0), &config, &mut reasons),
            30
        );
    }
}
