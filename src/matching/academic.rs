//! Academic scoring: GPA, language test, and standardized test.
//!
//! Each component compares the student against the program's admitted
//! average when one is known, using a graduated tier ladder; without a
//! reference it falls back to normalizing against the test ceiling. The
//! three components sum into the 0–60 academic band.

use crate::model::{ProgramContext, StudentProfile};
use crate::utils::round_band;

use super::config::ScoringConfig;

/// Margin above the admitted average that earns the full GPA band.
const GPA_LEAD_MARGIN: f64 = 0.1;
/// Margin below the admitted average still counted as a near miss.
const GPA_NEAR_MISS_MARGIN: f64 = 0.3;
const GPA_AT_AVG_SCORE: i32 = 20;
const GPA_NEAR_MISS_SCORE: i32 = 12;
/// Scale of the far-miss salvage formula.
const GPA_FAR_MISS_SCALE: f64 = 20.0;

const IELTS_LEAD_MARGIN: f64 = 0.5;
const IELTS_CEILING: f64 = 9.0;
const TOEFL_LEAD_MARGIN: i32 = 10;
const TOEFL_CEILING: f64 = 120.0;
const LANGUAGE_AT_AVG_SCORE: i32 = 16;
const LANGUAGE_NEAR_MISS_SCORE: i32 = 10;
const LANGUAGE_FAR_MISS_SCALE: f64 = 10.0;

const SAT_LEAD_MARGIN: i32 = 100;
const SAT_CEILING: f64 = 1600.0;
const SAT_AT_AVG_SCORE: i32 = 12;
const SAT_NEAR_MISS_SCORE: i32 = 7;
const SAT_FAR_MISS_SCALE: f64 = 7.0;

/// Per-component academic contributions.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct AcademicScores {
    pub gpa: i32,
    pub language: i32,
    pub tests: i32,
}

impl AcademicScores {
    pub(crate) fn total(&self) -> i32 {
        self.gpa + self.language + self.tests
    }
}

pub(crate) fn score(
    student: &StudentProfile,
    program: &ProgramContext,
    config: &ScoringConfig,
    reasons: &mut Vec<String>,
) -> AcademicScores {
    AcademicScores {
        gpa: score_gpa(student, program, config, reasons),
        language: score_language(student, program, config, reasons),
        tests: score_tests(student, program, config, reasons),
    }
}

/// GPA component (0–25).
///
/// Requires both the GPA and a positive scale; tier comparisons treat
/// `avg_gpa` as being on the student's reporting scale. The far-miss
/// branch divides the scale-normalized GPA by the raw average, which keeps
/// far-miss scores well under the near-miss tier.
fn score_gpa(
    student: &StudentProfile,
    program: &ProgramContext,
    config: &ScoringConfig,
    reasons: &mut Vec<String>,
) -> i32 {
    let Some(normalized) = student.normalized_gpa() else {
        reasons.push("GPA not provided; match confidence is reduced".into());
        return 0;
    };
    // normalized_gpa() guarantees both fields are present
    let gpa = student.gpa.unwrap_or_default();

    match program.avg_gpa {
        Some(avg) if avg > 0.0 => {
            if gpa >= avg + GPA_LEAD_MARGIN {
                reasons.push("GPA is above the admitted average".into());
                config.bands.gpa
            } else if gpa >= avg {
                reasons.push("GPA matches the admitted average".into());
                GPA_AT_AVG_SCORE
            } else if gpa >= avg - GPA_NEAR_MISS_MARGIN {
                reasons.push("GPA is below the admitted average, but close".into());
                GPA_NEAR_MISS_SCORE
            } else {
                reasons.push("GPA is well below the admitted average".into());
                (((normalized / avg) * GPA_FAR_MISS_SCALE).max(0.0) as i32)
                    .min(config.bands.gpa)
            }
        }
        _ => round_band(normalized, config.bands.gpa),
    }
}

/// Language component (0–20). IELTS is preferred over TOEFL when both are
/// present; with neither, the component is zero and a reason is logged.
fn score_language(
    student: &StudentProfile,
    program: &ProgramContext,
    config: &ScoringConfig,
    reasons: &mut Vec<String>,
) -> i32 {
    if let Some(ielts) = student.ielts {
        return match program.avg_ielts {
            Some(avg) if avg > 0.0 => {
                if ielts >= avg + IELTS_LEAD_MARGIN {
                    reasons.push("IELTS is above the admitted average".into());
                    config.bands.language
                } else if ielts >= avg {
                    reasons.push("IELTS meets the requirement".into());
                    LANGUAGE_AT_AVG_SCORE
                } else if ielts >= avg - IELTS_LEAD_MARGIN {
                    reasons.push("IELTS is below the admitted average, but close".into());
                    LANGUAGE_NEAR_MISS_SCORE
                } else {
                    reasons.push("IELTS is well below the required level".into());
                    (((ielts / avg) * LANGUAGE_FAR_MISS_SCALE).max(0.0) as i32)
                        .min(config.bands.language)
                }
            }
            _ => round_band(ielts / IELTS_CEILING, config.bands.language),
        };
    }

    if let Some(toefl) = student.toefl {
        return match program.avg_toefl {
            Some(avg) if avg > 0 => {
                if toefl >= avg + TOEFL_LEAD_MARGIN {
                    reasons.push("TOEFL is above the admitted average".into());
                    config.bands.language
                } else if toefl >= avg {
                    reasons.push("TOEFL meets the requirement".into());
                    LANGUAGE_AT_AVG_SCORE
                } else if toefl >= avg - TOEFL_LEAD_MARGIN {
                    reasons.push("TOEFL is below the admitted average, but close".into());
                    LANGUAGE_NEAR_MISS_SCORE
                } else {
                    reasons.push("TOEFL is well below the required level".into());
                    ((f64::from(toefl) / f64::from(avg) * LANGUAGE_FAR_MISS_SCALE).max(0.0)
                        as i32)
                        .min(config.bands.language)
                }
            }
            _ => round_band(f64::from(toefl) / TOEFL_CEILING, config.bands.language),
        };
    }

    reasons.push("No language test provided (IELTS/TOEFL)".into());
    0
}

/// Standardized test component (0–15), SAT only.
///
/// A missing SAT contributes zero without a reason here; the recommender
/// flags it downstream when the program reports an average.
fn score_tests(
    student: &StudentProfile,
    program: &ProgramContext,
    config: &ScoringConfig,
    reasons: &mut Vec<String>,
) -> i32 {
    let Some(sat) = student.sat else {
        return 0;
    };

    match program.avg_sat {
        Some(avg) if avg > 0 => {
            if sat >= avg + SAT_LEAD_MARGIN {
                reasons.push("SAT is above the admitted average".into());
                config.bands.tests
            } else if sat >= avg {
                reasons.push("SAT meets the requirement".into());
                SAT_AT_AVG_SCORE
            } else if sat >= avg - SAT_LEAD_MARGIN {
                reasons.push("SAT is below the admitted average, but close".into());
                SAT_NEAR_MISS_SCORE
            } else {
                reasons.push("SAT is well below the admitted average".into());
                ((f64::from(sat) / f64::from(avg) * SAT_FAR_MISS_SCALE).max(0.0) as i32)
                    .min(config.bands.tests)
            }
        }
        _ => round_band(f64::from(sat) / SAT_CEILING, config.bands.tests),
    }
}
