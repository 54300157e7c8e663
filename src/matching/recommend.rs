//! Recommendation synthesis: improvement path and advice.
//!
//! Steps are appended in a fixed priority order (GPA, SAT, achievements)
//! and never reordered by impact size.

use crate::model::{ProgramContext, StudentProfile};

use super::config::ScoringConfig;
use super::result::ImprovementPath;

/// Largest raw-scale GPA delta still worth recommending as a step.
const GPA_DELTA_WINDOW: f64 = 0.5;
/// Impact percent per full GPA point of delta (each 0.1 ≈ 3%).
const GPA_IMPACT_PER_POINT: f64 = 30.0;
const SAT_IMPACT_PERCENT: i32 = 15;
const ACHIEV_IMPACT_PERCENT: i32 = 8;
/// Achievement weight below which the achievements step is suggested.
const ACHIEV_WEIGHT_FLOOR: u32 = 3;

/// Overall score below which a program is called a long shot.
const TOUGH_CALL_FLOOR: i32 = 20;

/// Build the improvement path for the given overall score.
///
/// Steps and the gap are populated only when the score is below the
/// configured target; the target and current score are always recorded.
pub(crate) fn improvement_path(
    student: &StudentProfile,
    program: &ProgramContext,
    config: &ScoringConfig,
    overall: i32,
    achievement_weight: u32,
) -> ImprovementPath {
    let mut path = ImprovementPath {
        target_score: config.improvement_target,
        current_score: overall,
        ..Default::default()
    };

    if overall >= config.improvement_target {
        return path;
    }
    path.gap_points = config.improvement_target - overall;

    if let (Some(gpa), Some(avg)) = (student.gpa, program.avg_gpa) {
        let has_scale = student.gpa_scale.is_some_and(|scale| scale > 0.0);
        let delta = avg - gpa;
        if has_scale && delta > 0.0 && delta <= GPA_DELTA_WINDOW {
            path.recommended_gpa = Some(avg);
            path.gpa_impact_percent = (delta * GPA_IMPACT_PER_POINT).round() as i32;
            path.next_3_steps.push(format!(
                "Raise GPA by {delta:.1} to reach the admitted average of {avg:.1}"
            ));
        }
    }

    if student.sat.is_none() {
        if let Some(avg_sat) = program.avg_sat {
            path.recommended_sat = Some(avg_sat);
            path.sat_impact_percent = SAT_IMPACT_PERCENT;
            path.next_3_steps.push(format!(
                "Take the SAT (the program average of {avg_sat} would add roughly +{SAT_IMPACT_PERCENT}%)"
            ));
        }
    }

    if achievement_weight < ACHIEV_WEIGHT_FLOOR {
        path.achiev_impact_percent = ACHIEV_IMPACT_PERCENT;
        path.next_3_steps.push(
            "Add 2-3 achievements (olympiad, leadership, sports) for roughly +8-10%".into(),
        );
    }

    path.next_3_steps.truncate(config.max_improvement_steps);
    path
}

/// Choose the advice string for the overall score tier. The four tiers are
/// exhaustive and mutually exclusive.
pub(crate) fn advice(overall: i32, path: &ImprovementPath, config: &ScoringConfig) -> String {
    if overall >= config.safety_threshold {
        "Strong chance of admission. Submit your application!".into()
    } else if overall >= config.reach_threshold {
        "A realistic option with a fair chance of admission. Make sure your profile is \
         complete and every document is in order."
            .into()
    } else if overall >= TOUGH_CALL_FLOOR {
        let mut advice = String::from("A tough call, but not impossible. ");
        if let Some(step) = path.next_3_steps.first() {
            advice.push_str(&format!("Recommended: {step}. Worth a try."));
        }
        advice
    } else {
        "A very difficult option. Consider focusing on other programs.".into()
    }
}
