//! Achievement scoring: weighted extracurricular signal.

use crate::model::StudentProfile;

use super::config::ScoringConfig;

/// Weight at which the record counts as strong.
const STRONG_WEIGHT: u32 = 5;
/// Weight at which the record counts as good.
const GOOD_WEIGHT: u32 = 3;

const GOOD_SCORE: i32 = 7;
const SOME_SCORE: i32 = 4;

/// Score the achievement record. Returns the component score together with
/// the raw weight, which the recommender reuses for its achievements step.
pub(crate) fn score(
    student: &StudentProfile,
    config: &ScoringConfig,
    reasons: &mut Vec<String>,
) -> (i32, u32) {
    let weight = student.achievements.weight();

    let score = if weight >= STRONG_WEIGHT {
        reasons.push("Strong achievement record (olympiads, leadership, sports)".into());
        config.bands.special
    } else if weight >= GOOD_WEIGHT {
        reasons.push("Good achievement record".into());
        GOOD_SCORE
    } else if weight >= 1 {
        reasons.push("Some achievements recorded; adding more would help".into());
        SOME_SCORE
    } else {
        reasons.push("Adding achievements is recommended to improve chances".into());
        0
    };

    (score, weight)
}
