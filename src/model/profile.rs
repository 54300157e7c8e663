//! Student profile data structures.

use serde::{Deserialize, Serialize};

/// A student's academic and financial profile, fully resolved for one
/// matching call.
///
/// Every numeric field that can be unknown is an `Option`; `0` is a
/// legitimate value on several of these scales (a 0.0 GPA, a 0 budget), so
/// sentinel values are never used to encode absence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StudentProfile {
    /// Grade point average as reported by the student.
    ///
    /// Only meaningful together with [`gpa_scale`](Self::gpa_scale);
    /// both-or-neither is honored throughout the engine.
    pub gpa: Option<f64>,
    /// The scale the GPA is reported on (e.g., 4.0, 5.0, 100.0).
    pub gpa_scale: Option<f64>,
    /// IELTS band score (0–9).
    pub ielts: Option<f64>,
    /// TOEFL iBT total (0–120).
    pub toefl: Option<i32>,
    /// SAT total (0–1600).
    pub sat: Option<i32>,
    /// Annual study budget in USD equivalent.
    pub budget_year: Option<f64>,
    /// Currency the budget was originally stated in.
    pub budget_currency: Option<String>,
    /// ISO country code of citizenship; may be empty when unknown.
    pub citizenship: String,
    /// Expected (or past) school graduation year.
    pub graduation_year: Option<i32>,
    /// Extracurricular achievement counts.
    pub achievements: Achievements,
}

/// Non-negative counts of extracurricular achievements, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Achievements {
    /// Academic olympiad participations/awards.
    pub olympiads: u32,
    /// Leadership roles (student council, club president, ...).
    pub leadership: u32,
    /// Competitive sports.
    pub sports: u32,
    /// Volunteering engagements.
    pub volunteering: u32,
    /// Anything else worth listing.
    pub other: u32,
}

impl Achievements {
    /// Weighted achievement signal used by the special-factors stage.
    ///
    /// Olympiads weigh 3x, leadership 2x, sports and "other" 1x,
    /// volunteering 0.8x (floored).
    #[must_use]
    pub fn weight(&self) -> u32 {
        // Widened arithmetic: extreme counts must not overflow the sum.
        let weight = u64::from(self.olympiads) * 3
            + u64::from(self.leadership) * 2
            + u64::from(self.sports)
            + (f64::from(self.volunteering) * 0.8) as u64
            + u64::from(self.other);
        u32::try_from(weight).unwrap_or(u32::MAX)
    }

    /// True when no achievements are recorded at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.olympiads == 0
            && self.leadership == 0
            && self.sports == 0
            && self.volunteering == 0
            && self.other == 0
    }
}

impl StudentProfile {
    /// GPA normalized to 0–1, when both the value and a positive scale are
    /// present.
    #[must_use]
    pub fn normalized_gpa(&self) -> Option<f64> {
        match (self.gpa, self.gpa_scale) {
            (Some(gpa), Some(scale)) if scale > 0.0 => Some(gpa / scale),
            _ => None,
        }
    }
}
