//! Category grouping of match results.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::matching::{Category, MatchResult};
use crate::model::ProgramContext;

/// One scored program: the program context paired with its match result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramMatch {
    /// The program that was evaluated.
    pub program: ProgramContext,
    /// The engine's verdict for it.
    #[serde(flatten)]
    pub result: MatchResult,
}

/// Match results grouped by category for presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchReport {
    /// When the report was generated.
    pub generated_at: DateTime<Utc>,
    /// Long-shot programs, best first.
    pub reach: Vec<ProgramMatch>,
    /// Plausible programs, best first.
    pub target: Vec<ProgramMatch>,
    /// Strong-chance programs, best first.
    pub safety: Vec<ProgramMatch>,
    /// Sum of the three list lengths.
    pub total: usize,
}

impl MatchReport {
    /// Group scored programs into category buckets.
    ///
    /// Each bucket is sorted by overall score descending; the sort is
    /// stable, so ties keep their input order.
    #[must_use]
    pub fn build(matches: Vec<ProgramMatch>) -> Self {
        let mut reach = Vec::new();
        let mut target = Vec::new();
        let mut safety = Vec::new();

        for entry in matches {
            match entry.result.category {
                Category::Reach => reach.push(entry),
                Category::Target => target.push(entry),
                Category::Safety => safety.push(entry),
            }
        }

        for bucket in [&mut reach, &mut target, &mut safety] {
            bucket.sort_by_key(|entry| Reverse(entry.result.overall_score));
        }

        let total = reach.len() + target.len() + safety.len();
        Self {
            generated_at: Utc::now(),
            reach,
            target,
            safety,
            total,
        }
    }

    /// Buckets in presentation order with their display names.
    #[must_use]
    pub fn buckets(&self) -> [(&'static str, &[ProgramMatch]); 3] {
        [
            ("Safety", self.safety.as_slice()),
            ("Target", self.target.as_slice()),
            ("Reach", self.reach.as_slice()),
        ]
    }
}
