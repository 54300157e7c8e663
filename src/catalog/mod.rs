//! Program catalog and profile store interfaces.
//!
//! The engine never performs I/O; these are the seams its collaborators
//! implement. The query semantics themselves — conjunctive filters,
//! rank-then-title ordering, and the result cap — are pure functions over
//! in-memory records, so persistence backends only have to produce
//! [`ProgramRecord`]s. JSON-backed in-memory implementations are provided
//! for the CLI and for tests.

use serde::{Deserialize, Serialize};

use crate::error::{Result, UnimatchError};
use crate::model::{ProgramContext, StudentProfile};

/// Default number of programs a catalog query returns.
pub const DEFAULT_QUERY_LIMIT: usize = 30;
/// Hard upper bound on the number of programs a query may return.
pub const MAX_QUERY_LIMIT: usize = 50;

/// Filters for a program catalog query. All filters are conjunctive; an
/// empty filter list matches everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogQuery {
    /// Country codes to include.
    pub countries: Vec<String>,
    /// Fields of study to include.
    pub fields: Vec<String>,
    /// Degree levels to include.
    pub degree_levels: Vec<String>,
    /// Maximum annual tuition; programs without a tuition figure are
    /// excluded when this is set.
    pub max_tuition: Option<f64>,
    /// Requested result count; `None` or zero falls back to the default.
    pub limit: Option<usize>,
}

impl CatalogQuery {
    /// The limit actually applied: default 30, hard cap 50.
    #[must_use]
    pub fn effective_limit(&self) -> usize {
        match self.limit {
            None | Some(0) => DEFAULT_QUERY_LIMIT,
            Some(n) => n.min(MAX_QUERY_LIMIT),
        }
    }

    /// Whether a record passes every filter.
    #[must_use]
    pub fn matches(&self, record: &ProgramRecord) -> bool {
        let program = &record.program;
        if !self.countries.is_empty() && !self.countries.contains(&program.country_code) {
            return false;
        }
        if !self.fields.is_empty() && !self.fields.contains(&program.field) {
            return false;
        }
        if !self.degree_levels.is_empty() && !self.degree_levels.contains(&program.degree_level) {
            return false;
        }
        if let Some(max_tuition) = self.max_tuition {
            match program.tuition_amount {
                Some(tuition) if tuition <= max_tuition => {}
                _ => return false,
            }
        }
        true
    }
}

/// A program joined with the institutional rank used for catalog ordering.
///
/// The rank never reaches the matching engine; it only orders query
/// results (ascending, unranked last).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgramRecord {
    /// Institutional rank of the owning university, if known.
    #[serde(default)]
    pub rank: Option<u32>,
    /// The fully-resolved program context.
    #[serde(flatten)]
    pub program: ProgramContext,
}

/// Source of program records, pre-joined with admission statistics.
pub trait ProgramCatalog {
    /// List programs matching the query, ordered by institutional rank
    /// ascending (unranked last) then title ascending, capped at the
    /// query's effective limit.
    fn list(&self, query: &CatalogQuery) -> Result<Vec<ProgramRecord>>;
}

/// Source of student profiles.
pub trait ProfileStore {
    /// Load the profile for a user, failing with a not-found error when no
    /// profile exists.
    fn load(&self, user_id: &str) -> Result<StudentProfile>;
}

/// Order records in place: rank ascending with unranked records last, ties
/// broken by title ascending. The sort is stable.
pub fn order_records(records: &mut [ProgramRecord]) {
    records.sort_by(|a, b| {
        let rank_order = match (a.rank, b.rank) {
            (Some(ra), Some(rb)) => ra.cmp(&rb),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => std::cmp::Ordering::Equal,
        };
        rank_order.then_with(|| a.program.title.cmp(&b.program.title))
    });
}

/// Apply a query to a slice of records: filter, order, cap.
#[must_use]
pub fn apply_query(records: &[ProgramRecord], query: &CatalogQuery) -> Vec<ProgramRecord> {
    let mut matched: Vec<ProgramRecord> = records
        .iter()
        .filter(|record| query.matches(record))
        .cloned()
        .collect();
    order_records(&mut matched);
    matched.truncate(query.effective_limit());
    matched
}

/// In-memory program catalog, usually loaded from a JSON document.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<ProgramRecord>,
}

impl InMemoryCatalog {
    /// Build a catalog from records.
    #[must_use]
    pub fn new(records: Vec<ProgramRecord>) -> Self {
        Self { records }
    }

    /// Number of records held, before any query.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProgramCatalog for InMemoryCatalog {
    fn list(&self, query: &CatalogQuery) -> Result<Vec<ProgramRecord>> {
        Ok(apply_query(&self.records, query))
    }
}

/// In-memory profile store keyed by user id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: std::collections::HashMap<String, StudentProfile>,
}

impl InMemoryProfileStore {
    /// Build a store from `(user_id, profile)` pairs.
    #[must_use]
    pub fn new(profiles: impl IntoIterator<Item = (String, StudentProfile)>) -> Self {
        Self {
            profiles: profiles.into_iter().collect(),
        }
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn load(&self, user_id: &str) -> Result<StudentProfile> {
        self.profiles
            .get(user_id)
            .cloned()
            .ok_or_else(|| UnimatchError::profile_not_found(user_id))
    }
}

/// Validate a record before it reaches the engine. The engine itself never
/// rejects data; catalog implementations call this at ingest time.
pub fn validate_record(
    record: &ProgramRecord,
    config: &crate::matching::ScoringConfig,
) -> Result<()> {
    let program = &record.program;
    if program.id.is_empty() {
        return Err(UnimatchError::validation("program record without an id"));
    }
    if !config.competitive_factor_in_range(program.competitive_factor) {
        return Err(UnimatchError::validation(format!(
            "program '{}': competitive factor {} outside {}..={}",
            program.id,
            program.competitive_factor,
            config.competitive_factor_min,
            config.competitive_factor_max
        )));
    }
    if let Some(rate) = program.acceptance_rate {
        if !(0.0..=100.0).contains(&rate) {
            return Err(UnimatchError::validation(format!(
                "program '{}': acceptance rate {rate} outside 0..=100",
                program.id
            )));
        }
    }
    Ok(())
}
