//! **A matching and recommendation engine for study programs.**
//!
//! `unimatch` scores a student's academic and financial profile against a
//! catalog of study programs and produces a ranked, categorized,
//! explainable recommendation. It powers both a command-line interface
//! (CLI) and a Rust library for programmatic integration.
//!
//! ## Key Features
//!
//! - **Multi-factor scoring**: academic (GPA, language tests, SAT),
//!   competitive (acceptance rate adjusted for the student's standing),
//!   financial (budget coverage and scholarship feasibility), and
//!   achievement components combine into a 0–100 overall score.
//! - **Reach/target/safety classification**: a pure function of the
//!   overall score, with tunable thresholds.
//! - **Explainability**: every triggered rule appends a reason, in stage
//!   order; each result carries a full sub-score breakdown.
//! - **Improvement path**: up to three prioritized, concrete steps with
//!   estimated impact, synthesized for any result below the safety tier.
//! - **Deterministic and rule-based**: identical inputs always produce
//!   identical results; there is no learned component, so every score is
//!   auditable.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the normalized input model — [`StudentProfile`] and
//!   [`ProgramContext`]. Collaborators resolve their records into these
//!   structures; the engine reads nothing else.
//! - **[`matching`]**: the engine itself. [`MatchEngine::evaluate`] is a
//!   pure, infallible function from one profile and one program to a
//!   [`MatchResult`].
//! - **[`catalog`]**: the collaborator seams — [`ProgramCatalog`] and
//!   [`ProfileStore`] traits plus pure query semantics (filters, rank
//!   ordering, result caps) and in-memory implementations.
//! - **[`reports`]**: groups results into reach/target/safety buckets and
//!   renders JSON or terminal summaries.
//! - **[`config`]**: application configuration with YAML discovery and
//!   validation.
//!
//! ## Getting Started
//!
//! ```
//! use unimatch::matching::MatchEngine;
//! use unimatch::model::{ProgramContext, StudentProfile};
//!
//! let student = StudentProfile {
//!     gpa: Some(3.7),
//!     gpa_scale: Some(4.0),
//!     ielts: Some(7.0),
//!     budget_year: Some(40_000.0),
//!     ..Default::default()
//! };
//! let program = ProgramContext {
//!     title: "Data Science".into(),
//!     avg_gpa: Some(3.5),
//!     avg_ielts: Some(6.5),
//!     acceptance_rate: Some(25.0),
//!     competitive_factor: 1.0,
//!     tuition_amount: Some(35_000.0),
//!     ..Default::default()
//! };
//!
//! let result = MatchEngine::default().evaluate(&student, &program);
//! println!("{} ({})", result.overall_score, result.category);
//! for reason in &result.reasons {
//!     println!("- {reason}");
//! }
//! ```
//!
//! The engine is stateless and side-effect free: it is safe to share one
//! [`MatchEngine`] across threads and to evaluate many programs in
//! parallel ([`MatchEngine::evaluate_all`] does exactly that).

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: f64->i32 casts are pervasive in banded score math; every
    // cast site is bounded by a clamp or a band cap
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `avg`/`gpa` or `rate`/`raw` are clear in context
    clippy::similar_names
)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod matching;
pub mod model;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use catalog::{CatalogQuery, InMemoryCatalog, ProgramCatalog, ProgramRecord, ProfileStore};
pub use config::{AppConfig, ConfigError, Validatable};
pub use error::{Result, UnimatchError};
pub use matching::{
    Breakdown, Category, FinancialStatus, ImprovementPath, MatchEngine, MatchResult,
    ScoringConfig, match_program,
};
pub use model::{Achievements, ProgramContext, StudentProfile};
pub use reports::{MatchReport, ProgramMatch, ReportFormat};
