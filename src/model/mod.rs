//! Normalized input model for student/program matching.
//!
//! This module defines the canonical data structures consumed by the
//! matching engine. Upstream collaborators (profile stores, program
//! catalogs, admission-statistics joins) resolve their records into these
//! structures before a match is computed; the engine itself never reads
//! anything else.

mod profile;
mod program;

pub use profile::*;
pub use program::*;
