//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by
//! main.rs. The binary itself only parses arguments and dispatches here.

mod match_cmd;

pub use match_cmd::{MatchCommandConfig, run_match};
