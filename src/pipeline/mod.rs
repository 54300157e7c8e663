//! Input loading and output handling for the CLI.
//!
//! The CLI handlers stay free of filesystem plumbing: this module loads
//! profile and catalog documents with path context on every error and
//! writes rendered reports to stdout or a file.

mod input;
mod output;

pub use input::{load_profile, load_records};
pub use output::{OutputTarget, should_use_color, write_output};

/// Exit codes used by the CLI.
pub mod exit_codes {
    /// Run completed.
    pub const SUCCESS: i32 = 0;
    /// Run completed, but a `--min-score` gate was not met.
    pub const BELOW_MIN_SCORE: i32 = 1;
    /// An error occurred.
    pub const ERROR: i32 = 3;
}
