//! Configuration module for unimatch.
//!
//! Provides the application-level configuration: the scoring calibration
//! plus output defaults, with YAML file loading and discovery, validation,
//! and JSON schema generation for editor support.
//!
//! # Configuration File
//!
//! Place a `.unimatch.yaml` in your project root or the user config
//! directory:
//!
//! ```yaml
//! scoring:
//!   safety_threshold: 70
//!   reach_threshold: 40
//! output:
//!   format: summary
//!   no_color: false
//! ```

mod file;
mod types;
mod validation;

pub use file::{discover_config_file, load_config_file, load_or_default};
pub use types::{AppConfig, OutputDefaults};
pub use validation::{ConfigError, Validatable};

/// Generate a JSON Schema for the config file format.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).unwrap_or_default()
}

/// Generate an example config file with the default values spelled out.
#[must_use]
pub fn generate_example_config() -> String {
    let config = AppConfig::default();
    let yaml = serde_yaml::to_string(&config).unwrap_or_default();
    format!(
        "# unimatch configuration\n\
         # All values are optional; anything omitted falls back to the default.\n\
         {yaml}"
    )
}
