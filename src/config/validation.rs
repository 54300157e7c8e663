//! Configuration validation.
//!
//! The engine itself never validates its inputs; validation is a caller
//! concern and lives here, next to the config types callers construct.

use crate::matching::{MAX_OVERALL_SCORE, ScoringConfig};

use super::types::AppConfig;

/// Error type for configuration validation.
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.scoring.validate()
    }
}

impl Validatable for ScoringConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.reach_threshold >= self.safety_threshold {
            errors.push(ConfigError {
                field: "scoring.reach_threshold".into(),
                message: format!(
                    "reach threshold {} must be below safety threshold {}",
                    self.reach_threshold, self.safety_threshold
                ),
            });
        }
        if !(0..=MAX_OVERALL_SCORE).contains(&self.safety_threshold) {
            errors.push(ConfigError {
                field: "scoring.safety_threshold".into(),
                message: format!("must be within 0..={MAX_OVERALL_SCORE}"),
            });
        }

        let bands = [
            ("scoring.bands.gpa", self.bands.gpa),
            ("scoring.bands.language", self.bands.language),
            ("scoring.bands.tests", self.bands.tests),
            ("scoring.bands.competitive", self.bands.competitive),
            ("scoring.bands.financial", self.bands.financial),
            ("scoring.bands.special", self.bands.special),
        ];
        for (field, width) in bands {
            if width <= 0 {
                errors.push(ConfigError {
                    field: field.into(),
                    message: format!("band width {width} must be positive"),
                });
            }
        }

        if !(0..=self.bands.competitive).contains(&self.competitive_default) {
            errors.push(ConfigError {
                field: "scoring.competitive_default".into(),
                message: format!(
                    "default {} must lie within the competitive band 0..={}",
                    self.competitive_default, self.bands.competitive
                ),
            });
        }

        if self.competitive_factor_min <= 0.0
            || self.competitive_factor_min >= self.competitive_factor_max
        {
            errors.push(ConfigError {
                field: "scoring.competitive_factor_min".into(),
                message: format!(
                    "domain {}..={} must be positive and ordered",
                    self.competitive_factor_min, self.competitive_factor_max
                ),
            });
        }

        errors
    }
}
