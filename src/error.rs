//! Unified error types for unimatch.
//!
//! The matching engine itself is infallible: missing or malformed optional
//! input degrades to documented defaults plus an explanatory reason. This
//! hierarchy exists for the collaborator layer around the engine — profile
//! lookup, catalog queries, report rendering, and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for unimatch operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UnimatchError {
    /// Errors while resolving a student profile
    #[error("Failed to resolve profile: {context}")]
    Profile {
        context: String,
        #[source]
        source: ProfileErrorKind,
    },

    /// Errors while querying the program catalog
    #[error("Catalog query failed: {context}")]
    Catalog {
        context: String,
        #[source]
        source: CatalogErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific profile error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ProfileErrorKind {
    #[error("No profile exists for user '{user_id}'")]
    NotFound { user_id: String },

    #[error("Invalid profile document: {0}")]
    InvalidDocument(String),
}

/// Specific catalog error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum CatalogErrorKind {
    #[error("Invalid catalog document: {0}")]
    InvalidDocument(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerialization(String),

    #[error("Output format not supported for this operation: {0}")]
    UnsupportedFormat(String),
}

/// Convenient Result type for unimatch operations
pub type Result<T> = std::result::Result<T, UnimatchError>;

impl UnimatchError {
    /// Create a profile error with context
    pub fn profile(context: impl Into<String>, source: ProfileErrorKind) -> Self {
        Self::Profile {
            context: context.into(),
            source,
        }
    }

    /// Create a profile-not-found error
    pub fn profile_not_found(user_id: impl Into<String>) -> Self {
        let user_id = user_id.into();
        Self::profile(
            format!("lookup for '{user_id}'"),
            ProfileErrorKind::NotFound { user_id },
        )
    }

    /// Create a catalog error with context
    pub fn catalog(context: impl Into<String>, source: CatalogErrorKind) -> Self {
        Self::Catalog {
            context: context.into(),
            source,
        }
    }

    /// Create a report error with context
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True when this error means "the requested profile does not exist",
    /// the condition upstream layers surface as a user-facing not-found.
    #[must_use]
    pub fn is_profile_not_found(&self) -> bool {
        matches!(
            self,
            Self::Profile {
                source: ProfileErrorKind::NotFound { .. },
                ..
            }
        )
    }
}

impl From<std::io::Error> for UnimatchError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for UnimatchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Validation(format!("JSON deserialization: {err}"))
    }
}
