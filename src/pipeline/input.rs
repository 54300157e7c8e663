//! Input document loading.

use std::path::Path;

use crate::catalog::ProgramRecord;
use crate::error::{CatalogErrorKind, ProfileErrorKind, Result, UnimatchError};
use crate::model::StudentProfile;

/// Load a student profile from a JSON document.
pub fn load_profile(path: &Path) -> Result<StudentProfile> {
    let content = std::fs::read_to_string(path).map_err(|err| UnimatchError::io(path, err))?;
    serde_json::from_str(&content).map_err(|err| {
        UnimatchError::profile(
            format!("parsing {}", path.display()),
            ProfileErrorKind::InvalidDocument(err.to_string()),
        )
    })
}

/// Load program records from a JSON document holding an array of records.
pub fn load_records(path: &Path) -> Result<Vec<ProgramRecord>> {
    let content = std::fs::read_to_string(path).map_err(|err| UnimatchError::io(path, err))?;
    serde_json::from_str(&content).map_err(|err| {
        UnimatchError::catalog(
            format!("parsing {}", path.display()),
            CatalogErrorKind::InvalidDocument(err.to_string()),
        )
    })
}
