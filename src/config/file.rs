//! Configuration file loading and discovery.

use std::path::{Path, PathBuf};

use crate::error::{Result, UnimatchError};

use super::types::AppConfig;

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[".unimatch.yaml", ".unimatch.yml", "unimatch.yaml"];

/// Discover a config file by searching standard locations.
///
/// Search order: explicit path, current directory, user config directory
/// (`~/.config/unimatch/`), home directory.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("unimatch")) {
            return Some(path);
        }
    }

    if let Some(home) = dirs::home_dir() {
        if let Some(path) = find_config_in_dir(&home) {
            return Some(path);
        }
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Load a config file from an explicit path.
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    let content =
        std::fs::read_to_string(path).map_err(|err| UnimatchError::io(path, err))?;
    serde_yaml::from_str(&content).map_err(|err| {
        UnimatchError::config(format!("failed to parse {}: {err}", path.display()))
    })
}

/// Load the discovered config file, or fall back to defaults.
///
/// Returns the config together with the path it was loaded from, if any.
/// A malformed discovered file is reported as a warning and skipped rather
/// than aborting the run.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    match discover_config_file(explicit_path) {
        Some(path) => match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(err) => {
                tracing::warn!("ignoring config file {}: {err}", path.display());
                (AppConfig::default(), None)
            }
        },
        None => (AppConfig::default(), None),
    }
}
