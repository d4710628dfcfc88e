//! Config file loading
//!
//! The config file is optional; a missing file yields the defaults. A file
//! that exists but does not parse is a hard error, so a typo never
//! silently reverts the user to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::RestpickError;

use super::types::Config;

/// Platform config file location (`<config dir>/restpick/config.toml`)
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("restpick").join("config.toml"))
}

/// Load the config from the platform location
pub fn load() -> Result<Config, RestpickError> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(Config::default()),
    }
}

/// Load the config from an explicit path
pub fn load_from(path: &Path) -> Result<Config, RestpickError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let text = fs::read_to_string(path)?;
    toml::from_str(&text).map_err(|e| RestpickError::InvalidConfig {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod loader_tests;
