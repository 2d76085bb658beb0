//! Configuration file discovery and loading.
//!
//! The configuration file is optional. Without `--config`, the nearest
//! `.notypos.yml` in the project root or one of its ancestors is used.

use crate::config::schema::NotyposConfig;
use crate::error::{NotyposError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Accepted configuration file names, in lookup order.
pub const CONFIG_FILE_NAMES: &[&str] = &[".notypos.yml", ".notypos.yaml"];

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. A configuration file (primary indicator)
/// 2. `package.json` or a `.git` directory (fallback)
///
/// # Returns
///
/// The path to the project root, or None if not found.
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if config_file_in(&current).is_some() {
            return Some(current);
        }

        if current.join("package.json").is_file() || current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Find the nearest configuration file at or above `start`.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if let Some(path) = config_file_in(&current) {
            return Some(path);
        }

        if !current.pop() {
            return None;
        }
    }
}

fn config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Load the configuration for a project.
///
/// An explicit path must exist. Otherwise the nearest configuration file
/// is used, falling back to the defaults when there is none.
///
/// # Errors
///
/// Returns `ConfigNotFound` if `explicit` doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config(project_root: &Path, explicit: Option<&Path>) -> Result<NotyposConfig> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => find_config_file(project_root),
    };

    match path {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration");
            load_config_file(&path)
        }
        None => {
            debug!(root = %project_root.display(), "No configuration file, using defaults");
            Ok(NotyposConfig::default())
        }
    }
}

/// Load a single config file and parse it into NotyposConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<NotyposConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            NotyposError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            NotyposError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into NotyposConfig.
///
/// An empty document yields the defaults.
pub fn parse_config(content: &str, source_path: &Path) -> Result<NotyposConfig> {
    if content.trim().is_empty() {
        return Ok(NotyposConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| NotyposError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
