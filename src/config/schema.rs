//! Configuration schema definitions for notypos.
//!
//! This module contains the struct definitions that map to the
//! `.notypos.yml` file format.

use serde::{Deserialize, Serialize};

use crate::lint::Severity;

/// Root configuration structure for `.notypos.yml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NotyposConfig {
    /// Severity of every reported typo (defaults to warning)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,

    /// File extensions analyzed when walking directories
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Directory or file names skipped when walking directories
    #[serde(default = "default_ignore")]
    pub ignore: Vec<String>,

    /// Extra accepted names
    #[serde(skip_serializing_if = "SpellingsConfig::is_empty")]
    pub spellings: SpellingsConfig,
}

impl Default for NotyposConfig {
    fn default() -> Self {
        Self {
            severity: None,
            extensions: default_extensions(),
            ignore: default_ignore(),
            spellings: SpellingsConfig::default(),
        }
    }
}

impl NotyposConfig {
    /// Whether `extension` (without the dot) is analyzed.
    pub fn accepts_extension(&self, extension: &str) -> bool {
        self.extensions
            .iter()
            .any(|ext| ext.trim_start_matches('.').eq_ignore_ascii_case(extension))
    }

    /// Whether a path component named `name` is skipped.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.ignore.iter().any(|ignored| ignored == name)
    }
}

/// Names accepted in addition to the built-in tables.
///
/// Each name becomes a canonical spelling of its own, so near misses of it
/// are reported too.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SpellingsConfig {
    /// Static configuration properties, e.g. `displayName`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub static_properties: Vec<String>,

    /// Lifecycle methods, e.g. `getSnapshotBeforeUpdate`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub lifecycle_methods: Vec<String>,

    /// Prop-type validators, e.g. `elementType`
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub prop_types: Vec<String>,
}

impl SpellingsConfig {
    pub fn is_empty(&self) -> bool {
        self.static_properties.is_empty()
            && self.lifecycle_methods.is_empty()
            && self.prop_types.is_empty()
    }
}

pub const DEFAULT_EXTENSIONS: &[&str] = &["js", "jsx", "mjs", "cjs"];

pub const DEFAULT_IGNORE: &[&str] = &["node_modules", ".git", "dist", "build", "coverage"];

fn default_extensions() -> Vec<String> {
    DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect()
}

fn default_ignore() -> Vec<String> {
    DEFAULT_IGNORE.iter().map(|s| s.to_string()).collect()
}
