//! Configuration loading and parsing for notypos.
//!
//! This module handles:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - JSON Schema generation in [`json_schema`]
//!
//! # Example
//!
//! ```
//! use notypos::config::load_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".notypos.yml"), "severity: error").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! assert_eq!(config.severity, Some(notypos::lint::Severity::Error));
//! ```

pub mod json_schema;
pub mod loader;
pub mod schema;

pub use json_schema::SchemaGenerator;

pub use loader::{
    find_config_file, find_project_root, load_config, load_config_file, parse_config,
    CONFIG_FILE_NAMES,
};
pub use schema::{NotyposConfig, SpellingsConfig, DEFAULT_EXTENSIONS, DEFAULT_IGNORE};
