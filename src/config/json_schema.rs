//! JSON Schema generation for notypos configuration.
//!
//! This module generates a JSON Schema (Draft-07) for the `.notypos.yml`
//! file format, enabling editor autocomplete and validation.

use serde_json::{json, Value};

use super::schema::{DEFAULT_EXTENSIONS, DEFAULT_IGNORE};

/// Generates JSON Schema for notypos configuration.
pub struct SchemaGenerator;

impl SchemaGenerator {
    /// Create a new schema generator.
    pub fn new() -> Self {
        Self
    }

    /// Generate the complete JSON Schema for `.notypos.yml`.
    pub fn generate(&self) -> Value {
        json!({
            "$schema": "http://json-schema.org/draft-07/schema#",
            "title": "notypos Configuration",
            "description": "Configuration for the no-typos component linter",
            "type": "object",
            "properties": {
                "severity": {
                    "type": "string",
                    "enum": ["hint", "warning", "error"],
                    "default": "warning",
                    "description": "Severity of every reported typo"
                },
                "extensions": {
                    "type": "array",
                    "items": { "type": "string" },
                    "default": DEFAULT_EXTENSIONS,
                    "description": "File extensions analyzed when walking directories"
                },
                "ignore": {
                    "type": "array",
                    "items": { "type": "string" },
                    "default": DEFAULT_IGNORE,
                    "description": "Directory or file names skipped when walking directories"
                },
                "spellings": self.spellings_schema()
            },
            "additionalProperties": false
        })
    }

    /// Generate schema for the spellings object.
    fn spellings_schema(&self) -> Value {
        let names = |description: &str| {
            json!({
                "type": "array",
                "items": { "type": "string", "minLength": 1 },
                "uniqueItems": true,
                "description": description
            })
        };
        json!({
            "type": "object",
            "description": "Names accepted in addition to the built-in tables",
            "properties": {
                "static_properties": names("Extra static configuration properties"),
                "lifecycle_methods": names("Extra lifecycle methods"),
                "prop_types": names("Extra prop-type validators")
            },
            "additionalProperties": false
        })
    }
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new()
    }
}
