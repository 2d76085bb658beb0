//! Lint rule definitions.
//!
//! This module provides the core traits and types for defining lint rules:
//!
//! - [`LintRule`] - The trait that all lint rules must implement
//! - [`RuleId`] - Unique identifier for a lint rule
//! - [`Severity`] - Severity level for diagnostics (Hint, Warning, Error)

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::diagnostic::LintDiagnostic;
use super::source::SourceUnit;

/// Unique identifier for a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RuleId(pub String);

impl RuleId {
    /// Create a new rule ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for lint diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational hint.
    Hint,
    /// Advisory finding; does not fail a run unless `--strict` is set.
    Warning,
    /// Finding that fails the run.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Hint => write!(f, "hint"),
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "hint" => Ok(Severity::Hint),
            "warning" | "warn" => Ok(Severity::Warning),
            "error" => Ok(Severity::Error),
            _ => Err(format!("Unknown severity: {}", s)),
        }
    }
}

/// A lint rule that analyzes one parsed source file.
///
/// Each rule checks for a specific class of issue and produces diagnostics
/// in the order it finds them.
pub trait LintRule: Send + Sync {
    /// Unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// Human-readable name of the rule.
    fn name(&self) -> &str;

    /// Description of what this rule checks.
    fn description(&self) -> &str;

    /// Default severity for this rule.
    fn default_severity(&self) -> Severity;

    /// Check a source file and return any diagnostics.
    fn check(&self, unit: &SourceUnit) -> Vec<LintDiagnostic>;
}
