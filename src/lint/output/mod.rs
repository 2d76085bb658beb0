//! Report rendering.
//!
//! A formatter turns the diagnostics of a whole run into one document:
//! rustc-style text for terminals, JSON for scripts, or SARIF for
//! code-scanning services. Formatters never decide exit status.

pub mod human;
pub mod json;
pub mod sarif;

use crate::lint::LintDiagnostic;
use std::io::Write;

/// Output format for lint results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Rustc-style text for terminals.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
    /// SARIF 2.1.0 for code-scanning services.
    Sarif,
}

/// Renders a run's diagnostics, in the order given.
pub trait LintFormatter {
    /// Write the report for `diagnostics` to `writer`.
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()>;
}

pub use human::HumanFormatter;
pub use json::JsonFormatter;
pub use sarif::SarifFormatter;
