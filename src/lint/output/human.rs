//! Human-readable output formatter.
//!
//! Formats lint diagnostics for terminal display with optional color support.

use super::LintFormatter;
use crate::lint::{LintDiagnostic, Severity};
use crate::ui::NotyposTheme;
use std::io::Write;

/// Formats lint output for human consumption.
pub struct HumanFormatter {
    theme: NotyposTheme,
}

impl HumanFormatter {
    /// Create a new human formatter; `use_color` embeds ANSI styling.
    pub fn new(use_color: bool) -> Self {
        let theme = if use_color {
            NotyposTheme::new().forced()
        } else {
            NotyposTheme::plain()
        };
        Self { theme }
    }
}

impl LintFormatter for HumanFormatter {
    fn format<W: Write>(
        &self,
        diagnostics: &[LintDiagnostic],
        writer: &mut W,
    ) -> std::io::Result<()> {
        for diag in diagnostics {
            // Header line: warning[no-typos]: message
            let header = format!("{}[{}]", diag.severity, diag.rule_id.0);
            writeln!(
                writer,
                "{}: {}",
                self.theme.severity(diag.severity).apply_to(header),
                diag.message
            )?;

            if let Some(ref span) = diag.span {
                writeln!(
                    writer,
                    "  {} {}:{}:{}",
                    self.theme.location.apply_to("-->"),
                    span.file.display(),
                    span.start_line,
                    span.start_col
                )?;
            }

            for related in &diag.related {
                writeln!(
                    writer,
                    "   = note: {} ({}:{})",
                    related.message,
                    related.span.file.display(),
                    related.span.start_line
                )?;
            }

            writeln!(writer)?;
        }

        let error_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count();
        let warning_count = diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count();

        if error_count > 0 || warning_count > 0 {
            writeln!(
                writer,
                "Found {} error(s) and {} warning(s)",
                error_count, warning_count
            )?;
        }

        Ok(())
    }
}
