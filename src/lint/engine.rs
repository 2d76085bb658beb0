//! Running rules over source files.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::registry::RuleRegistry;
use super::source::SourceUnit;
use super::LintDiagnostic;
use crate::config::NotyposConfig;
use crate::error::{NotyposError, Result};

/// Diagnostics and failures for a set of files.
#[derive(Debug, Default)]
pub struct LintReport {
    /// Every diagnostic, grouped by file in input order.
    pub diagnostics: Vec<LintDiagnostic>,
    /// Files that could not be read or parsed.
    pub failures: Vec<NotyposError>,
    /// Number of files analyzed.
    pub files_checked: usize,
}

impl LintReport {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.failures.is_empty()
    }
}

/// Applies every registered rule to source files.
pub struct LintEngine {
    registry: RuleRegistry,
}

impl LintEngine {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    /// Engine with the built-in rules configured from `config`.
    pub fn from_config(config: &NotyposConfig) -> Self {
        Self::new(RuleRegistry::from_config(config))
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Check one file's contents.
    ///
    /// # Errors
    ///
    /// Returns `SourceParseError` if `text` is not valid ECMAScript + JSX.
    pub fn check_source(&self, path: &Path, text: &str) -> Result<Vec<LintDiagnostic>> {
        let unit = SourceUnit::parse(path, text)?;

        let mut diagnostics = Vec::new();
        for rule in self.registry.sorted() {
            diagnostics.extend(rule.check(&unit));
        }
        Ok(diagnostics)
    }

    /// Read and check one file.
    pub fn check_file(&self, path: &Path) -> Result<Vec<LintDiagnostic>> {
        let text = fs::read_to_string(path)?;
        self.check_source(path, &text)
    }

    /// Check every file, continuing past files that fail.
    pub fn check_files(&self, paths: &[PathBuf]) -> LintReport {
        let mut report = LintReport::default();
        for path in paths {
            match self.check_file(path) {
                Ok(diagnostics) => {
                    report.files_checked += 1;
                    report.diagnostics.extend(diagnostics);
                }
                Err(e) => {
                    debug!(path = %path.display(), error = %e, "Skipping file");
                    report.failures.push(e);
                }
            }
        }
        debug!(
            files = report.files_checked,
            diagnostics = report.diagnostics.len(),
            failures = report.failures.len(),
            "Lint run complete"
        );
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lint::Severity;
    use tempfile::TempDir;

    #[test]
    fn check_source_reports_typos() {
        let engine = LintEngine::from_config(&NotyposConfig::default());
        let diagnostics = engine
            .check_source(
                Path::new("App.jsx"),
                "class A extends Component { static proptypes = {}; }",
            )
            .unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn parse_errors_carry_a_position() {
        let engine = LintEngine::from_config(&NotyposConfig::default());
        let err = engine
            .check_source(Path::new("Bad.jsx"), "const a = 1;\nclass {")
            .unwrap_err();
        match err {
            NotyposError::SourceParseError { path, line, .. } => {
                assert_eq!(path, PathBuf::from("Bad.jsx"));
                assert_eq!(line, 2);
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn check_files_continues_past_failures() {
        let temp = TempDir::new().unwrap();
        let bad = temp.path().join("bad.js");
        let good = temp.path().join("good.jsx");
        fs::write(&bad, "function (").unwrap();
        fs::write(&good, "class A extends Component { Render() {} }").unwrap();

        let engine = LintEngine::from_config(&NotyposConfig::default());
        let report = engine.check_files(&[bad, good]);
        assert_eq!(report.files_checked, 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.diagnostics.len(), 1);
        assert!(!report.is_clean());
    }
}
