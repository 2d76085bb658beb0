//! Lint command implementation.
//!
//! The `notypos lint` command checks component modules for misspelled
//! declarations using the lint rule system.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::cli::args::LintArgs;
use crate::config::{load_config, NotyposConfig};
use crate::error::{NotyposError, Result};
use crate::lint::{
    HumanFormatter, JsonFormatter, LintDiagnostic, LintEngine, LintFormatter, LintReport,
    OutputFormat, SarifFormatter, Severity,
};
use crate::sources::collect_sources;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The lint command implementation.
pub struct LintCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: LintArgs,
}

impl LintCommand {
    /// Create a new lint command.
    pub fn new(project_root: &Path, args: LintArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: None,
            args,
        }
    }

    /// Use an explicit configuration file instead of discovery.
    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &LintArgs {
        &self.args
    }

    fn targets(&self) -> Vec<PathBuf> {
        if self.args.paths.is_empty() {
            vec![self.project_root.clone()]
        } else {
            self.args.paths.clone()
        }
    }

    /// Format diagnostics using the appropriate formatter.
    fn format_output(
        &self,
        engine: &LintEngine,
        diagnostics: &[LintDiagnostic],
        use_color: bool,
    ) -> Result<String> {
        let mut output = Vec::new();

        match self.args.format {
            OutputFormat::Json => JsonFormatter::new().format(diagnostics, &mut output)?,
            OutputFormat::Sarif => {
                let formatter = engine.registry().sorted().into_iter().fold(
                    SarifFormatter::new("notypos", env!("CARGO_PKG_VERSION")),
                    |formatter, rule| {
                        formatter.with_rule_description(rule.id().0, rule.description())
                    },
                );
                formatter.format(diagnostics, &mut output)?
            }
            OutputFormat::Human => HumanFormatter::new(use_color).format(diagnostics, &mut output)?,
        }

        Ok(String::from_utf8_lossy(&output).into_owned())
    }

    fn exit_code(&self, report: &LintReport) -> i32 {
        let has_errors = report
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error);
        let has_warnings = report
            .diagnostics
            .iter()
            .any(|d| d.severity == Severity::Warning);

        if has_errors || !report.failures.is_empty() || (self.args.strict && has_warnings) {
            1
        } else {
            0
        }
    }

    fn load_config(&self, ui: &mut dyn UserInterface) -> Result<Option<NotyposConfig>> {
        match load_config(&self.project_root, self.config_path.as_deref()) {
            Ok(config) => Ok(Some(config)),
            Err(e @ NotyposError::ConfigParseError { .. })
            | Err(e @ NotyposError::ConfigNotFound { .. }) => {
                ui.error(&e.to_string());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl Command for LintCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(config) = self.load_config(ui)? else {
            return Ok(CommandResult::failure(1));
        };

        let targets = self.targets();
        let files = match collect_sources(&targets, &config) {
            Ok(files) => files,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
        };
        if files.is_empty() {
            ui.error(&NotyposError::NoSourceFiles { paths: targets }.to_string());
            return Ok(CommandResult::failure(2));
        }

        if ui.output_mode().shows_detail() {
            ui.message(&format!("Checking {} file(s)", files.len()));
        }
        debug!(files = files.len(), "Linting");

        let engine = LintEngine::from_config(&config);
        let report = engine.check_files(&files);

        for failure in &report.failures {
            ui.error(&failure.to_string());
        }

        if self.args.format == OutputFormat::Human && report.diagnostics.is_empty() {
            if report.failures.is_empty() {
                ui.success(&format!(
                    "No typos found in {} file(s)",
                    report.files_checked
                ));
            }
        } else {
            let output = self.format_output(&engine, &report.diagnostics, ui.use_color())?;
            ui.emit(&output);
        }

        match self.exit_code(&report) {
            0 => Ok(CommandResult::success()),
            code => Ok(CommandResult::failure(code)),
        }
    }
}
