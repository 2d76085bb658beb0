//! The `notypos rules` command lists the registered rules.

use std::path::{Path, PathBuf};

use crate::config::load_config;
use crate::error::Result;
use crate::lint::RuleRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(project_root: &Path, config_path: Option<PathBuf>) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
        }
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = load_config(&self.project_root, self.config_path.as_deref())?;
        let registry = RuleRegistry::from_config(&config);

        ui.show_header("Rules");
        let width = registry
            .iter()
            .map(|rule| rule.id().0.len())
            .max()
            .unwrap_or(0);
        for rule in registry.sorted() {
            ui.emit(&format!(
                "{:<width$}  {:<7}  {}",
                rule.id(),
                rule.default_severity().to_string(),
                rule.description(),
                width = width
            ));
        }
        Ok(CommandResult::success())
    }
}
