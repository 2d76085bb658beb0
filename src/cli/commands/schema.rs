//! The `notypos schema` command prints the configuration JSON Schema.

use crate::config::SchemaGenerator;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The schema command implementation.
#[derive(Default)]
pub struct SchemaCommand;

impl SchemaCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SchemaCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let schema = SchemaGenerator::new().generate();
        let text = serde_json::to_string_pretty(&schema).map_err(anyhow::Error::from)?;
        ui.emit(&text);
        Ok(CommandResult::success())
    }
}
