//! List command implementation.
//!
//! The `hostenv list` command shows the registered environments, the
//! hostname rules in precedence order and the default environment.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{load_registry_for, Command, CommandResult, EXIT_NO_REGISTRY};

/// The list command implementation.
pub struct ListCommand {
    registry_path: PathBuf,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(registry_path: &Path) -> Self {
        Self {
            registry_path: registry_path.to_path_buf(),
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(registry) = load_registry_for(&self.registry_path, ui)? else {
            return Ok(CommandResult::failure(EXIT_NO_REGISTRY));
        };

        ui.message(&format!(
            "Default environment: {}",
            registry.default_name().unwrap_or("(none)")
        ));

        ui.message("");
        ui.message("Environments:");
        if registry.environments().is_empty() {
            ui.message("  (none)");
        }
        for env in registry.environments() {
            let marker = if registry.default_name() == Some(env.name()) {
                " (default)"
            } else {
                ""
            };
            ui.message(&format!(
                "  {}{} - {} override(s)",
                env.name(),
                marker,
                env.overrides().len()
            ));
        }

        ui.message("");
        ui.message("Rules (highest precedence first):");
        for (i, rule) in registry.rules().enumerate() {
            ui.message(&format!("  {}. {}", i + 1, rule));
            if !registry.contains_environment(rule.environment_name()) {
                ui.warning(&format!(
                    "Rule {} targets unregistered environment '{}'",
                    i + 1,
                    rule.environment_name()
                ));
            }
        }

        if let Some(name) = registry.default_name() {
            if !registry.contains_environment(name) {
                ui.warning(&format!("Default environment '{}' is not registered", name));
            }
        }

        Ok(CommandResult::success())
    }
}
