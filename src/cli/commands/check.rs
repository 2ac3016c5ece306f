//! Check command implementation.
//!
//! The `hostenv check` command verifies that a hostname resolves to an
//! expected environment.

use std::path::{Path, PathBuf};

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{load_registry_for, Command, CommandResult, EXIT_NO_REGISTRY};

/// The check command implementation.
pub struct CheckCommand {
    registry_path: PathBuf,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(registry_path: &Path, args: CheckArgs) -> Self {
        Self {
            registry_path: registry_path.to_path_buf(),
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(registry) = load_registry_for(&self.registry_path, ui)? else {
            return Ok(CommandResult::failure(EXIT_NO_REGISTRY));
        };

        let resolved = match registry.resolver().resolve(&self.args.hostname) {
            Ok(resolved) => resolved,
            Err(e) if e.is_lookup_error() => {
                ui.error(&format!("{}: {}", e.code(), e));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if resolved.is(&self.args.environment) {
            ui.success(&format!(
                "{} resolves to {}",
                self.args.hostname, resolved
            ));
            Ok(CommandResult::success())
        } else {
            ui.error(&format!(
                "{} resolves to {}, expected {}",
                self.args.hostname,
                resolved.environment_name(),
                self.args.environment
            ));
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn check(hostname: &str, environment: &str) -> (CommandResult, MockUI) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hostenv.yml");
        fs::write(
            &path,
            "environments:\n  - name: live\n    hostnames: some.host\n",
        )
        .unwrap();

        let cmd = CheckCommand::new(
            &path,
            CheckArgs {
                hostname: hostname.to_string(),
                environment: environment.to_string(),
            },
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn check_passes_on_expected_environment() {
        let (result, ui) = check("SOME.HOST", "live");
        assert!(result.success);
        assert!(ui.has_success("resolves to live"));
    }

    #[test]
    fn check_fails_on_other_environment() {
        let (result, ui) = check("some.host", "staging");
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("expected staging"));
    }

    #[test]
    fn check_fails_when_nothing_matches() {
        let (result, ui) = check("other.host", "live");
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("ERR_NO_MATCH_FOUND"));
    }
}
