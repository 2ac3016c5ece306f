//! Resolve command implementation.
//!
//! The `hostenv resolve` command resolves a hostname and prints the
//! environment's merged configuration.

use std::path::{Path, PathBuf};

use crate::cli::args::ResolveArgs;
use crate::environment::detect_hostname;
use crate::error::{HostenvError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{load_registry_for, Command, CommandResult, EXIT_NO_REGISTRY};

/// The resolve command implementation.
pub struct ResolveCommand {
    registry_path: PathBuf,
    args: ResolveArgs,
}

impl ResolveCommand {
    /// Create a new resolve command.
    pub fn new(registry_path: &Path, args: ResolveArgs) -> Self {
        Self {
            registry_path: registry_path.to_path_buf(),
            args,
        }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ResolveArgs {
        &self.args
    }
}

impl Command for ResolveCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(registry) = load_registry_for(&self.registry_path, ui)? else {
            return Ok(CommandResult::failure(EXIT_NO_REGISTRY));
        };

        let detected = detect_hostname(self.args.hostname.as_deref());
        tracing::debug!(
            "Resolving hostname '{}' (from {})",
            detected.hostname,
            detected.source
        );

        let resolved = match registry.resolver().resolve(&detected.hostname) {
            Ok(resolved) => resolved,
            Err(e) if e.is_lookup_error() => {
                ui.error(&format!("{}: {}", e.code(), e));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let json = serde_json::to_string_pretty(&resolved)
                .map_err(|e| HostenvError::Other(e.into()))?;
            ui.message(&json);
        } else {
            ui.success(&format!("{} resolved to {}", resolved.hostname(), resolved));
            let yaml = serde_yaml::to_string(resolved.config())
                .map_err(|e| HostenvError::Other(e.into()))?;
            ui.message(yaml.trim_end());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    const REGISTRY: &str = r#"
default_environment: testing
defaults:
  foo: bar
  baz: quux
environments:
  - name: testing
    hostnames: testing.env
    config:
      baz: buux
  - name: live
    hostnames: some.host
    config:
      baz: b0rx
"#;

    fn setup_registry(content: &str) -> (TempDir, PathBuf) {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("hostenv.yml");
        fs::write(&path, content).unwrap();
        (temp, path)
    }

    fn args(hostname: &str, json: bool) -> ResolveArgs {
        ResolveArgs {
            hostname: Some(hostname.to_string()),
            json,
        }
    }

    #[test]
    fn resolve_prints_environment_and_config() {
        let (_temp, path) = setup_registry(REGISTRY);
        let cmd = ResolveCommand::new(&path, args("some.host", false));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("some.host resolved to live"));
        assert!(ui.has_message("baz: b0rx"));
        assert!(ui.has_message("foo: bar"));
    }

    #[test]
    fn resolve_marks_default_fallback() {
        let (_temp, path) = setup_registry(REGISTRY);
        let cmd = ResolveCommand::new(&path, args("unknown.host", false));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_success("testing (default)"));
        assert!(ui.has_message("baz: buux"));
    }

    #[test]
    fn resolve_json_output() {
        let (_temp, path) = setup_registry(REGISTRY);
        let cmd = ResolveCommand::new(&path, args("some.host", true));
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let value: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(value["environment_name"], "live");
        assert_eq!(value["hostname"], "some.host");
        assert_eq!(value["is_default"], false);
        assert_eq!(value["config"]["baz"], "b0rx");
    }

    #[test]
    fn resolve_without_match_fails() {
        let (_temp, path) = setup_registry("environments:\n  - name: live\n    hostnames: some.host\n");
        let cmd = ResolveCommand::new(&path, args("random.host", false));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("ERR_NO_MATCH_FOUND"));
        assert!(ui.has_error("random.host"));
    }

    #[test]
    fn resolve_without_registry_fails() {
        let temp = TempDir::new().unwrap();
        let cmd = ResolveCommand::new(&temp.path().join("missing.yml"), args("a", false));
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_NO_REGISTRY);
    }

    #[test]
    fn resolve_surfaces_registration_errors() {
        let (_temp, path) = setup_registry(
            "environments:\n  - name: x\n    hostnames: a\n  - name: x\n    hostnames: b\n",
        );
        let cmd = ResolveCommand::new(&path, args("a", false));
        let mut ui = MockUI::new();

        let err = cmd.execute(&mut ui).unwrap_err();
        assert!(matches!(err, HostenvError::DuplicateEnvironment { .. }));
    }
}
