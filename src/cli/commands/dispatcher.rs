//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands};
use crate::config::load_registry;
use crate::environment::EnvironmentRegistry;
use crate::error::{HostenvError, Result};
use crate::ui::UserInterface;

/// Exit code for a missing registry file.
pub const EXIT_NO_REGISTRY: i32 = 2;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    registry_path: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher reading the given registry file.
    pub fn new(registry_path: PathBuf) -> Self {
        Self { registry_path }
    }

    /// Get the registry file path.
    pub fn registry_path(&self) -> &Path {
        &self.registry_path
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Commands::Resolve(args) => {
                let cmd = super::resolve::ResolveCommand::new(&self.registry_path, args.clone());
                cmd.execute(ui)
            }
            Commands::List => {
                let cmd = super::list::ListCommand::new(&self.registry_path);
                cmd.execute(ui)
            }
            Commands::Check(args) => {
                let cmd = super::check::CheckCommand::new(&self.registry_path, args.clone());
                cmd.execute(ui)
            }
        }
    }
}

/// Load the registry for a command.
///
/// A missing file is reported on `ui` and yields `Ok(None)`; the caller
/// should then fail with [`EXIT_NO_REGISTRY`].
pub(crate) fn load_registry_for(
    path: &Path,
    ui: &mut dyn UserInterface,
) -> Result<Option<EnvironmentRegistry>> {
    match load_registry(path) {
        Ok(registry) => Ok(Some(registry)),
        Err(HostenvError::ConfigNotFound { path }) => {
            ui.error(&format!("No registry file found at {}", path.display()));
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
