//! User-facing output for the `hostenv` binary.
//!
//! This module provides:
//! - [`UserInterface`] trait for output abstraction
//! - [`ConsoleUI`] writing to stdout/stderr
//! - [`MockUI`] capturing output for tests
//!
//! # Example
//!
//! ```
//! use hostenv::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.success("Resolved live");
//! assert!(ui.has_success("live"));
//! ```

pub mod console;
pub mod mock;
pub mod output;

pub use console::ConsoleUI;
pub use mock::MockUI;
pub use output::OutputMode;

/// Trait for user-facing output.
///
/// This trait allows capturing output in tests.
pub trait UserInterface {
    /// Current output mode.
    fn output_mode(&self) -> OutputMode;

    /// Show a plain message.
    fn message(&mut self, msg: &str);

    /// Show a success message.
    fn success(&mut self, msg: &str);

    /// Show a warning.
    fn warning(&mut self, msg: &str);

    /// Show an error. Always shown, regardless of output mode.
    fn error(&mut self, msg: &str);
}

/// Create the UI for the given output mode.
pub fn create_ui(mode: OutputMode) -> Box<dyn UserInterface> {
    Box::new(ConsoleUI::new(mode))
}
