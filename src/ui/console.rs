//! Console UI.

use super::{OutputMode, UserInterface};

/// UI that prints messages to stdout and problems to stderr.
pub struct ConsoleUI {
    mode: OutputMode,
}

impl ConsoleUI {
    /// Create a new console UI.
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl UserInterface for ConsoleUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        // Command payloads (resolved config, listings) are printed even in
        // quiet mode.
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            println!("✓ {}", msg);
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_status() {
            eprintln!("⚠ {}", msg);
        }
    }

    fn error(&mut self, msg: &str) {
        eprintln!("✗ {}", msg);
    }
}
