//! Verbosity-gated progress logging.
//!
//! Each miner owns a [`MiningLogger`] built from its parameters; there is no
//! process-wide logging state.

use serde::{Deserialize, Serialize};

/// How much a miner reports while it runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verbosity {
    #[default]
    Silent,
    Warning,
    Info,
    Debug,
}

/// Writes progress lines for one mining call to stderr.
#[derive(Debug, Clone)]
pub struct MiningLogger {
    verbosity: Verbosity,
    component: &'static str,
}

impl MiningLogger {
    pub fn new(component: &'static str, verbosity: Verbosity) -> Self {
        Self {
            verbosity,
            component,
        }
    }

    pub fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    pub fn enabled(&self, level: Verbosity) -> bool {
        level != Verbosity::Silent && self.verbosity >= level
    }

    pub fn warn(&self, message: &str) {
        self.emit(Verbosity::Warning, "WARN", message);
    }

    pub fn info(&self, message: &str) {
        self.emit(Verbosity::Info, "INFO", message);
    }

    /// Logs a message built lazily, so hot paths pay nothing when silent.
    pub fn debug<F: FnOnce() -> String>(&self, message: F) {
        if self.enabled(Verbosity::Debug) {
            eprintln!("[{}] DEBUG {}", self.component, message());
        }
    }

    fn emit(&self, level: Verbosity, tag: &str, message: &str) {
        if self.enabled(level) {
            eprintln!("[{}] {} {}", self.component, tag, message);
        }
    }
}
