// src/output/switch.rs

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared on/off state for ANSI rendering.
///
/// Clones share the same flag, so a command that turns styling off at startup
/// affects every compiler and printer holding a handle. Set it before any
/// concurrent writers start.
#[derive(Debug, Clone)]
pub struct AnsiSwitch(Arc<AtomicBool>);

impl AnsiSwitch {
    /// A switch starting in the given state.
    pub fn new(enabled: bool) -> Self {
        Self(Arc::new(AtomicBool::new(enabled)))
    }

    /// Initial state from the environment (`NO_COLOR`, `CLICOLOR`,
    /// `CLICOLOR_FORCE` and whether stdout is a terminal).
    pub fn from_env() -> Self {
        let enabled = colored::control::SHOULD_COLORIZE.should_colorize();
        log::debug!("ANSI rendering {} by environment", if enabled { "enabled" } else { "disabled" });
        Self::new(enabled)
    }

    /// Current state.
    pub fn is_enabled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }

    /// Turns rendering on or off for every holder of this switch.
    pub fn set(&self, enabled: bool) {
        self.0.store(enabled, Ordering::Relaxed);
    }

    /// Same as `set(true)`.
    pub fn enable(&self) {
        self.set(true);
    }

    /// Same as `set(false)`.
    pub fn disable(&self) {
        self.set(false);
    }
}

impl Default for AnsiSwitch {
    fn default() -> Self {
        Self::new(true)
    }
}
