use std::fmt::Write;

use chrono::{
    format::{Item, StrftimeItems},
    DateTime, Local,
};

/// en-US style `toLocaleString` rendering, e.g. `3/15/2026, 9:03:12 AM`.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Source of human-readable creation stamps for new entries.
pub trait Clock {
    fn timestamp(&self) -> String;
}

/// Local wall clock rendered with a chrono format string.
#[derive(Debug, Clone)]
pub struct SystemClock {
    format: String,
}

impl SystemClock {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }

    /// Falls back to [`DEFAULT_TIMESTAMP_FORMAT`] if `format` cannot render.
    pub fn render(&self, at: DateTime<Local>) -> String {
        let mut out = String::new();
        if write!(out, "{}", at.format(&self.format)).is_ok() {
            return out;
        }
        at.format(DEFAULT_TIMESTAMP_FORMAT).to_string()
    }
}

/// True when every specifier in `format` is one chrono understands.
pub fn is_valid_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTAMP_FORMAT)
    }
}

impl Clock for SystemClock {
    fn timestamp(&self) -> String {
        self.render(Local::now())
    }
}

/// Always returns the same stamp.
#[derive(Debug, Clone)]
pub struct FixedClock(pub String);

impl Clock for FixedClock {
    fn timestamp(&self) -> String {
        self.0.clone()
    }
}
