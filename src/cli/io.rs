use std::fmt;

use dialoguer::{theme::ColorfulTheme, Confirm};
use tracing::warn;

use crate::cli::output;
use crate::core::confirm::Confirmer;

pub fn print_info(message: impl fmt::Display) {
    output::info(message);
}

pub fn print_warning(message: impl fmt::Display) {
    output::warning(message);
}

pub fn print_error(message: impl fmt::Display) {
    output::error(message);
}

pub fn print_success(message: impl fmt::Display) {
    output::success(message);
}

pub fn print_hint(message: impl fmt::Display) {
    output::hint(message);
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(theme: &ColorfulTheme, prompt: &str) -> Result<bool, dialoguer::Error> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(false)
        .interact()
}

/// Terminal yes/no dialog. A failed prompt counts as "no".
pub struct DialogConfirmer {
    theme: ColorfulTheme,
}

impl DialogConfirmer {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialogConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmer for DialogConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        match confirm_action(&self.theme, prompt) {
            Ok(answer) => answer,
            Err(err) => {
                warn!(error = %err, "confirmation prompt failed");
                false
            }
        }
    }
}

/// Parses the `POCKET_LEDGER_CONFIRM` answer used in script mode.
pub fn scripted_answer(raw: Option<&str>) -> bool {
    !matches!(
        raw.map(|value| value.trim().to_ascii_lowercase()).as_deref(),
        Some("no" | "n" | "false" | "0")
    )
}
