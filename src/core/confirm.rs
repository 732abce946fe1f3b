//! Yes/no gate in front of destructive or overwriting actions.

use std::collections::VecDeque;

pub const REMOVE_TRANSACTION_PROMPT: &str = "Remove this transaction?";
pub const OVERWRITE_BUDGET_PROMPT: &str = "Budget already exists. Update it?";

/// Asks the user to approve an action. `false` means "leave things as they are".
pub trait Confirmer {
    fn confirm(&mut self, prompt: &str) -> bool;
}

/// Answers every prompt the same way.
#[derive(Debug, Clone, Copy)]
pub struct PresetConfirmer {
    pub answer: bool,
}

impl PresetConfirmer {
    pub fn accept() -> Self {
        Self { answer: true }
    }

    pub fn decline() -> Self {
        Self { answer: false }
    }
}

impl Confirmer for PresetConfirmer {
    fn confirm(&mut self, _prompt: &str) -> bool {
        self.answer
    }
}

/// Replays queued answers and records every prompt it was shown.
/// Once the queue is empty it declines.
#[derive(Debug, Default)]
pub struct ScriptedConfirmer {
    answers: VecDeque<bool>,
    pub prompts: Vec<String>,
}

impl ScriptedConfirmer {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            prompts: Vec::new(),
        }
    }

    pub fn was_prompted(&self) -> bool {
        !self.prompts.is_empty()
    }
}

impl Confirmer for ScriptedConfirmer {
    fn confirm(&mut self, prompt: &str) -> bool {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
