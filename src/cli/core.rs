//! Command dispatch and error reporting for the shell.

use std::io;

use crate::cli::io as cli_io;
use crate::cli::shell_context::{CliMode, ShellContext};
use crate::core::errors::BudgetError;
use crate::core::services::ServiceError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Failures that end the shell session.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] BudgetError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("line editor failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

impl ShellContext {
    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            match handler(self, args) {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));
        if let Some(best) = self.registry.suggest(input) {
            cli_io::print_info(format!("Suggestion: `{}`?", best));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::Service(ServiceError::IndexOutOfRange { index, len }) => {
                cli_io::print_error(format!(
                    "There is no entry #{index}; this month has {len}."
                ));
                cli_io::print_hint("Run `show` to see entry numbers.");
            }
            other => cli_io::print_error(other),
        }
    }

    pub(crate) fn confirm_exit(&mut self) -> bool {
        if self.mode == CliMode::Script {
            return true;
        }
        self.confirmer.confirm("Exit shell?")
    }

    /// Turns an unsaved-but-applied change into a warning; every other
    /// service error aborts the command.
    pub(crate) fn absorb_unpersisted(&self, err: ServiceError) -> CommandResult {
        match err {
            ServiceError::Unpersisted(_) => {
                cli_io::print_warning(&err);
                cli_io::print_hint("Durability is not guaranteed until the next successful save.");
                Ok(())
            }
            other => Err(other.into()),
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => return Err(CommandError::InvalidArguments(err.to_string())),
        };
        let Some((first, rest)) = tokens.split_first() else {
            return Ok(LoopControl::Continue);
        };
        let args: Vec<&str> = rest.iter().map(String::as_str).collect();
        self.dispatch(&first.to_lowercase(), first, &args)
    }
}
