pub mod commands;
pub mod core;
pub mod help;
pub mod io;
pub mod output;
pub mod registry;
mod shell;
pub mod shell_context;
pub mod ui;

pub use self::core::{CliError, CommandError, CommandResult};
pub use shell::run_cli;
pub use shell_context::{CliMode, ShellContext};
