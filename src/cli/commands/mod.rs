pub mod budget;
pub mod config;
pub mod currency;
pub mod month;
pub mod system;
pub mod tag;
pub mod transaction;

use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(month::definitions());
    commands.extend(transaction::definitions());
    commands.extend(budget::definitions());
    commands.extend(currency::definitions());
    commands.extend(tag::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}
