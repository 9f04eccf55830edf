pub mod config;
pub mod loans;
pub mod movements;
pub mod session;
pub mod system;
pub mod transaction;

use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(session::definitions());
    commands.extend(transaction::definitions());
    commands.extend(movements::definitions());
    commands.extend(loans::definitions());
    commands.extend(config::definitions());
    commands.extend(system::definitions());
    commands
}

pub fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

/// Joins the trailing words of a command into one free-text field.
pub(crate) fn join_rest(args: &[&str]) -> String {
    args.join(" ").trim().to_string()
}
