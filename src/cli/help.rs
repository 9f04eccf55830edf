use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    output_section("Available commands");
    for entry in registry.list() {
        let marker = if entry.requires_session { "*" } else { " " };
        io::print_info(format!("  {:<10}{} {}", entry.name, marker, entry.description));
    }
    io::print_info("Commands marked * need a signed-in account.");
    io::print_info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    output_section(format!("Help: {}", entry.name));
    io::print_info(format!("  Description: {}", entry.description));
    io::print_info(format!("  Usage: {}", entry.usage));
    if entry.requires_session {
        io::print_info("  Requires: login");
    }
}
