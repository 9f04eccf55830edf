use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::config::CONFIG_KEYS;

const CONFIG_USAGE: &str = "config [show|path|set <key> <value>]";

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "View and change display preferences",
        CONFIG_USAGE,
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args {
        [] => show_config(context),
        [sub] if sub.eq_ignore_ascii_case("show") => show_config(context),
        [sub] if sub.eq_ignore_ascii_case("path") => {
            io::print_info(context.config_manager.path().display());
            Ok(())
        }
        [sub, key, value @ ..] if sub.eq_ignore_ascii_case("set") && !value.is_empty() => {
            set_config_value(context, &key.to_lowercase(), &value.join(" "))
        }
        _ => Err(CommandError::usage(CONFIG_USAGE)),
    }
}

fn show_config(context: &ShellContext) -> CommandResult {
    output_section("Configuration");
    for key in CONFIG_KEYS {
        let value = context.config.get(key).unwrap_or_default();
        io::print_info(format!("  {:<15}: {}", key, value));
    }
    Ok(())
}

/// Applies the change to a copy first so a failed save keeps the old
/// settings in effect.
fn set_config_value(context: &mut ShellContext, key: &str, value: &str) -> CommandResult {
    let mut updated = context.config.clone();
    updated.set(key, value)?;
    context.config_manager.save(&updated)?;
    context.config = updated;
    context.apply_output_preferences();
    io::print_success(format!(
        "Set {} to {}.",
        key,
        context.config.get(key).unwrap_or_default()
    ));
    Ok(())
}
