//! Core CLI loop plumbing: dispatch, error reporting, and shell context helpers.

use std::io;

use rustyline::error::ReadlineError;
use strsim::levenshtein;

use crate::{
    config::ConfigManager,
    core::errors::BankError,
    core::services::ServiceError,
    errors::LedgerError,
    ledger::Session,
};

pub use crate::core::errors::CliError;
pub use crate::cli::shell_context::{CliMode, ShellContext};

use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::CommandEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let context = ShellContext::demo(mode, config_manager, config);
        context.apply_output_preferences();
        Ok(context)
    }

    /// Script runs and the `plain` theme print without colour.
    pub(crate) fn apply_output_preferences(&self) {
        let plain_theme = self.config.theme.as_deref() == Some("plain");
        output::set_preferences(OutputPreferences {
            plain_mode: self.mode == CliMode::Script || plain_theme,
        });
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        match &self.session {
            Some(session) => format!("bank[{}]> ", session.email()),
            None => "bank> ".to_string(),
        }
    }

    /// Returns a copy of the active session so handlers can borrow the bank
    /// mutably alongside it.
    pub(crate) fn require_session(&self) -> Result<Session, CommandError> {
        self.session.clone().ok_or(CommandError::NotLoggedIn)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(entry) = self.registry.get(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        if entry.requires_session && !self.is_logged_in() {
            return Err(CommandError::NotLoggedIn);
        }
        let handler = entry.handler;
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|key| (levenshtein(key, &input.to_lowercase()), key))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        cli_io::confirm_action(&self.theme, "Exit shell?", true).map_err(CliError::from)
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => {}
            CommandError::InvalidArguments(message) => {
                cli_io::print_error(message);
                cli_io::print_hint("Use `help <command>` for usage details.");
            }
            CommandError::NotLoggedIn => {
                cli_io::print_warning(CommandError::NotLoggedIn);
            }
            CommandError::Service(ServiceError::Ledger(rejected)) => {
                cli_io::print_warning(rejected);
            }
            other => cli_io::print_error(other),
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        crate::cli::shell::handle_line(self, line)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("Not logged in. Use `login <email> <pin>` first.")]
    NotLoggedIn,
    #[error("{0}")]
    InvalidArguments(String),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Core(#[from] BankError),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<LedgerError> for CommandError {
    fn from(err: LedgerError) -> Self {
        CommandError::Service(ServiceError::Ledger(err))
    }
}

impl CommandError {
    pub(crate) fn usage(entry_usage: &str) -> Self {
        CommandError::InvalidArguments(format!("Usage: {}", entry_usage))
    }
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Command(err.to_string())
    }
}

impl From<ReadlineError> for CliError {
    fn from(err: ReadlineError) -> Self {
        CliError::Command(err.to_string())
    }
}

#[cfg(test)]
pub(crate) fn test_context() -> (ShellContext, tempfile::TempDir) {
    let home = tempfile::tempdir().expect("temp home");
    let manager = ConfigManager::with_base_dir(home.path().to_path_buf()).expect("config manager");
    let config = manager.load().expect("default config");
    (ShellContext::demo(CliMode::Script, manager, config), home)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_commands_require_login() {
        let (mut context, _home) = test_context();
        let err = context.process_line("deposit 100 Someone Rent").unwrap_err();
        assert!(matches!(err, CommandError::NotLoggedIn));
    }

    #[test]
    fn unknown_commands_do_not_stop_the_loop() {
        let (mut context, _home) = test_context();
        assert_eq!(context.process_line("depost 1").unwrap(), LoopControl::Continue);
    }

    #[test]
    fn exit_command_ends_the_loop() {
        let (mut context, _home) = test_context();
        assert_eq!(context.process_line("exit").unwrap(), LoopControl::Exit);
        assert!(!context.running);
    }

    #[test]
    fn script_mode_prints_plain_output() {
        let (context, _home) = test_context();
        context.apply_output_preferences();
        assert!(output::current_preferences().plain_mode);
    }

    #[test]
    fn prompt_shows_logged_in_email() {
        let (mut context, _home) = test_context();
        assert_eq!(context.prompt(), "bank> ");
        context.process_line("login dxngrg2058@gmail.com 2222").unwrap();
        assert_eq!(context.prompt(), "bank[dxngrg2058@gmail.com]> ");
    }
}
