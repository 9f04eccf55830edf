use dialoguer::theme::ColorfulTheme;

use crate::{
    config::{Config, ConfigManager},
    ledger::{sample_bank, Bank, Session},
};

use super::{commands, registry::CommandRegistry, views::SortOrder};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Everything a command handler can see. The logged-in account is carried
/// as an explicit [`Session`], never looked up implicitly.
pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub bank: Bank,
    pub session: Option<Session>,
    pub sort_order: SortOrder,
    pub theme: ColorfulTheme,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub running: bool,
}

impl ShellContext {
    pub fn with_parts(mode: CliMode, bank: Bank, config_manager: ConfigManager, config: Config) -> Self {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);
        Self {
            mode,
            registry,
            bank,
            session: None,
            sort_order: SortOrder::default(),
            theme: ColorfulTheme::default(),
            config_manager,
            config,
            running: true,
        }
    }

    pub(crate) fn demo(mode: CliMode, config_manager: ConfigManager, config: Config) -> Self {
        Self::with_parts(mode, sample_bank(), config_manager, config)
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.is_some()
    }
}
