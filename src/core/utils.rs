use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::core::errors::BankError;

const DEFAULT_DIR_NAME: &str = ".bank_core";
const CONFIG_DIR: &str = "config";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the application home directory.
pub const HOME_ENV: &str = "BANK_CORE_HOME";

pub struct PathResolver;

impl PathResolver {
    /// Application data directory, `$BANK_CORE_HOME` or `~/.bank_core`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn config_dir_in(base: &Path) -> PathBuf {
        base.join(CONFIG_DIR)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        Self::config_dir_in(base).join(CONFIG_FILE)
    }
}

pub fn ensure_dir(path: &Path) -> Result<(), BankError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
