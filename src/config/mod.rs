use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::core::{
    errors::BankError,
    utils::{ensure_dir, PathResolver},
};

const TMP_SUFFIX: &str = "tmp";

/// Keys accepted by [`Config::set`], in display order.
pub const CONFIG_KEYS: [&str; 5] = [
    "locale",
    "currency_label",
    "balance_label",
    "recent_days",
    "theme",
];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub locale: String,
    /// Prefix printed before every amount in movement lists.
    #[serde(default = "Config::default_currency_label")]
    pub currency_label: String,
    #[serde(default = "Config::default_balance_label")]
    pub balance_label: String,
    /// Movements newer than this many days show as `N days ago`.
    #[serde(default = "Config::default_recent_days")]
    pub recent_days: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en-US".into(),
            currency_label: Self::default_currency_label(),
            balance_label: Self::default_balance_label(),
            recent_days: Self::default_recent_days(),
            theme: None,
        }
    }
}

impl Config {
    fn default_currency_label() -> String {
        "Nrs.".into()
    }

    fn default_balance_label() -> String {
        "Rs:".into()
    }

    fn default_recent_days() -> u32 {
        7
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "locale" => Some(self.locale.clone()),
            "currency_label" => Some(self.currency_label.clone()),
            "balance_label" => Some(self.balance_label.clone()),
            "recent_days" => Some(self.recent_days.to_string()),
            "theme" => Some(self.theme.clone().unwrap_or_else(|| "default".into())),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), BankError> {
        let value = value.trim();
        match key {
            "locale" => self.locale = non_empty(key, value)?,
            "currency_label" => self.currency_label = non_empty(key, value)?,
            "balance_label" => self.balance_label = non_empty(key, value)?,
            "recent_days" => {
                self.recent_days = value.parse().map_err(|_| {
                    BankError::InvalidInput(format!("`{}` expects a whole number of days", key))
                })?
            }
            "theme" => {
                self.theme = match value {
                    "" | "default" | "none" => None,
                    other => Some(other.to_string()),
                }
            }
            other => {
                return Err(BankError::InvalidInput(format!(
                    "unknown config key `{}` (expected one of: {})",
                    other,
                    CONFIG_KEYS.join(", ")
                )))
            }
        }
        Ok(())
    }
}

fn non_empty(key: &str, value: &str) -> Result<String, BankError> {
    if value.is_empty() {
        Err(BankError::InvalidInput(format!("`{}` cannot be empty", key)))
    } else {
        Ok(value.to_string())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BankError> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BankError> {
        ensure_dir(&base)?;
        ensure_dir(&PathResolver::config_dir_in(&base))?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, BankError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BankError> {
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_all(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_all(path: &Path, data: &str) -> Result<(), BankError> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
