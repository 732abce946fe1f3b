//! User preferences persisted next to the ledger store.

use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::{
    clock::{self, DEFAULT_TIMESTAMP_FORMAT},
    errors::BudgetError,
    state::DEFAULT_CURRENCY,
};
use crate::utils::{paths, persistence};

pub const MIN_CHART_WIDTH: usize = 20;
pub const MAX_CHART_WIDTH: usize = 60;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Symbol used until the user picks one.
    #[serde(default = "Config::default_currency_value")]
    pub default_currency: String,
    /// chrono format for entry timestamps.
    #[serde(default = "Config::default_timestamp_format")]
    pub timestamp_format: String,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Fixed gauge width; the terminal width is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_width: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_currency: Self::default_currency_value(),
            timestamp_format: Self::default_timestamp_format(),
            ui_color_enabled: Self::default_ui_color_enabled(),
            chart_width: None,
            store_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency_value() -> String {
        DEFAULT_CURRENCY.into()
    }

    pub fn default_timestamp_format() -> String {
        DEFAULT_TIMESTAMP_FORMAT.into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    pub fn resolve_store_dir(&self, base: &Path) -> PathBuf {
        self.store_dir
            .clone()
            .unwrap_or_else(|| paths::store_dir_in(base))
    }

    /// Applies a `config set <key> <value>` request.
    pub fn set_value(&mut self, key: &str, value: &str) -> Result<(), BudgetError> {
        let value = value.trim();
        match key.to_ascii_lowercase().as_str() {
            "currency" | "default-currency" => {
                if value.is_empty() {
                    return Err(BudgetError::Config("currency cannot be empty".into()));
                }
                self.default_currency = value.to_string();
            }
            "timestamp-format" => {
                if value.is_empty() {
                    return Err(BudgetError::Config("timestamp format cannot be empty".into()));
                }
                if !clock::is_valid_format(value) {
                    return Err(BudgetError::Config(format!(
                        "`{value}` is not a valid timestamp format"
                    )));
                }
                self.timestamp_format = value.to_string();
            }
            "color" => {
                self.ui_color_enabled = parse_toggle(value)?;
            }
            "chart-width" => {
                self.chart_width = if value.eq_ignore_ascii_case("auto") {
                    None
                } else {
                    let width = value.parse::<usize>().map_err(|_| {
                        BudgetError::Config(format!("chart width `{value}` is not a number"))
                    })?;
                    Some(width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH))
                };
            }
            other => {
                return Err(BudgetError::Config(format!(
                    "unknown setting `{other}` (currency, timestamp-format, color, chart-width)"
                )))
            }
        }
        Ok(())
    }
}

fn parse_toggle(value: &str) -> Result<bool, BudgetError> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Ok(true),
        "off" | "false" | "no" | "0" => Ok(false),
        other => Err(BudgetError::Config(format!(
            "expected on/off, got `{other}`"
        ))),
    }
}

/// Loads and saves [`Config`] as JSON under the application data directory.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BudgetError> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BudgetError> {
        fs::create_dir_all(&base)?;
        let path = paths::config_file_in(&base);
        Ok(Self { base, path })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            let config: Config = serde_json::from_str(&data).map_err(|err| {
                BudgetError::Config(format!("`{}` is invalid: {err}", self.path.display()))
            })?;
            if !clock::is_valid_format(&config.timestamp_format) {
                return Err(BudgetError::Config(format!(
                    "`{}` has an invalid timestamp format `{}`",
                    self.path.display(),
                    config.timestamp_format
                )));
            }
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), BudgetError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        persistence::write_atomic(&self.path, &json)?;
        Ok(())
    }
}
