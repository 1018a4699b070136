//! User settings for housesplit
//!
//! Manages display preferences and the limits applied when validating new
//! expenses and settlements.

use serde::{Deserialize, Serialize};

use super::paths::HouseholdPaths;
use crate::error::HouseholdError;
use crate::models::Money;

/// User settings for housesplit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when formatting amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Date format preference (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Largest accepted expense or settlement amount
    #[serde(default = "default_max_amount")]
    pub max_amount: Money,

    /// Maximum length of an expense description
    #[serde(default = "default_max_text_len")]
    pub max_description_len: usize,

    /// Maximum length of a settlement note
    #[serde(default = "default_max_text_len")]
    pub max_note_len: usize,

    /// Default tracing filter when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

fn default_max_amount() -> Money {
    Money::from_dollars_cents(999_999, 0)
}

fn default_max_text_len() -> usize {
    200
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            max_amount: default_max_amount(),
            max_description_len: default_max_text_len(),
            max_note_len: default_max_text_len(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &HouseholdPaths) -> Result<Self, HouseholdError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                HouseholdError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                HouseholdError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &HouseholdPaths) -> Result<(), HouseholdError> {
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            HouseholdError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(&settings_path, contents).map_err(|e| {
            HouseholdError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Format an amount with the configured currency symbol
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}
