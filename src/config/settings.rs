//! User settings for fiscal-cli
//!
//! Manages user preferences: currency symbol, ledger date format, and
//! the income conversion rate.

use serde::{Deserialize, Serialize};

use super::paths::FiscalPaths;
use crate::error::{FiscalError, FiscalResult};
use crate::models::DEFAULT_DATE_FORMAT;
use crate::services::DEFAULT_CONVERSION_RATE;

/// User settings for fiscal-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// strftime pattern for ledger dates
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Multiplier converting income into reporting currency
    #[serde(default = "default_conversion_rate")]
    pub conversion_rate: i64,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

fn default_conversion_rate() -> i64 {
    DEFAULT_CONVERSION_RATE
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            date_format: default_date_format(),
            conversion_rate: default_conversion_rate(),
        }
    }
}

impl Settings {
    /// Load settings, writing defaults when no file exists yet
    pub fn load_or_create(paths: &FiscalPaths) -> FiscalResult<Self> {
        let path = paths.settings_file();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)?;
            let settings: Settings = serde_json::from_str(&contents)?;
            settings.validate()?;
            Ok(settings)
        } else {
            let settings = Self::default();
            settings.save(paths)?;
            Ok(settings)
        }
    }

    /// Persist settings as JSON
    pub fn save(&self, paths: &FiscalPaths) -> FiscalResult<()> {
        paths.ensure_directories()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(paths.settings_file(), json)?;
        Ok(())
    }

    /// Reject unusable values
    pub fn validate(&self) -> FiscalResult<()> {
        if self.conversion_rate <= 0 {
            return Err(FiscalError::Validation(format!(
                "conversion rate must be positive, got {}",
                self.conversion_rate
            )));
        }
        if self.date_format.trim().is_empty() {
            return Err(FiscalError::Validation(
                "date format must not be empty".into(),
            ));
        }
        Ok(())
    }
}
