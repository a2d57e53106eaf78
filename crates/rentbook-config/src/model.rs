use std::path::PathBuf;

use rentbook_core::DatePolicy;
use serde::{Deserialize, Serialize};

use crate::ConfigError;

const DEFAULT_DATA_FOLDER: &str = "Rentbook";

/// Stores user-configurable report preferences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_locale")]
    pub locale: String,
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub date_policy: DatePolicy,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Directory holding the exported collections. Defaults to `~/Documents/Rentbook`.
    pub data_dir: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    /// Report year used when none is given on the command line.
    pub fiscal_year: Option<i32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            currency: Self::default_currency(),
            date_policy: DatePolicy::default(),
            data_dir: None,
            fiscal_year: None,
        }
    }
}

impl Config {
    pub fn default_locale() -> String {
        "ca-ES".into()
    }

    pub fn default_currency() -> String {
        "EUR".into()
    }

    pub fn resolve_data_dir(&self) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }

        let base = dirs::document_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(DEFAULT_DATA_FOLDER)
    }

    /// Rejects values no report could be produced with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.currency.trim().is_empty() {
            return Err(ConfigError::Invalid("currency must not be empty".into()));
        }
        if let Some(year) = self.fiscal_year {
            if !(1900..=9999).contains(&year) {
                return Err(ConfigError::Invalid(format!(
                    "fiscal_year {} is out of range",
                    year
                )));
            }
        }
        Ok(())
    }
}
