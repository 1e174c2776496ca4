//! Settings, read from an optional TOML file.
//!
//! ```toml
//! language = "en"          # "lt" (default) or "en"
//! lookahead_years = 5      # years pre-built for business-day projection
//! max_business_days = 5000 # optional cap on business-day projections
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use wc_calendars::Language;
use wc_core::ensure;
use wc_core::errors::{Error, Result};

/// Settings for a [`Workcal`](crate::Workcal) instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Language of holiday names.
    #[serde(default)]
    pub language: Language,

    /// Number of years, starting with the start date's year, whose holidays
    /// are built up front for a business-day projection. Later years are
    /// added on demand.
    #[serde(default = "default_lookahead_years")]
    pub lookahead_years: u16,

    /// Largest business-day count accepted by
    /// [`Workcal::project_business_period`](crate::Workcal::project_business_period).
    /// `None` means unbounded.
    #[serde(default)]
    pub max_business_days: Option<u32>,
}

fn default_lookahead_years() -> u16 {
    5
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            lookahead_years: default_lookahead_years(),
            max_business_days: None,
        }
    }
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| Error::Config(format!("invalid settings: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.lookahead_years >= 1,
            Error::Config("lookahead_years must be >= 1".into())
        );
        ensure!(
            self.max_business_days != Some(0),
            Error::Config("max_business_days must be >= 1 when set".into())
        );
        Ok(())
    }
}
