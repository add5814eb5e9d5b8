use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Calendar patterns tried, in order, after RFC 3339.
pub const DEFAULT_CALENDAR_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d",
];

///
/// ConfigError
///

#[derive(Debug, ThisError)]
pub enum ConfigError {
    #[error("invalid coercion config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid calendar format '{format}'")]
    CalendarFormat { format: String },
}

///
/// CoercionConfig
///
/// Engine knobs. None of them touch the contract constants.
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CoercionConfig {
    /// Check every produced value against its declared type.
    pub verify_results: bool,

    /// `strftime` patterns for calendar text; empty selects
    /// [`DEFAULT_CALENDAR_FORMATS`].
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub calendar_formats: Vec<String>,
}

impl CoercionConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            verify_results: cfg!(debug_assertions),
            calendar_formats: Vec::new(),
        }
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    /// Reject patterns chrono cannot interpret.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for format in &self.calendar_formats {
            let broken = StrftimeItems::new(format).any(|item| matches!(item, Item::Error));
            if broken || format.is_empty() {
                return Err(ConfigError::CalendarFormat {
                    format: format.clone(),
                });
            }
        }

        Ok(())
    }

    /// Effective calendar patterns, in trial order.
    pub fn calendar_formats(&self) -> impl Iterator<Item = &str> {
        let custom = self.calendar_formats.iter().map(String::as_str);
        let defaults = DEFAULT_CALENDAR_FORMATS
            .iter()
            .copied()
            .filter(|_| self.calendar_formats.is_empty());

        custom.chain(defaults)
    }
}

impl Default for CoercionConfig {
    fn default() -> Self {
        Self::new()
    }
}

///
/// TESTS
///
