//! Validator configuration.

use chrono::NaiveDate;
use thiserror::Error;

/// Environment variable pinning the current date (`YYYY-MM-DD`).
pub const ENV_REFERENCE_DATE: &str = "DATAID_REFERENCE_DATE";

/// Environment variable requiring an uppercase `X` check character.
pub const ENV_STRICT_CHECKSUM: &str = "DATAID_STRICT_CHECKSUM";

/// Errors loading configuration from the environment.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{var} must be a date in YYYY-MM-DD form, got '{value}'")]
    InvalidDate { var: &'static str, value: String },
}

/// Validator configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Date treated as "today" for birth-year plausibility and age.
    /// `None` reads the local calendar date at call time.
    pub reference_date: Option<NaiveDate>,

    /// Reject a lowercase `x` check character.
    pub strict_checksum_case: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let reference_date = std::env::var(ENV_REFERENCE_DATE)
            .ok()
            .map(|v| {
                NaiveDate::parse_from_str(v.trim(), "%Y-%m-%d").map_err(|_| {
                    ConfigError::InvalidDate {
                        var: ENV_REFERENCE_DATE,
                        value: v.clone(),
                    }
                })
            })
            .transpose()?;

        let strict_checksum_case = std::env::var(ENV_STRICT_CHECKSUM)
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Ok(Self {
            reference_date,
            strict_checksum_case,
        })
    }

    /// Pins the current date.
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    #[must_use]
    pub fn with_strict_checksum_case(mut self, strict: bool) -> Self {
        self.strict_checksum_case = strict;
        self
    }
}
