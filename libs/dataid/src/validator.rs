//! Validation and extraction entry points.
//!
//! [`Validator`] carries the [`Config`]; the free functions use
//! `Validator::default()`, which reads the local calendar date at call time.
//! Every function rejects empty or blank input with
//! [`DataIdError::InvalidArgument`]. The ID card extraction functions
//! return [`DataIdError::InvalidIdentifier`] for a number that fails
//! validation, while [`check_identity_card`] returns `false`.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::config::Config;
use crate::error::{DataIdError, Result};
use crate::id_card::{mask, IdCard};
use crate::kind::IdentifierKind;
use crate::types::{Email, PhoneNumber, PlateNumber};

/// Validates identifiers under a fixed configuration.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: Config,
}

impl Validator {
    /// Create a validator with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with custom configuration.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The reference date, or the local calendar date when none is pinned.
    pub fn today(&self) -> NaiveDate {
        self.config
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Parses and validates an ID card number.
    pub fn id_card(&self, id_card: &str) -> Result<IdCard> {
        if id_card.trim().is_empty() {
            return Err(DataIdError::empty("id_card"));
        }

        IdCard::validate(id_card, self.today(), self.config.strict_checksum_case).map_err(
            |defect| {
                debug!(id_card = %mask(id_card), %defect, "rejected id card number");
                DataIdError::InvalidIdentifier(defect)
            },
        )
    }

    /// Returns whether the ID card number is valid.
    pub fn check_identity_card(&self, id_card: &str) -> Result<bool> {
        match self.id_card(id_card) {
            Ok(_) => Ok(true),
            Err(DataIdError::InvalidIdentifier(_)) => Ok(false),
            Err(e) => Err(e),
        }
    }

    /// Birth date as `YYYY-MM-DD`.
    pub fn birth_by_id_card(&self, id_card: &str) -> Result<String> {
        let card = self.id_card(id_card)?;
        Ok(card.birth_date().format("%Y-%m-%d").to_string())
    }

    pub fn province_by_id_card(&self, id_card: &str) -> Result<&'static str> {
        Ok(self.id_card(id_card)?.province())
    }

    /// Converts a 15-digit number to the 18-character form.
    ///
    /// A valid number that is not 15 digits long is an invalid argument.
    pub fn convert_15_to_18(&self, id_card: &str) -> Result<String> {
        let card = self.id_card(id_card)?;
        if !card.is_legacy() {
            return Err(DataIdError::InvalidArgument {
                field: "id_card",
                reason: "expected a 15-digit id card number".to_string(),
            });
        }
        Ok(card.to_18())
    }

    /// Age in whole years as of [`Validator::today`].
    pub fn age_by_id_card(&self, id_card: &str) -> Result<u32> {
        let today = self.today();
        self.id_card(id_card)?.age_at(today)
    }

    /// Gender code: 1 for male, 0 for female.
    pub fn gender_by_id_card(&self, id_card: &str) -> Result<u8> {
        Ok(self.id_card(id_card)?.gender().code())
    }

    pub fn check_phone_number(&self, phone_number: &str) -> Result<bool> {
        PhoneNumber::is_valid(phone_number)
    }

    pub fn check_email(&self, email: &str) -> Result<bool> {
        Email::is_valid(email)
    }

    /// Surrounding whitespace and inner spaces are ignored.
    pub fn check_plate_number(&self, plate_number: &str) -> Result<bool> {
        PlateNumber::is_valid(plate_number)
    }

    /// Checks a value against the format for `kind`.
    pub fn check(&self, kind: IdentifierKind, value: &str) -> Result<bool> {
        match kind {
            IdentifierKind::IdCard => self.check_identity_card(value),
            IdentifierKind::Phone => self.check_phone_number(value),
            IdentifierKind::Email => self.check_email(value),
            IdentifierKind::Plate => self.check_plate_number(value),
        }
    }
}

/// Returns whether the ID card number is valid.
pub fn check_identity_card(id_card: &str) -> Result<bool> {
    Validator::default().check_identity_card(id_card)
}

/// Birth date embedded in a valid ID card number, as `YYYY-MM-DD`.
pub fn birth_by_id_card(id_card: &str) -> Result<String> {
    Validator::default().birth_by_id_card(id_card)
}

/// Province that issued a valid ID card number.
pub fn province_by_id_card(id_card: &str) -> Result<&'static str> {
    Validator::default().province_by_id_card(id_card)
}

/// Converts a valid 15-digit ID card number to the 18-character form.
pub fn convert_15_to_18(id_card: &str) -> Result<String> {
    Validator::default().convert_15_to_18(id_card)
}

/// Age in whole years as of the local calendar date.
pub fn age_by_id_card(id_card: &str) -> Result<u32> {
    Validator::default().age_by_id_card(id_card)
}

/// Age in whole years as of `today`.
pub fn age_by_id_card_at(id_card: &str, today: NaiveDate) -> Result<u32> {
    Validator::with_config(Config::default().with_reference_date(today)).age_by_id_card(id_card)
}

/// Gender code of a valid ID card number: 1 for male, 0 for female.
pub fn gender_by_id_card(id_card: &str) -> Result<u8> {
    Validator::default().gender_by_id_card(id_card)
}

/// Returns whether the string is an 11-digit mobile number.
pub fn check_phone_number(phone_number: &str) -> Result<bool> {
    Validator::default().check_phone_number(phone_number)
}

/// Returns whether the string is an email address.
pub fn check_email(email: &str) -> Result<bool> {
    Validator::default().check_email(email)
}

/// Returns whether the string is a vehicle plate number.
pub fn check_plate_number(plate_number: &str) -> Result<bool> {
    Validator::default().check_plate_number(plate_number)
}

/// Checks a value against the format for `kind`.
pub fn check(kind: IdentifierKind, value: &str) -> Result<bool> {
    Validator::default().check(kind, value)
}
