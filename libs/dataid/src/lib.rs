//! # dataid
//!
//! Validation and field extraction for Chinese personal identifiers:
//! resident identity card numbers, mobile phone numbers, email addresses,
//! and vehicle plate numbers.
//!
//! ## Error Semantics
//!
//! - Empty or blank input is always [`DataIdError::InvalidArgument`], never `false`
//! - `check_*` functions return `Ok(false)` for a well-formed call on a bad value
//! - ID card extraction functions return [`DataIdError::InvalidIdentifier`]
//!   for a number that fails validation
//!
//! ## ID Card Validation
//!
//! An 18-character number must have a known province code, a plausible
//! birth date, and a matching ISO 7064 MOD 11-2 check character. A 15-digit
//! legacy number must have a known province code and a plausible birth date
//! in the 1900s.
//!
//! Examples:
//! - `11010519491231002X` is valid (Beijing, born 1949-12-31, female)
//! - `11010519491231003X` is invalid (check character should be `8`)
//! - `110105491231002` converts to `11010519491231002X`

#[macro_use]
mod macros;

mod config;
mod error;
mod id_card;
mod kind;
pub mod patterns;
pub mod province;
mod types;
mod validator;

pub use config::{Config, ConfigError, ENV_REFERENCE_DATE, ENV_STRICT_CHECKSUM};
pub use error::{DataIdError, IdCardDefect, Result};
pub use id_card::{
    check_code, Gender, IdCard, IdCardFormat, LEGACY_LENGTH, MIN_BIRTH_YEAR, MODERN_LENGTH,
};
pub use kind::IdentifierKind;
pub use types::{Email, PhoneNumber, PlateNumber};
pub use validator::{
    age_by_id_card, age_by_id_card_at, birth_by_id_card, check, check_email, check_identity_card,
    check_phone_number, check_plate_number, convert_15_to_18, gender_by_id_card,
    province_by_id_card, Validator,
};
