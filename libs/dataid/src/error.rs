//! Error types for identifier validation and extraction.

use thiserror::Error;

/// Errors returned by the validation and extraction functions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DataIdError {
    /// The input was empty or blank, or cannot be used for the requested operation.
    #[error("invalid argument '{field}': {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    /// The ID card number is non-empty but failed validation.
    #[error("invalid id card number: {0}")]
    InvalidIdentifier(#[from] IdCardDefect),
}

impl DataIdError {
    /// Shorthand for the empty/blank input case.
    pub(crate) fn empty(field: &'static str) -> Self {
        DataIdError::InvalidArgument {
            field,
            reason: "cannot be empty".to_string(),
        }
    }

    /// Returns true if this error indicates a missing or unusable argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, DataIdError::InvalidArgument { .. })
    }

    /// Returns true if this error indicates an invalid ID card number.
    pub fn is_invalid_identifier(&self) -> bool {
        matches!(self, DataIdError::InvalidIdentifier(_))
    }
}

/// The reason an ID card number was rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdCardDefect {
    /// Neither 15 nor 18 characters long.
    #[error("expected 15 or 18 characters, got {len}")]
    Length { len: usize },

    /// A position that must hold a digit does not.
    #[error("contains non-digit characters")]
    NonDigit,

    /// The first two digits are not a known province code.
    #[error("unknown province code '{code}'")]
    UnknownProvince { code: String },

    /// The embedded birth date is not a plausible calendar date.
    #[error("implausible birth date '{digits}'")]
    BirthDate { digits: String },

    /// The check character does not match the MOD 11-2 checksum.
    #[error("check character mismatch: expected '{expected}', got '{actual}'")]
    Checksum { expected: char, actual: char },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DataIdError>;
