//! Resident identity card numbers.
//!
//! Two formats are in circulation:
//!
//! - 18 characters: 6-digit area code, 8-digit birth date (`YYYYMMDD`),
//!   3-digit sequence code, and one ISO 7064 MOD 11-2 check character
//!   (`0`-`9` or `X`).
//! - 15 digits (legacy): 6-digit area code, 6-digit birth date (`YYMMDD`,
//!   always in the 1900s), 3-digit sequence code, no check character.
//!
//! The gender is encoded by the parity of the last sequence digit.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Local, NaiveDate};

use crate::error::{DataIdError, IdCardDefect, Result};
use crate::province::{is_known_province, province_name};

/// Length of a legacy ID card number.
pub const LEGACY_LENGTH: usize = 15;

/// Length of a modern ID card number.
pub const MODERN_LENGTH: usize = 18;

/// Earliest accepted birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

/// MOD 11-2 weights for the first 17 digits.
const WEIGHTS: [u32; 17] = [7, 9, 10, 5, 8, 4, 2, 1, 6, 3, 7, 9, 10, 5, 8, 4, 2];

/// Check characters indexed by weighted sum mod 11.
const CHECK_CHARS: &[u8; 11] = b"10X98765432";

/// Computes the MOD 11-2 check character for the first 17 digits of a card.
///
/// Returns `None` unless `first17` is exactly 17 ASCII digits.
pub fn check_code(first17: &str) -> Option<char> {
    let bytes = first17.as_bytes();
    if bytes.len() != MODERN_LENGTH - 1 || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }

    let sum: u32 = bytes
        .iter()
        .zip(WEIGHTS)
        .map(|(b, w)| u32::from(b - b'0') * w)
        .sum();

    Some(CHECK_CHARS[(sum % 11) as usize] as char)
}

/// Which of the two card formats a number uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdCardFormat {
    /// 15-digit legacy number.
    Legacy15,
    /// 18-character number with check character.
    Modern18,
}

/// Gender encoded in the sequence code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female = 0,
    Male = 1,
}

impl Gender {
    /// Numeric code: 1 for male, 0 for female.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    fn from_digit(digit: u8) -> Self {
        if digit % 2 == 1 {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Female => f.write_str("female"),
            Gender::Male => f.write_str("male"),
        }
    }
}

/// A validated ID card number.
///
/// The original spelling is kept; use [`IdCard::to_18`] for the normalized
/// 18-character form.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct IdCard {
    number: String,
    format: IdCardFormat,
    birth_date: NaiveDate,
}

impl IdCard {
    /// Parses and validates a card number against the local calendar date.
    ///
    /// A lowercase `x` check character is accepted.
    pub fn parse(s: &str) -> Result<Self> {
        Self::parse_at(s, Local::now().date_naive())
    }

    /// Parses and validates a card number against an explicit current date.
    ///
    /// Birth years after `today`'s year are rejected.
    pub fn parse_at(s: &str, today: NaiveDate) -> Result<Self> {
        if s.trim().is_empty() {
            return Err(DataIdError::empty("id_card"));
        }
        Ok(Self::validate(s, today, false)?)
    }

    /// Validates a non-empty card number.
    pub(crate) fn validate(
        s: &str,
        today: NaiveDate,
        strict_checksum_case: bool,
    ) -> std::result::Result<Self, IdCardDefect> {
        let len = s.chars().count();
        if len != LEGACY_LENGTH && len != MODERN_LENGTH {
            return Err(IdCardDefect::Length { len });
        }
        if !s.is_ascii() {
            return Err(IdCardDefect::NonDigit);
        }

        let (format, digits_len) = if len == MODERN_LENGTH {
            (IdCardFormat::Modern18, MODERN_LENGTH - 1)
        } else {
            (IdCardFormat::Legacy15, LEGACY_LENGTH)
        };
        if !s.as_bytes()[..digits_len].iter().all(u8::is_ascii_digit) {
            return Err(IdCardDefect::NonDigit);
        }

        let code = &s[..2];
        if !is_known_province(code) {
            return Err(IdCardDefect::UnknownProvince {
                code: code.to_string(),
            });
        }

        let birth_digits = match format {
            IdCardFormat::Modern18 => s[6..14].to_string(),
            IdCardFormat::Legacy15 => format!("19{}", &s[6..12]),
        };
        let birth_date = plausible_birth_date(&birth_digits, today)
            .ok_or(IdCardDefect::BirthDate {
                digits: birth_digits,
            })?;

        if format == IdCardFormat::Modern18 {
            let expected = check_code(&s[..17]).ok_or(IdCardDefect::NonDigit)?;
            let actual = s.as_bytes()[17] as char;
            let matches = if strict_checksum_case {
                actual == expected
            } else {
                actual.eq_ignore_ascii_case(&expected)
            };
            if !matches {
                return Err(IdCardDefect::Checksum { expected, actual });
            }
        }

        Ok(Self {
            number: s.to_string(),
            format,
            birth_date,
        })
    }

    /// The number as it was given.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.number
    }

    /// Which format the number uses.
    #[must_use]
    pub fn format(&self) -> IdCardFormat {
        self.format
    }

    /// Returns true for a 15-digit legacy number.
    #[must_use]
    pub fn is_legacy(&self) -> bool {
        self.format == IdCardFormat::Legacy15
    }

    /// First two digits.
    #[must_use]
    pub fn province_code(&self) -> &str {
        &self.number[..2]
    }

    /// First four digits (prefecture-level city).
    #[must_use]
    pub fn city_code(&self) -> &str {
        &self.number[..4]
    }

    /// First six digits (county-level district).
    #[must_use]
    pub fn area_code(&self) -> &str {
        &self.number[..6]
    }

    /// Province name for the issuing area.
    #[must_use]
    pub fn province(&self) -> &'static str {
        province_name(self.province_code()).unwrap_or_default()
    }

    #[must_use]
    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date
    }

    /// The 3-digit sequence code.
    #[must_use]
    pub fn sequence(&self) -> &str {
        match self.format {
            IdCardFormat::Modern18 => &self.number[14..17],
            IdCardFormat::Legacy15 => &self.number[12..15],
        }
    }

    #[must_use]
    pub fn gender(&self) -> Gender {
        let last = self.sequence().as_bytes()[2];
        Gender::from_digit(last - b'0')
    }

    /// Whole years between the birth date and `today`.
    ///
    /// A birthday on the last day of a month is reached on the last day of
    /// that month, so a February 29 birthday counts on February 28 of a
    /// common year.
    pub fn age_at(&self, today: NaiveDate) -> Result<u32> {
        let birth = self.birth_date;
        if today < birth {
            return Err(DataIdError::InvalidArgument {
                field: "reference_date",
                reason: format!("{today} is before the birth date {birth}"),
            });
        }

        let mut age = today.year() - birth.year();
        if today.month() == birth.month() {
            let both_month_end = is_last_day_of_month(today) && is_last_day_of_month(birth);
            if !both_month_end && today.day() < birth.day() {
                age -= 1;
            }
        } else if today.month() < birth.month() {
            age -= 1;
        }

        Ok(u32::try_from(age).unwrap_or(0))
    }

    /// The 18-character form, with an uppercase check character.
    ///
    /// Legacy numbers get the `19` century prefix and a computed check character.
    #[must_use]
    pub fn to_18(&self) -> String {
        match self.format {
            IdCardFormat::Modern18 => self.number.to_ascii_uppercase(),
            IdCardFormat::Legacy15 => {
                let mut out = String::with_capacity(MODERN_LENGTH);
                out.push_str(&self.number[..6]);
                out.push_str("19");
                out.push_str(&self.number[6..]);
                // 17 validated digits, so a check character always exists
                if let Some(c) = check_code(&out) {
                    out.push(c);
                }
                out
            }
        }
    }

    /// The number with everything but the area code and the last four
    /// characters replaced by `*`. Safe to log.
    #[must_use]
    pub fn masked(&self) -> String {
        mask(&self.number)
    }
}

/// Masks an arbitrary card-like string for logging.
pub(crate) fn mask(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() <= 10 {
        return "*".repeat(chars.len());
    }
    let hidden = chars.len() - 10;
    chars[..6]
        .iter()
        .copied()
        .chain(std::iter::repeat('*').take(hidden))
        .chain(chars[chars.len() - 4..].iter().copied())
        .collect()
}

fn plausible_birth_date(digits: &str, today: NaiveDate) -> Option<NaiveDate> {
    let year: i32 = digits.get(..4)?.parse().ok()?;
    let month: u32 = digits.get(4..6)?.parse().ok()?;
    let day: u32 = digits.get(6..8)?.parse().ok()?;

    if !(MIN_BIRTH_YEAR..=today.year()).contains(&year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

fn is_last_day_of_month(date: NaiveDate) -> bool {
    date.succ_opt().is_none_or(|next| next.month() != date.month())
}

impl fmt::Debug for IdCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdCard")
            .field("number", &self.masked())
            .field("format", &self.format)
            .finish()
    }
}

impl fmt::Display for IdCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.number)
    }
}

impl FromStr for IdCard {
    type Err = DataIdError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl AsRef<str> for IdCard {
    fn as_ref(&self) -> &str {
        &self.number
    }
}

impl serde::Serialize for IdCard {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.number)
    }
}

impl<'de> serde::Deserialize<'de> for IdCard {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
