//! Pattern-validated value types for phone numbers, emails, and plates.

use crate::patterns::{normalize_plate, EMAIL, NEW_ENERGY_PLATE, PHONE, PLATE};

define_validated!(
    /// An 11-digit mobile number with an assigned carrier prefix.
    PhoneNumber,
    "phone_number",
    PHONE,
    str::to_string
);

define_validated!(
    /// An email address.
    Email,
    "email",
    EMAIL,
    str::to_string
);

define_validated!(
    /// A vehicle plate number, stored without whitespace.
    PlateNumber,
    "plate_number",
    PLATE,
    normalize_plate
);

impl PhoneNumber {
    /// The three-digit network prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.0[..3]
    }
}

impl Email {
    #[must_use]
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

impl PlateNumber {
    /// Returns true for a new-energy vehicle plate.
    #[must_use]
    pub fn is_new_energy(&self) -> bool {
        NEW_ENERGY_PLATE.is_match(&self.0)
    }

    /// The leading province or special-use character.
    #[must_use]
    pub fn province_char(&self) -> char {
        self.0.chars().next().unwrap_or_default()
    }
}
