//! Precompiled expressions for phone numbers, email addresses, and plates.
//!
//! Every pattern is anchored at both ends and compiled on first use.

use once_cell::sync::Lazy;
use regex::Regex;

/// Leading characters accepted on a plate: province, municipality, and
/// embassy/consulate abbreviations.
pub const PLATE_PROVINCES: &str = "京津沪渝冀豫云辽黑湘皖鲁新苏浙赣鄂桂甘晋蒙陕吉闽贵粤青藏川宁琼使领";

/// Trailing characters accepted on a general plate besides letters and digits
/// (trailer, learner, police, Hong Kong, Macau).
pub const PLATE_SUFFIXES: &str = "挂学警港澳";

/// 11-digit mobile numbers with an assigned carrier prefix.
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:13[0-9]|14[579]|15[0-35-9]|166|17[0135678]|18[0-9]|19[89])[0-9]{8}$")
        .expect("phone pattern is valid")
});

/// `local@domain` with a letters-only top-level label.
pub static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?:[A-Za-z0-9]+[-.]?)+[A-Za-z0-9]@(?:[A-Za-z0-9]+(?:-[A-Za-z0-9]+)?\.)+[A-Za-z]{2,}$",
    )
    .expect("email pattern is valid")
});

/// New-energy and general plates.
pub static PLATE: Lazy<Regex> = Lazy::new(|| {
    let p = PLATE_PROVINCES;
    let s = PLATE_SUFFIXES;
    Regex::new(&format!(
        "^(?:[{p}][A-Za-z](?:[DF][A-HJ-NP-Za-z0-9][0-9]{{4}}|[0-9]{{5}}[DF])|[{p}][A-Z][A-Z0-9]{{4}}[A-Z0-9{s}])$"
    ))
    .expect("plate pattern is valid")
});

/// New-energy plates only.
pub static NEW_ENERGY_PLATE: Lazy<Regex> = Lazy::new(|| {
    let p = PLATE_PROVINCES;
    Regex::new(&format!(
        "^[{p}][A-Za-z](?:[DF][A-HJ-NP-Za-z0-9][0-9]{{4}}|[0-9]{{5}}[DF])$"
    ))
    .expect("new-energy plate pattern is valid")
});

/// Trims a plate and removes every space inside it.
pub fn normalize_plate(plate: &str) -> String {
    plate.trim().replace(' ', "")
}
