//! Identifier kinds.

use std::fmt;
use std::str::FromStr;

use crate::error::DataIdError;

/// The kinds of identifier this crate can validate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentifierKind {
    /// Resident identity card number.
    IdCard,
    /// Mobile phone number.
    Phone,
    Email,
    /// Vehicle plate number.
    Plate,
}

impl IdentifierKind {
    /// All kinds, in declaration order.
    pub const ALL: [IdentifierKind; 4] = [
        IdentifierKind::IdCard,
        IdentifierKind::Phone,
        IdentifierKind::Email,
        IdentifierKind::Plate,
    ];

    /// Returns the canonical name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            IdentifierKind::IdCard => "id_card",
            IdentifierKind::Phone => "phone",
            IdentifierKind::Email => "email",
            IdentifierKind::Plate => "plate",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IdentifierKind {
    type Err = DataIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IdentifierKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DataIdError::InvalidArgument {
                field: "kind",
                reason: format!("unknown identifier kind '{s}'"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_roundtrip() {
        for kind in IdentifierKind::ALL {
            let parsed: IdentifierKind = kind.to_string().parse().unwrap();
            assert_eq!(kind, parsed);

            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn test_unknown_kind() {
        let err = "passport".parse::<IdentifierKind>().unwrap_err();
        assert!(err.is_invalid_argument());
    }
}
