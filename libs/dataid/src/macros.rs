//! Macros for defining pattern-validated string types.

/// Defines a string newtype that only holds values matching a pattern.
///
/// This generates:
/// - A `FIELD` constant naming the value in errors and logs
/// - `is_valid()` to check a raw string
/// - `parse()` to validate and wrap a raw string
/// - `Display`, `FromStr`, and `AsRef<str>` implementations
/// - `Serialize` and `Deserialize` implementations
///
/// The normalizer runs before matching and its output is what gets stored.
///
/// # Example
///
/// ```ignore
/// define_validated!(PhoneNumber, "phone_number", crate::patterns::PHONE, str::to_string);
///
/// let phone: PhoneNumber = "13800138000".parse()?;
/// ```
macro_rules! define_validated {
    ($(#[$meta:meta])* $name:ident, $field:literal, $pattern:expr, $normalize:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            /// Name of this value in errors and logs.
            pub const FIELD: &'static str = $field;

            /// Checks a raw string.
            ///
            /// Empty or blank input is an error rather than `false`.
            pub fn is_valid(s: &str) -> $crate::Result<bool> {
                if s.trim().is_empty() {
                    return Err($crate::DataIdError::empty(Self::FIELD));
                }
                let normalized: String = ($normalize)(s);
                let matched = $pattern.is_match(&normalized);
                if !matched {
                    tracing::trace!(field = Self::FIELD, "value does not match pattern");
                }
                Ok(matched)
            }

            /// Validates and wraps a raw string.
            pub fn parse(s: &str) -> $crate::Result<Self> {
                if !Self::is_valid(s)? {
                    return Err($crate::DataIdError::InvalidArgument {
                        field: Self::FIELD,
                        reason: "does not match the expected format".to_string(),
                    });
                }
                Ok(Self(($normalize)(s)))
            }

            /// Returns the stored value.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consumes the value, returning the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::DataIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(&self.0)
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                Self::parse(&s).map_err(serde::de::Error::custom)
            }
        }
    };
}
