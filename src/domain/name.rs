//! FirstName and LastName value objects.
//!
//! Both types enforce the same rules over a person-name string, so they are
//! generated from a single macro with only the user-facing field label
//! differing. Unlike [`Email`](super::Email), equality is exact
//! (case-sensitive) on the trimmed value.

use super::errors::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Minimum person-name length after trimming.
pub const MIN_NAME_LENGTH: usize = 1;

/// Maximum person-name length after trimming.
pub const MAX_NAME_LENGTH: usize = 50;

macro_rules! name_value_object {
    ($name:ident, $label:literal, $doc:literal) => {
        #[doc = $doc]
        ///
        /// Validated at construction time: non-empty after trimming, between
        /// 1 and 50 characters, and free of control characters. The stored
        /// value is the trimmed input with its original casing.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub struct $name(String);

        impl $name {
            /// Create a new instance, validating and trimming the raw value.
            ///
            /// # Errors
            ///
            /// Returns a `ValidationError` naming the violated rule: blank
            /// input, a length outside `[1, 50]`, or control characters.
            pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
                let value = value.into();
                let trimmed = value.trim();

                if trimmed.is_empty() {
                    return Err(ValidationError::Empty($label));
                }

                let length = trimmed.chars().count();
                if length < MIN_NAME_LENGTH {
                    return Err(ValidationError::TooShort {
                        field: $label,
                        min: MIN_NAME_LENGTH,
                    });
                }
                if length > MAX_NAME_LENGTH {
                    return Err(ValidationError::TooLong {
                        field: $label,
                        max: MAX_NAME_LENGTH,
                    });
                }

                if trimmed.chars().any(char::is_control) {
                    return Err(ValidationError::InvalidCharacters($label));
                }

                Ok(Self(trimmed.to_string()))
            }

            /// Get the name as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Convert into the underlying String.
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        // Serde support - serialize as string
        impl Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                self.0.serialize(serializer)
            }
        }

        // Serde support - deserialize from string with validation
        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = String::deserialize(deserializer)?;
                $name::new(s).map_err(serde::de::Error::custom)
            }
        }

        // Display support
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

name_value_object!(FirstName, "First name", "A person's validated first name.");
name_value_object!(LastName, "Last name", "A person's validated last name.");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        let name = FirstName::new("John").unwrap();
        assert_eq!(name.as_str(), "John");

        let name = LastName::new("Doe").unwrap();
        assert_eq!(name.as_str(), "Doe");
    }

    #[test]
    fn test_name_trims_whitespace() {
        let name = FirstName::new("  John  ").unwrap();
        assert_eq!(name.as_str(), "John");
    }

    #[test]
    fn test_name_keeps_case() {
        let name = FirstName::new("McDonald").unwrap();
        assert_eq!(name.as_str(), "McDonald");
    }

    #[test]
    fn test_name_rejects_blank() {
        assert_eq!(
            FirstName::new("").unwrap_err().to_string(),
            "First name cannot be empty."
        );
        assert_eq!(
            FirstName::new("   ").unwrap_err().to_string(),
            "First name cannot be empty."
        );
        assert_eq!(
            LastName::new(" ").unwrap_err().to_string(),
            "Last name cannot be empty."
        );
    }

    #[test]
    fn test_name_length_boundaries() {
        let at_limit = "a".repeat(50);
        assert!(FirstName::new(at_limit.clone()).is_ok());
        assert!(LastName::new(at_limit).is_ok());

        let over_limit = "a".repeat(51);
        assert_eq!(
            FirstName::new(over_limit.clone()).unwrap_err().to_string(),
            "First name cannot be more than 50 characters long."
        );
        assert_eq!(
            LastName::new(over_limit).unwrap_err().to_string(),
            "Last name cannot be more than 50 characters long."
        );
    }

    #[test]
    fn test_name_length_counts_trimmed_value() {
        // 50 meaningful characters padded with whitespace still fits.
        let padded = format!("  {}  ", "a".repeat(50));
        assert!(FirstName::new(padded).is_ok());
    }

    #[test]
    fn test_name_rejects_control_characters() {
        assert_eq!(
            FirstName::new("Jo\u{0000}hn").unwrap_err().to_string(),
            "First name contains invalid characters."
        );
        assert_eq!(
            LastName::new("Do\u{0007}e").unwrap_err().to_string(),
            "Last name contains invalid characters."
        );
    }

    #[test]
    fn test_name_equality_is_case_sensitive() {
        let lower = FirstName::new("john").unwrap();
        let upper = FirstName::new("John").unwrap();
        assert_ne!(lower, upper);
        assert_eq!(upper, FirstName::new("  John ").unwrap());
    }

    #[test]
    fn test_name_display() {
        let name = LastName::new("Doe").unwrap();
        assert_eq!(format!("{}", name), "Doe");
    }

    #[test]
    fn test_name_serialization() {
        let name = FirstName::new("John").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"John\"");
    }

    #[test]
    fn test_name_deserialization_validates() {
        let name: LastName = serde_json::from_str("\"Doe\"").unwrap();
        assert_eq!(name.as_str(), "Doe");

        let result: Result<FirstName, _> = serde_json::from_str("\"  \"");
        assert!(result.is_err());
    }
}
