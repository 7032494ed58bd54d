//! PhoneNumber value object.

use super::errors::{ValidationError, ValidationResult};
use phonenumber::{country, Mode};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A type-safe wrapper for phone numbers.
///
/// Constructed from a raw national number plus an ISO 3166-1 alpha-2 region
/// code (e.g. `"US"`). The raw number is parsed and checked against the
/// numbering plan for that region, and the stored value is always the
/// canonical E.164 representation: a leading `+`, the country calling code,
/// and the national number with no separators.
///
/// # Example
///
/// ```
/// use identity_domain::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("2025550123", "US").unwrap();
/// assert_eq!(phone.as_str(), "+12025550123");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber from a raw number and a region code.
    ///
    /// # Validation Rules
    ///
    /// - Raw number and region code must both be non-blank
    /// - The region code must name a known numbering plan
    /// - The number must parse and be valid for that plan
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` for blank inputs,
    /// `ValidationError::InvalidPhoneNumberFormat` when parsing fails, and
    /// `ValidationError::InvalidPhoneNumber` when the parsed number is not
    /// valid for the region.
    pub fn new(
        number: impl Into<String>,
        region: impl Into<String>,
    ) -> ValidationResult<Self> {
        let number = number.into();
        let region = region.into();

        if number.trim().is_empty() {
            return Err(ValidationError::Empty("Phone number"));
        }
        if region.trim().is_empty() {
            return Err(ValidationError::Empty("Country code"));
        }

        let region_id = region
            .trim()
            .to_uppercase()
            .parse::<country::Id>()
            .map_err(|_| ValidationError::InvalidPhoneNumberFormat)?;

        let parsed = phonenumber::parse(Some(region_id), number.trim())
            .map_err(|_| ValidationError::InvalidPhoneNumberFormat)?;

        if !phonenumber::is_valid(&parsed) {
            return Err(ValidationError::InvalidPhoneNumber);
        }

        Ok(Self(parsed.format().mode(Mode::E164).to_string()))
    }

    /// Rehydrate a PhoneNumber from a stored canonical E.164 string.
    ///
    /// E.164 values carry their own country calling code, so no region is
    /// needed. The value is still parsed and validated, which makes this
    /// safe for untrusted input too.
    ///
    /// # Errors
    ///
    /// Same as [`PhoneNumber::new`], minus the region-code checks.
    pub fn from_e164(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty("Phone number"));
        }

        let parsed = phonenumber::parse(None, trimmed)
            .map_err(|_| ValidationError::InvalidPhoneNumberFormat)?;

        if !phonenumber::is_valid(&parsed) {
            return Err(ValidationError::InvalidPhoneNumber);
        }

        Ok(Self(parsed.format().mode(Mode::E164).to_string()))
    }

    /// Get the phone number as a string slice (canonical E.164).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from an E.164 string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::from_e164(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_canonicalizes_to_e164() {
        let phone = PhoneNumber::new("2025550123", "US").unwrap();
        assert_eq!(phone.as_str(), "+12025550123");
    }

    #[test]
    fn test_phone_accepts_formatted_input() {
        let phone = PhoneNumber::new("(202) 555-0123", "US").unwrap();
        assert_eq!(phone.as_str(), "+12025550123");
    }

    #[test]
    fn test_phone_rejects_blank_number() {
        for input in ["", "   "] {
            assert_eq!(
                PhoneNumber::new(input, "US").unwrap_err().to_string(),
                "Phone number cannot be empty."
            );
        }
    }

    #[test]
    fn test_phone_rejects_blank_region() {
        for region in ["", "   "] {
            assert_eq!(
                PhoneNumber::new("2025550123", region)
                    .unwrap_err()
                    .to_string(),
                "Country code cannot be empty."
            );
        }
    }

    #[test]
    fn test_phone_rejects_unparsable_input() {
        assert_eq!(
            PhoneNumber::new("INVALID_NUMBER", "US")
                .unwrap_err()
                .to_string(),
            "Invalid phone number format."
        );
    }

    #[test]
    fn test_phone_rejects_unknown_region() {
        assert_eq!(
            PhoneNumber::new("2025550123", "ZZ")
                .unwrap_err()
                .to_string(),
            "Invalid phone number format."
        );
    }

    #[test]
    fn test_phone_rejects_number_invalid_for_region() {
        // Parses fine but is far too short to be a real US number.
        assert_eq!(
            PhoneNumber::new("123", "US").unwrap_err().to_string(),
            "Invalid phone number."
        );
    }

    #[test]
    fn test_phone_equality_on_canonical_value() {
        let a = PhoneNumber::new("2025550123", "US").unwrap();
        let b = PhoneNumber::new("(202) 555-0123", "US").unwrap();
        let c = PhoneNumber::new("2025550199", "US").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_phone_from_e164_round_trips_stored_value() {
        let original = PhoneNumber::new("2025550123", "US").unwrap();
        let rehydrated = PhoneNumber::from_e164(original.as_str()).unwrap();
        assert_eq!(original, rehydrated);
    }

    #[test]
    fn test_phone_from_e164_rejects_garbage() {
        assert!(PhoneNumber::from_e164("not a number").is_err());
        assert_eq!(
            PhoneNumber::from_e164("  ").unwrap_err().to_string(),
            "Phone number cannot be empty."
        );
    }

    #[test]
    fn test_phone_display() {
        let phone = PhoneNumber::new("2025550123", "US").unwrap();
        assert_eq!(format!("{}", phone), "+12025550123");
    }

    #[test]
    fn test_phone_serialization() {
        let phone = PhoneNumber::new("2025550123", "US").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"+12025550123\"");
    }

    #[test]
    fn test_phone_deserialization_validates() {
        let phone: PhoneNumber = serde_json::from_str("\"+12025550123\"").unwrap();
        assert_eq!(phone.as_str(), "+12025550123");

        let result: Result<PhoneNumber, _> = serde_json::from_str("\"bogus\"");
        assert!(result.is_err());
    }
}
