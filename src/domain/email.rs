//! Email value object.

use super::errors::{ValidationError, ValidationResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use validator::ValidateEmail;

/// A type-safe wrapper for email addresses.
///
/// Validation happens at construction time, and the stored value is always
/// the canonical form: trimmed and lower-cased. Because of that, plain
/// structural equality on `Email` is case-insensitive with respect to the
/// original inputs.
///
/// # Example
///
/// ```
/// use identity_domain::domain::Email;
///
/// let email = Email::new("  JOHN.DOE@EXAMPLE.COM  ").unwrap();
/// assert_eq!(email.as_str(), "john.doe@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Create a new Email, validating and normalizing the address.
    ///
    /// # Validation Rules
    ///
    /// - Must not be empty or whitespace-only
    /// - Must match the email address grammar after trimming
    /// - Stored lower-cased
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty("Email")` for blank input and
    /// `ValidationError::InvalidEmailFormat` if the grammar check fails.
    pub fn new(value: impl Into<String>) -> ValidationResult<Self> {
        let value = value.into();
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty("Email"));
        }

        let normalized = trimmed.to_lowercase();
        if !normalized.validate_email() {
            return Err(ValidationError::InvalidEmailFormat);
        }

        Ok(Self(normalized))
    }

    /// Get the email address as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        // SAFETY: Constructor validates an '@' exists
        self.0
            .split('@')
            .next()
            .expect("email validated to contain '@'")
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        // SAFETY: Constructor validates an '@' exists
        self.0
            .rsplit('@')
            .next()
            .expect("email validated to contain '@'")
    }
}

// Serde support - serialize as string
impl Serialize for Email {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Email {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Email::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
