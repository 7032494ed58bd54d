//! Domain validation errors.
//!
//! Every rejected construction or mutation in this crate produces a
//! [`ValidationError`]. The display strings are part of the public
//! contract: callers translate them directly into user-facing responses,
//! so they must stay stable across releases.

use thiserror::Error;

/// Errors that can occur during domain value object or aggregate validation.
///
/// Field-labelled variants carry the display name of the offending field
/// (e.g. `"First name"`, `"Phone number"`), which is interpolated into the
/// stable message string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The supplied value was empty or whitespace-only.
    #[error("{0} cannot be empty.")]
    Empty(&'static str),

    /// A required value object was not supplied to the aggregate.
    #[error("{0} is required.")]
    Required(&'static str),

    /// The trimmed value is shorter than the minimum length.
    #[error("{field} must be at least {min} character long.")]
    TooShort { field: &'static str, min: usize },

    /// The trimmed value exceeds the maximum length.
    #[error("{field} cannot be more than {max} characters long.")]
    TooLong { field: &'static str, max: usize },

    /// The value contains characters that are not allowed.
    #[error("{0} contains invalid characters.")]
    InvalidCharacters(&'static str),

    /// The value does not match the email address grammar.
    #[error("Invalid email format.")]
    InvalidEmailFormat,

    /// The number parsed but is not valid for its numbering plan.
    #[error("Invalid phone number.")]
    InvalidPhoneNumber,

    /// The input could not be parsed as a phone number at all.
    #[error("Invalid phone number format.")]
    InvalidPhoneNumberFormat,
}

/// Convenience type alias for Results with ValidationError
pub type ValidationResult<T> = Result<T, ValidationError>;
