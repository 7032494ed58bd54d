//! User aggregate root.

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::trace;
use uuid::Uuid;

use super::errors::{ValidationError, ValidationResult};
use super::{Email, FirstName, LastName, PhoneNumber, Role};

/// A user account, owning its validated value objects.
///
/// A `User` can only be obtained through [`User::new`], which validates all
/// inputs atomically, or through [`User::reconstruct`], the trusted
/// rehydration path for data that was validated before being stored. All
/// fields are private; state changes flow through the field-scoped mutation
/// methods, so an instance can never hold an invalid value.
///
/// `id`, `role`, and `created_at` never change for the lifetime of the
/// aggregate.
///
/// `User` serializes for read-side consumers (with the password hash
/// omitted) but deliberately does not implement `Deserialize`: a blob of
/// JSON is not a trusted source of aggregate state. Rehydration from
/// storage goes through [`User::reconstruct`].
///
/// # Example
///
/// ```
/// use identity_domain::domain::{Email, FirstName, LastName, PhoneNumber, Role, User};
/// use uuid::Uuid;
///
/// let user = User::new(
///     Uuid::new_v4(),
///     Some(FirstName::new("John").unwrap()),
///     Some(LastName::new("Doe").unwrap()),
///     Some(Email::new("john.doe@example.com").unwrap()),
///     Some(PhoneNumber::new("2025550123", "US").unwrap()),
///     Role::Requester,
///     "hashedpassword",
/// )
/// .unwrap();
///
/// assert!(user.is_active());
/// assert_eq!(user.full_name(), "John Doe");
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct User {
    id: Uuid,
    first_name: FirstName,
    last_name: LastName,
    email: Email,
    phone_number: PhoneNumber,
    role: Role,
    is_active: bool,
    created_at: DateTime<Utc>,
    #[serde(skip_serializing)]
    password_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_picture_url: Option<String>,
}

impl User {
    /// Create a new user, validating all inputs atomically.
    ///
    /// The value-object parameters are `Option`s: their content was already
    /// validated at construction time, so this layer only enforces that each
    /// one was actually supplied. `None` models the missing-reference case
    /// that typically arises at an untrusted boundary (e.g. a request body
    /// with absent fields).
    ///
    /// On success the user starts active, with `created_at` set to the
    /// current UTC time and no profile picture.
    ///
    /// # Errors
    ///
    /// Checked in order: nil `id`, then each missing value object, then a
    /// blank password hash. The first violation wins and no partial user is
    /// ever observable.
    pub fn new(
        id: Uuid,
        first_name: Option<FirstName>,
        last_name: Option<LastName>,
        email: Option<Email>,
        phone_number: Option<PhoneNumber>,
        role: Role,
        password_hash: impl Into<String>,
    ) -> ValidationResult<Self> {
        if id.is_nil() {
            return Err(ValidationError::Empty("User ID"));
        }

        let first_name = first_name.ok_or(ValidationError::Required("First name"))?;
        let last_name = last_name.ok_or(ValidationError::Required("Last name"))?;
        let email = email.ok_or(ValidationError::Required("Email"))?;
        let phone_number = phone_number.ok_or(ValidationError::Required("Phone number"))?;

        let password_hash = password_hash.into();
        if password_hash.trim().is_empty() {
            return Err(ValidationError::Empty("Password hash"));
        }

        let user = Self {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            role,
            is_active: true,
            created_at: Utc::now(),
            password_hash,
            profile_picture_url: None,
        };

        trace!(user_id = %user.id, role = %user.role, "user created");
        Ok(user)
    }

    /// Rebuild a user from previously stored field values.
    ///
    /// Trusted-input path: no validation is performed. This exists for
    /// persistence layers rehydrating rows whose values already passed
    /// through [`User::new`] and the value-object constructors. New users
    /// must always go through [`User::new`].
    #[allow(clippy::too_many_arguments)]
    pub fn reconstruct(
        id: Uuid,
        first_name: FirstName,
        last_name: LastName,
        email: Email,
        phone_number: PhoneNumber,
        role: Role,
        is_active: bool,
        created_at: DateTime<Utc>,
        password_hash: String,
        profile_picture_url: Option<String>,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            email,
            phone_number,
            role,
            is_active,
            created_at,
            password_hash,
            profile_picture_url,
        }
    }

    /// Replace the user's email address.
    ///
    /// # Errors
    ///
    /// Rejects `None` without altering the current state.
    pub fn change_email(&mut self, new_email: Option<Email>) -> ValidationResult<()> {
        self.email = new_email.ok_or(ValidationError::Empty("Email"))?;
        trace!(user_id = %self.id, "email changed");
        Ok(())
    }

    /// Replace the user's phone number.
    ///
    /// # Errors
    ///
    /// Rejects `None` without altering the current state.
    pub fn change_phone_number(
        &mut self,
        new_phone_number: Option<PhoneNumber>,
    ) -> ValidationResult<()> {
        self.phone_number = new_phone_number.ok_or(ValidationError::Empty("Phone number"))?;
        trace!(user_id = %self.id, "phone number changed");
        Ok(())
    }

    /// Replace the user's password hash.
    ///
    /// The hash is treated as opaque; only blankness is checked.
    ///
    /// # Errors
    ///
    /// Rejects a blank hash without altering the current state.
    pub fn change_password(
        &mut self,
        new_password_hash: impl Into<String>,
    ) -> ValidationResult<()> {
        let new_password_hash = new_password_hash.into();
        if new_password_hash.trim().is_empty() {
            return Err(ValidationError::Empty("Password hash"));
        }
        self.password_hash = new_password_hash;
        trace!(user_id = %self.id, "password changed");
        Ok(())
    }

    /// Mark the user as active. Idempotent.
    pub fn activate(&mut self) {
        self.is_active = true;
        trace!(user_id = %self.id, "user activated");
    }

    /// Mark the user as inactive. Idempotent.
    pub fn deactivate(&mut self) {
        self.is_active = false;
        trace!(user_id = %self.id, "user deactivated");
    }

    /// Set or clear the profile picture URL. The URL is not validated.
    pub fn update_profile_picture(&mut self, url: Option<String>) {
        self.profile_picture_url = url;
        trace!(user_id = %self.id, "profile picture updated");
    }

    /// The user's full name: first name, a single space, last name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check if the user's role is `Provider`.
    pub fn is_provider(&self) -> bool {
        self.role.is_provider()
    }

    /// Check if the user's role is `Requester`.
    pub fn is_requester(&self) -> bool {
        self.role.is_requester()
    }

    /// Check if the user's role is `Admin`.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }

    /// Unique identifier for the user.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// The user's first name.
    pub fn first_name(&self) -> &FirstName {
        &self.first_name
    }

    /// The user's last name.
    pub fn last_name(&self) -> &LastName {
        &self.last_name
    }

    /// The user's email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// The user's phone number.
    pub fn phone_number(&self) -> &PhoneNumber {
        &self.phone_number
    }

    /// The user's role.
    pub fn role(&self) -> Role {
        self.role
    }

    /// Whether the user is currently active.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// When the user was created (UTC, set once).
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// The opaque password hash.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// The profile picture URL, if one is set.
    pub fn profile_picture_url(&self) -> Option<&str> {
        self.profile_picture_url.as_deref()
    }
}
