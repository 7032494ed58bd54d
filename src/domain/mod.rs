//! Identity domain model.
//!
//! This module contains the `User` aggregate root and the value objects it
//! owns: email addresses, person names, and phone numbers. Value objects
//! validate and normalize their content at construction time, so invalid
//! data can never be represented; the aggregate adds presence checks and
//! controlled mutation on top.

pub mod email;
pub mod errors;
pub mod name;
pub mod phone;
pub mod role;
pub mod user;

pub use email::Email;
pub use errors::{ValidationError, ValidationResult};
pub use name::{FirstName, LastName};
pub use phone::PhoneNumber;
pub use role::Role;
pub use user::User;
