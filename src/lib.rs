//! Identity Domain - a self-validating user identity domain model.
//!
//! This library provides a `User` aggregate and the value objects it is
//! composed of (`Email`, `FirstName`, `LastName`, `PhoneNumber`), designed
//! so that a user record can never exist in an invalid state. Persistence,
//! transport, and authentication live in consuming applications; they
//! construct and read these objects but cannot bypass their validation.
//!
//! # Architecture
//!
//! - **domain::errors**: the single `ValidationError` type with stable,
//!   user-facing message strings
//! - **domain::email / name / phone**: value objects that validate and
//!   normalize one scalar each on construction, immutable thereafter
//! - **domain::role**: the `Role` enumeration with a stable ordinal mapping
//! - **domain::user**: the aggregate root enforcing presence checks and
//!   exposing field-scoped mutation
//!
//! All operations are synchronous and perform no I/O. The crate emits
//! `tracing` events at aggregate state changes but never installs a
//! subscriber.

// Re-export commonly used types
pub mod domain;

pub use domain::{
    Email, FirstName, LastName, PhoneNumber, Role, User, ValidationError, ValidationResult,
};
