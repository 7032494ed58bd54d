//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The role a user plays in the system.
///
/// The numeric discriminants form a stable ordinal mapping (Admin=0,
/// Requester=1, Provider=2) for stores that persist roles as integers;
/// serde uses lower-case string names instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Role {
    /// System administrator with elevated permissions
    Admin = 0,
    /// Person who hires service providers
    Requester = 1,
    /// Person who offers services
    Provider = 2,
}

impl Role {
    /// The stable ordinal for this role.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Look a role up by its stable ordinal.
    pub fn from_ordinal(value: u8) -> Option<Self> {
        match value {
            0 => Some(Role::Admin),
            1 => Some(Role::Requester),
            2 => Some(Role::Provider),
            _ => None,
        }
    }

    /// Check if this role is `Admin`.
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Admin)
    }

    /// Check if this role is `Requester`.
    pub fn is_requester(self) -> bool {
        matches!(self, Role::Requester)
    }

    /// Check if this role is `Provider`.
    pub fn is_provider(self) -> bool {
        matches!(self, Role::Provider)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Requester => write!(f, "requester"),
            Role::Provider => write!(f, "provider"),
        }
    }
}
