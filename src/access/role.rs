// SPDX-License-Identifier: MPL-2.0
//! Ranked access levels.
//!
//! Roles form a fixed hierarchy where a lower rank means more privilege.
//! The rank of each role is spelled out in [`Role::rank`] rather than
//! derived from declaration order, so reordering or renaming variants can
//! never silently change who is allowed through a gate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// An access level from the ordered set `admin > manager > viewer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Viewer,
}

impl Role {
    /// All roles, most privileged first.
    pub const ALL: [Role; 3] = [Role::Admin, Role::Manager, Role::Viewer];

    /// Privilege rank of this role. `0` is the most privileged.
    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Role::Admin => 0,
            Role::Manager => 1,
            Role::Viewer => 2,
        }
    }

    /// Returns true if this role is at least as privileged as `required`.
    #[must_use]
    pub const fn satisfies(self, required: Role) -> bool {
        self.rank() <= required.rank()
    }

    /// Lowercase name used in configuration files and the CLI.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Manager => "manager",
            Role::Viewer => "viewer",
        }
    }

    /// i18n key of the human-readable role name.
    #[must_use]
    pub const fn i18n_key(self) -> &'static str {
        match self {
            Role::Admin => "role-admin",
            Role::Manager => "role-manager",
            Role::Viewer => "role-viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a known role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {:?}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Role::ALL
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
