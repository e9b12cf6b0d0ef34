// SPDX-License-Identifier: MPL-2.0
//! Access decisions for gated content.
//!
//! A [`Gate`] carries an optional role requirement and an optional
//! permission requirement. Evaluating it against an [`Authorizer`] yields
//! an [`Access`] that tells the caller whether to render the gated content
//! or its fallback. Every invalid input resolves to a denial.

use super::role::Role;
use super::session::Authorizer;
use std::fmt;

/// Role requirement of a gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRequirement {
    /// The caller must be at least as privileged as this role.
    AtLeast(Role),
    /// The requirement named a role that does not exist. Nobody passes.
    Unrecognized(String),
}

/// Why a gate refused access.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Denial {
    /// The caller's role is missing or not a known role.
    UnrecognizedRole,
    /// The gate itself names an unknown role.
    UnrecognizedRequirement(String),
    /// The caller's role ranks below the required one.
    InsufficientRole { current: Role, required: Role },
    /// The required capability is not granted.
    MissingPermission(String),
}

impl Denial {
    /// i18n key of the user-facing explanation.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Denial::UnrecognizedRole => "access-denied-unknown-role",
            Denial::UnrecognizedRequirement(_) => "access-denied-invalid-requirement",
            Denial::InsufficientRole { .. } => "access-denied-insufficient-role",
            Denial::MissingPermission(_) => "access-denied-missing-permission",
        }
    }

    /// Short machine-readable label used in diagnostics.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Denial::UnrecognizedRole => "unrecognized_role",
            Denial::UnrecognizedRequirement(_) => "unrecognized_requirement",
            Denial::InsufficientRole { .. } => "insufficient_role",
            Denial::MissingPermission(_) => "missing_permission",
        }
    }
}

impl fmt::Display for Denial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Denial::UnrecognizedRole => write!(f, "current role is not recognized"),
            Denial::UnrecognizedRequirement(name) => {
                write!(f, "required role {:?} is not recognized", name)
            }
            Denial::InsufficientRole { current, required } => {
                write!(f, "role {} does not satisfy required role {}", current, required)
            }
            Denial::MissingPermission(key) => write!(f, "permission {:?} is not granted", key),
        }
    }
}

/// Outcome of evaluating a gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    Granted,
    Denied(Denial),
}

impl Access {
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Access::Granted)
    }

    #[must_use]
    pub fn denial(&self) -> Option<&Denial> {
        match self {
            Access::Granted => None,
            Access::Denied(denial) => Some(denial),
        }
    }
}

/// Role and permission requirements guarding a piece of UI.
///
/// # Example
///
/// ```
/// use iced_dashboard::access::{Gate, Permissions, Role, Session};
///
/// let session = Session::with_role(Role::Manager, Permissions::new().with("reports.export"));
///
/// let gate = Gate::new()
///     .require_role(Role::Manager)
///     .require_permission("reports.export");
/// assert!(gate.evaluate(&session).is_granted());
///
/// let admin_only = Gate::new().require_role(Role::Admin);
/// assert!(!admin_only.evaluate(&session).is_granted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Gate {
    role: Option<RoleRequirement>,
    permission: Option<String>,
}

impl Gate {
    /// A gate with no requirements. It still refuses unrecognized roles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn require_role(mut self, role: Role) -> Self {
        self.role = Some(RoleRequirement::AtLeast(role));
        self
    }

    /// Requires a role given by name. Unknown names make the gate deny everyone.
    #[must_use]
    pub fn require_role_named(mut self, name: &str) -> Self {
        self.role = Some(match name.parse() {
            Ok(role) => RoleRequirement::AtLeast(role),
            Err(_) => RoleRequirement::Unrecognized(name.to_string()),
        });
        self
    }

    #[must_use]
    pub fn require_permission(mut self, key: impl Into<String>) -> Self {
        self.permission = Some(key.into());
        self
    }

    #[must_use]
    pub fn role_requirement(&self) -> Option<&RoleRequirement> {
        self.role.as_ref()
    }

    #[must_use]
    pub fn required_role(&self) -> Option<Role> {
        match self.role {
            Some(RoleRequirement::AtLeast(role)) => Some(role),
            _ => None,
        }
    }

    #[must_use]
    pub fn permission_requirement(&self) -> Option<&str> {
        self.permission.as_deref()
    }

    /// Decides whether the caller described by `auth` may see the gated content.
    ///
    /// The role check runs first; a failing permission check denies access
    /// regardless of the role outcome. The permission oracle is not consulted
    /// when the gate has no permission requirement.
    pub fn evaluate<A: Authorizer + ?Sized>(&self, auth: &A) -> Access {
        let Some(current) = auth.role() else {
            return Access::Denied(Denial::UnrecognizedRole);
        };

        match &self.role {
            Some(RoleRequirement::Unrecognized(name)) => {
                return Access::Denied(Denial::UnrecognizedRequirement(name.clone()));
            }
            Some(RoleRequirement::AtLeast(required)) if !current.satisfies(*required) => {
                return Access::Denied(Denial::InsufficientRole {
                    current,
                    required: *required,
                });
            }
            _ => {}
        }

        if let Some(key) = &self.permission {
            if !auth.has_permission(key) {
                return Access::Denied(Denial::MissingPermission(key.clone()));
            }
        }

        Access::Granted
    }
}
