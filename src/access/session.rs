// SPDX-License-Identifier: MPL-2.0
//! The authentication collaborator consulted by gates.

use super::permissions::Permissions;
use super::role::Role;
use crate::config::SessionConfig;

/// Source of the caller's role and permission grants.
///
/// Implementations report an unrecognized or missing role as `None`;
/// gates treat that as a denial.
pub trait Authorizer {
    /// The caller's current role, or `None` if it is not a known role.
    fn role(&self) -> Option<Role>;

    /// Whether the named capability is granted. Unknown keys are not.
    fn has_permission(&self, key: &str) -> bool;
}

/// In-memory session built from a role name and a permission map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    role_name: String,
    role: Option<Role>,
    permissions: Permissions,
}

impl Session {
    /// Creates a session from a raw role name.
    ///
    /// The name is kept verbatim so it can be shown in diagnostics even
    /// when it does not parse.
    pub fn new(role_name: impl Into<String>, permissions: Permissions) -> Self {
        let role_name = role_name.into();
        let role = role_name.parse().ok();
        Self {
            role_name,
            role,
            permissions,
        }
    }

    /// Creates a session with a known role.
    #[must_use]
    pub fn with_role(role: Role, permissions: Permissions) -> Self {
        Self {
            role_name: role.as_str().to_string(),
            role: Some(role),
            permissions,
        }
    }

    /// Builds the session described by the `[session]` config section.
    #[must_use]
    pub fn from_config(config: &SessionConfig) -> Self {
        let role_name = config
            .role
            .clone()
            .unwrap_or_else(|| crate::config::DEFAULT_ROLE.to_string());
        Self::new(role_name, Permissions::from(config.permissions.clone()))
    }

    /// The role name as supplied, recognized or not.
    #[must_use]
    pub fn role_name(&self) -> &str {
        &self.role_name
    }

    #[must_use]
    pub fn permissions(&self) -> &Permissions {
        &self.permissions
    }

    /// Switches the session to another role, keeping its grants.
    pub fn set_role(&mut self, role: Role) {
        self.role_name = role.as_str().to_string();
        self.role = Some(role);
    }

    /// Sets a single permission grant.
    pub fn set_permission(&mut self, key: impl Into<String>, granted: bool) {
        self.permissions.set(key, granted);
    }
}

impl Authorizer for Session {
    fn role(&self) -> Option<Role> {
        self.role
    }

    fn has_permission(&self, key: &str) -> bool {
        self.permissions.is_granted(key)
    }
}

impl<A: Authorizer + ?Sized> Authorizer for &A {
    fn role(&self) -> Option<Role> {
        (**self).role()
    }

    fn has_permission(&self, key: &str) -> bool {
        (**self).has_permission(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn recognized_role_name_is_parsed() {
        let session = Session::new("Manager", Permissions::new());
        assert_eq!(session.role(), Some(Role::Manager));
        assert_eq!(session.role_name(), "Manager");
    }

    #[test]
    fn unrecognized_role_name_reports_none() {
        let session = Session::new("root", Permissions::new());
        assert_eq!(session.role(), None);
        assert_eq!(session.role_name(), "root");
    }

    #[test]
    fn from_config_uses_default_role_when_missing() {
        let config = SessionConfig {
            role: None,
            permissions: BTreeMap::new(),
        };
        let session = Session::from_config(&config);
        assert_eq!(session.role(), Some(Role::Viewer));
    }

    #[test]
    fn from_config_carries_permissions() {
        let mut permissions = BTreeMap::new();
        permissions.insert("reports.export".to_string(), true);
        let config = SessionConfig {
            role: Some("admin".to_string()),
            permissions,
        };
        let session = Session::from_config(&config);
        assert!(session.has_permission("reports.export"));
        assert!(!session.has_permission("users.manage"));
    }

    #[test]
    fn set_role_replaces_unrecognized_role() {
        let mut session = Session::new("???", Permissions::new());
        session.set_role(Role::Admin);
        assert_eq!(session.role(), Some(Role::Admin));
        assert_eq!(session.role_name(), "admin");
    }
}
