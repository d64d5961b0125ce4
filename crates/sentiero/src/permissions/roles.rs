//! Declarative role grants.
//!
//! Roles are named bundles of permissions assigned by the external auth
//! layer (e.g., "AlmacenOperador" grants the warehouse view/record set).
//! Resolving a user's roles yields the union permission set fed to
//! expansion and filtering.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MenuError, MenuResult};
use crate::permissions::PermissionSet;

/// A named role granting a fixed set of permissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub name: String,

    /// Admin roles bypass all permission checks, like a superuser.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub admin: bool,

    /// Permissions granted by this role.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<String>,
}

impl Role {
    /// Create a role with no grants.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin: false,
            permissions: Vec::new(),
        }
    }

    /// Create an admin role.
    pub fn admin(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            admin: true,
            permissions: Vec::new(),
        }
    }

    /// Grant a permission.
    #[must_use]
    pub fn grant(mut self, permission: impl Into<String>) -> Self {
        self.permissions.push(permission.into());
        self
    }

    /// Grant several permissions.
    #[must_use]
    pub fn grant_all<I, S>(mut self, permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.permissions
            .extend(permissions.into_iter().map(Into::into));
        self
    }

    /// The permission set this role grants on its own.
    pub fn granted(&self) -> PermissionSet {
        if self.admin {
            return PermissionSet::admin();
        }
        self.permissions.iter().cloned().collect()
    }
}

/// Catalog of roles, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct RoleSet {
    roles: BTreeMap<String, Role>,
}

impl RoleSet {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a role. Rejects duplicate names.
    pub fn register(&mut self, role: Role) -> MenuResult<()> {
        if self.roles.contains_key(&role.name) {
            return Err(MenuError::DuplicateRole(role.name));
        }
        self.roles.insert(role.name.clone(), role);
        Ok(())
    }

    /// Look up a role by name.
    pub fn get(&self, name: &str) -> Option<&Role> {
        self.roles.get(name)
    }

    /// Resolve a user's role names to the union of their grants.
    ///
    /// Any admin role makes the result an admin set. An unknown role name
    /// is a configuration error, not a silent no-op.
    pub fn resolve<'a, I>(&self, names: I) -> MenuResult<PermissionSet>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut resolved = PermissionSet::new();
        for name in names {
            let role = self
                .roles
                .get(name)
                .ok_or_else(|| MenuError::UnknownRole(name.to_string()))?;
            resolved.extend_from(&role.granted());
        }
        Ok(resolved)
    }

    /// Build a catalog from roles, e.g. a parsed config file.
    pub fn from_roles<I>(roles: I) -> MenuResult<Self>
    where
        I: IntoIterator<Item = Role>,
    {
        let mut set = Self::new();
        for role in roles {
            set.register(role)?;
        }
        debug!(roles = set.len(), "built role catalog");
        Ok(set)
    }

    /// Number of registered roles.
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// Check if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}
