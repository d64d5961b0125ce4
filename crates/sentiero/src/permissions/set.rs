//! Permission set held by a user for one request/session.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// The set of permission strings held by the current user.
///
/// Populated by the external authentication/authorization collaborator and
/// read-only from this subsystem's perspective. An `admin` set passes every
/// check, mirroring the superuser bypass of the backing auth layer, so the
/// menu filter needs no special casing for administrators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionSet {
    #[serde(default)]
    permissions: HashSet<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    admin: bool,
}

impl PermissionSet {
    /// Empty set: only ungated entries are visible.
    pub fn new() -> Self {
        Self::default()
    }

    /// Administrator set: `contains` is true for every permission.
    pub fn admin() -> Self {
        Self {
            permissions: HashSet::new(),
            admin: true,
        }
    }

    /// Whether this set bypasses all permission checks.
    pub fn is_admin(&self) -> bool {
        self.admin
    }

    /// Check whether a permission is held. Exact string match; the
    /// documented manage-implies-view hierarchy is applied beforehand via
    /// [`ImplicationMap::expand`](crate::permissions::ImplicationMap::expand),
    /// never here.
    pub fn contains(&self, permission: &str) -> bool {
        self.admin || self.permissions.contains(permission)
    }

    /// Add a permission while assembling the set.
    pub fn grant(&mut self, permission: impl Into<String>) {
        self.permissions.insert(permission.into());
    }

    /// Merge another set into this one. Admin status is sticky.
    pub fn extend_from(&mut self, other: &PermissionSet) {
        self.admin |= other.admin;
        self.permissions
            .extend(other.permissions.iter().cloned());
    }

    /// Number of explicitly held permissions (zero for a pure admin set).
    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    /// Check if no explicit permissions are held.
    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }

    /// Iterate over the explicitly held permission strings.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.permissions.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for PermissionSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            permissions: iter.into_iter().map(Into::into).collect(),
            admin: false,
        }
    }
}
