//! Declarative permission implications.
//!
//! The permission naming scheme documents a hierarchy — `can_manage_*`
//! includes `can_view_*`, `can_create_*`, `can_edit_*`, and `can_delete_*`
//! for the same resource — but the filter matches exact strings only. The
//! hierarchy lives here as an explicit map applied once to the user's set
//! before filtering; nothing inspects permission-string structure at
//! check time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::permissions::PermissionSet;

/// Explicit map of permission implications.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImplicationMap {
    implies: HashMap<String, Vec<String>>,
}

impl ImplicationMap {
    /// Create an empty map (expansion becomes the identity).
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare that holding `permission` also grants every permission in
    /// `implied`.
    pub fn imply<I, S>(&mut self, permission: impl Into<String>, implied: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.implies
            .entry(permission.into())
            .or_default()
            .extend(implied.into_iter().map(Into::into));
    }

    /// Declare the documented manage hierarchy for one resource:
    /// `module.can_manage_<resource>` grants view, create, edit, and
    /// delete on the same resource.
    pub fn manage_implies(&mut self, module: &str, resource: &str) {
        self.imply(
            format!("{module}.can_manage_{resource}"),
            ["view", "create", "edit", "delete"]
                .map(|action| format!("{module}.can_{action}_{resource}")),
        );
    }

    /// Permissions directly implied by `permission`, if any declared.
    pub fn implied_by(&self, permission: &str) -> &[String] {
        self.implies
            .get(permission)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Expand a user's permission set to its transitive closure under the
    /// declared implications. Pure; the input set is untouched. Admin sets
    /// pass through unchanged since they already match everything.
    pub fn expand(&self, permissions: &PermissionSet) -> PermissionSet {
        let mut expanded = permissions.clone();
        let mut pending: Vec<String> = permissions.iter().map(str::to_string).collect();

        while let Some(permission) = pending.pop() {
            for implied in self.implied_by(&permission) {
                if !expanded.contains(implied) {
                    expanded.grant(implied.clone());
                    pending.push(implied.clone());
                }
            }
        }
        expanded
    }

    /// Number of permissions with declared implications.
    pub fn len(&self) -> usize {
        self.implies.len()
    }

    /// Check if no implications are declared.
    pub fn is_empty(&self) -> bool {
        self.implies.is_empty()
    }
}
