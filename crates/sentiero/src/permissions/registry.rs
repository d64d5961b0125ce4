//! Catalog of known permissions.
//!
//! The registry is a load-time typo check only: the menu filter matches
//! opaque strings and never consults it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{MenuError, MenuResult};

/// Granularity of a permission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PermissionKind {
    /// Coarse-grained: controls access to an entire functional area
    /// (e.g., `almacen.can_view_warehouse`).
    Modular,
    /// Fine-grained: controls one action within an area
    /// (e.g., `almacen.can_delete_movements`).
    Granular,
}

/// A registered permission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermissionDef {
    /// Full identifier, `module.action`.
    pub name: String,
    /// Module part of the identifier.
    pub module: String,
    /// Action part of the identifier.
    pub action: String,
    pub kind: PermissionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Registry of all known permissions, keyed by full identifier.
#[derive(Debug, Clone, Default)]
pub struct PermissionRegistry {
    defs: BTreeMap<String, PermissionDef>,
}

impl PermissionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a permission, validating the `module.action` identifier
    /// format. Rejects duplicates.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        kind: PermissionKind,
    ) -> MenuResult<&PermissionDef> {
        self.register_with_description(name, kind, None)
    }

    /// Register a permission with a human-readable description.
    pub fn register_with_description(
        &mut self,
        name: impl Into<String>,
        kind: PermissionKind,
        description: Option<String>,
    ) -> MenuResult<&PermissionDef> {
        let name = name.into();
        let (module, action) = parse_identifier(&name)?;
        let def = PermissionDef {
            module: module.to_string(),
            action: action.to_string(),
            name: name.clone(),
            kind,
            description,
        };

        if self.defs.contains_key(&name) {
            return Err(MenuError::DuplicatePermission(name));
        }
        Ok(self.defs.entry(name).or_insert(def))
    }

    /// Check whether a permission is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.defs.contains_key(name)
    }

    /// Look up a registered permission.
    pub fn get(&self, name: &str) -> Option<&PermissionDef> {
        self.defs.get(name)
    }

    /// All registered permissions, ordered by identifier.
    pub fn iter(&self) -> impl Iterator<Item = &PermissionDef> {
        self.defs.values()
    }

    /// Registered permissions belonging to one module.
    pub fn module(&self, module: &str) -> impl Iterator<Item = &PermissionDef> {
        self.defs.values().filter(move |d| d.module == module)
    }

    /// Number of registered permissions.
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// Build a registry from `(name, kind)` pairs, e.g. a parsed catalog
    /// file.
    pub fn from_defs<I, S>(defs: I) -> MenuResult<Self>
    where
        I: IntoIterator<Item = (S, PermissionKind)>,
        S: Into<String>,
    {
        let mut registry = Self::new();
        for (name, kind) in defs {
            registry.register(name, kind)?;
        }
        debug!(permissions = registry.len(), "built permission registry");
        Ok(registry)
    }
}

/// Split and validate a `module.action` identifier.
///
/// Both parts must be non-empty lowercase ASCII letters, digits, or
/// underscores, joined by exactly one dot.
fn parse_identifier(name: &str) -> MenuResult<(&str, &str)> {
    let invalid = || MenuError::InvalidIdentifier(name.to_string());

    let (module, action) = name.split_once('.').ok_or_else(invalid)?;
    if module.is_empty() || action.is_empty() || action.contains('.') {
        return Err(invalid());
    }
    let valid_part = |part: &str| {
        part.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    };
    if !valid_part(module) || !valid_part(action) {
        return Err(invalid());
    }
    Ok((module, action))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn register_splits_identifier() {
        let mut registry = PermissionRegistry::new();
        let def = registry
            .register("almacen.can_view_stock", PermissionKind::Modular)
            .unwrap();
        assert_eq!(def.module, "almacen");
        assert_eq!(def.action, "can_view_stock");
        assert!(registry.contains("almacen.can_view_stock"));
    }

    #[test]
    fn rejects_malformed_identifiers() {
        let mut registry = PermissionRegistry::new();
        for bad in [
            "nodot",
            ".can_view",
            "almacen.",
            "almacen.can.view",
            "Almacen.can_view_stock",
            "almacen.can view",
            "",
        ] {
            let err = registry.register(bad, PermissionKind::Granular).unwrap_err();
            assert!(
                matches!(err, MenuError::InvalidIdentifier(_)),
                "expected rejection for {bad:?}"
            );
        }
    }

    #[test]
    fn rejects_duplicate_registration() {
        let mut registry = PermissionRegistry::new();
        registry
            .register("usuarios.can_view_users", PermissionKind::Modular)
            .unwrap();
        let err = registry
            .register("usuarios.can_view_users", PermissionKind::Granular)
            .unwrap_err();
        assert!(matches!(err, MenuError::DuplicatePermission(_)));
    }

    #[test]
    fn module_filter() {
        let registry = PermissionRegistry::from_defs([
            ("almacen.can_view_stock", PermissionKind::Modular),
            ("almacen.can_create_movements", PermissionKind::Granular),
            ("usuarios.can_view_users", PermissionKind::Modular),
        ])
        .unwrap();
        assert_eq!(registry.module("almacen").count(), 2);
        assert_eq!(registry.len(), 3);
    }
}
