//! Menu, permission-catalog, and role-catalog configuration files.
//!
//! The menu tree is static configuration: loaded once at application
//! start, validated, then shared read-only. TOML is the canonical on-disk
//! format; JSON is accepted for menus delivered by other systems (the
//! canonical JSON shape is a top-level array of nodes).

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::menu::{MenuNode, MenuTree};
use crate::permissions::{PermissionKind, PermissionRegistry, Role, RoleSet};

#[derive(Deserialize)]
struct MenuFile {
    menu: Vec<MenuNode>,
}

#[derive(Deserialize)]
struct CatalogFile {
    permissions: Vec<CatalogEntry>,
}

#[derive(Deserialize)]
struct CatalogEntry {
    name: String,
    kind: PermissionKind,
    #[serde(default)]
    description: Option<String>,
}

#[derive(Deserialize)]
struct RolesFile {
    roles: Vec<Role>,
}

/// Parse and validate a menu tree from a TOML document with a `[[menu]]`
/// array of tables.
pub fn menu_from_toml_str(input: &str) -> Result<MenuTree> {
    let file: MenuFile = toml::from_str(input).context("failed to parse menu TOML")?;
    let tree = MenuTree::new(file.menu).context("invalid menu structure")?;
    Ok(tree)
}

/// Parse and validate a menu tree from a JSON array of nodes.
pub fn menu_from_json_str(input: &str) -> Result<MenuTree> {
    let tree: MenuTree = serde_json::from_str(input).context("failed to parse menu JSON")?;
    Ok(tree)
}

/// Load and validate the menu tree from a TOML file.
pub fn load_menu(path: impl AsRef<Path>) -> Result<MenuTree> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read menu config {}", path.display()))?;
    let tree = menu_from_toml_str(&input)
        .with_context(|| format!("invalid menu config {}", path.display()))?;

    debug!(path = %path.display(), entries = tree.len(), "loaded menu config");
    Ok(tree)
}

/// Parse a permission catalog from a TOML document with a
/// `[[permissions]]` array of tables.
pub fn registry_from_toml_str(input: &str) -> Result<PermissionRegistry> {
    let file: CatalogFile =
        toml::from_str(input).context("failed to parse permission catalog TOML")?;

    let mut registry = PermissionRegistry::new();
    for entry in file.permissions {
        registry
            .register_with_description(&entry.name, entry.kind, entry.description)
            .context("invalid permission catalog")?;
    }
    Ok(registry)
}

/// Load a permission catalog from a TOML file.
pub fn load_registry(path: impl AsRef<Path>) -> Result<PermissionRegistry> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read permission catalog {}", path.display()))?;
    let registry = registry_from_toml_str(&input)
        .with_context(|| format!("invalid permission catalog {}", path.display()))?;

    debug!(path = %path.display(), permissions = registry.len(), "loaded permission catalog");
    Ok(registry)
}

/// Parse a role catalog from a TOML document with a `[[roles]]` array of
/// tables.
pub fn roles_from_toml_str(input: &str) -> Result<RoleSet> {
    let file: RolesFile = toml::from_str(input).context("failed to parse role catalog TOML")?;
    let roles = RoleSet::from_roles(file.roles).context("invalid role catalog")?;
    Ok(roles)
}

/// Load a role catalog from a TOML file.
pub fn load_roles(path: impl AsRef<Path>) -> Result<RoleSet> {
    let path = path.as_ref();
    let input = fs::read_to_string(path)
        .with_context(|| format!("failed to read role catalog {}", path.display()))?;
    let roles = roles_from_toml_str(&input)
        .with_context(|| format!("invalid role catalog {}", path.display()))?;

    debug!(path = %path.display(), roles = roles.len(), "loaded role catalog");
    Ok(roles)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::menu::Icon;

    #[test]
    fn menu_from_toml() {
        let tree = menu_from_toml_str(
            r#"
            [[menu]]
            key = "1"
            label = "Inicio"
            path = "/"
            icon = "home"

            [[menu]]
            key = "sub4"
            label = "Almacen"
            icon = "store"
            permission = "almacen.can_view_warehouse"

                [[menu.children]]
                key = "17"
                label = "Stock"
                path = "/almacen/stock"
                permission = "almacen.can_view_stock"
            "#,
        )
        .unwrap();

        assert_eq!(tree.roots().len(), 2);
        assert_eq!(tree.get("1").unwrap().icon, Some(Icon::Home));
        assert_eq!(
            tree.get("17").unwrap().permission.as_deref(),
            Some("almacen.can_view_stock")
        );
    }

    #[test]
    fn menu_from_json_array() {
        let tree = menu_from_json_str(
            r#"[
                {"key": "1", "label": "Inicio", "path": "/"},
                {"key": "sub5", "label": "Usuarios",
                 "permission": "usuarios.can_view_users",
                 "children": [
                    {"key": "20", "label": "Usuarios", "path": "/usuarios",
                     "permission": "usuarios.can_view_users"}
                 ]}
            ]"#,
        )
        .unwrap();
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn menu_structural_errors_surface() {
        let err = menu_from_toml_str(
            r#"
            [[menu]]
            key = "1"
            label = "A"
            path = "/"

            [[menu]]
            key = "1"
            label = "B"
            path = "/b"
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("duplicate menu key"));
    }

    #[test]
    fn catalog_from_toml() {
        let registry = registry_from_toml_str(
            r#"
            [[permissions]]
            name = "almacen.can_view_warehouse"
            kind = "modular"
            description = "Ver el modulo de almacen"

            [[permissions]]
            name = "almacen.can_create_movements"
            kind = "granular"
            "#,
        )
        .unwrap();

        assert_eq!(registry.len(), 2);
        let def = registry.get("almacen.can_view_warehouse").unwrap();
        assert_eq!(def.kind, PermissionKind::Modular);
        assert!(def.description.is_some());
    }

    #[test]
    fn catalog_rejects_bad_identifier() {
        let err = registry_from_toml_str(
            r#"
            [[permissions]]
            name = "not-an-identifier"
            kind = "modular"
            "#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid permission identifier"));
    }

    #[test]
    fn roles_from_toml() {
        let roles = roles_from_toml_str(
            r#"
            [[roles]]
            name = "SystemAdmin"
            admin = true

            [[roles]]
            name = "AlmacenOperador"
            permissions = ["almacen.can_view_warehouse", "almacen.can_view_stock"]
            "#,
        )
        .unwrap();

        assert!(roles.resolve(["SystemAdmin"]).unwrap().is_admin());
        assert_eq!(roles.resolve(["AlmacenOperador"]).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_has_path_in_error() {
        let err = load_menu("/nonexistent/menu.toml").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/menu.toml"));
    }
}
