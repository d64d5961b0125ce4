//! Menu node model.

use serde::{Deserialize, Serialize};

/// Icon identifier carried by a menu node.
///
/// The tree stores only this tag; the rendering layer resolves it to a
/// concrete graphic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Home,
    Container,
    Truck,
    Table,
    Store,
    Lock,
}

/// One entry in the navigation tree.
///
/// A node with `children` is a group; a node with a `path` and no children
/// is a navigable leaf. A node may carry both, in which case it is a
/// navigable group: its own permission keeps it visible even when every
/// child is pruned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuNode {
    /// Unique identifier within the whole tree.
    pub key: String,

    /// Display text.
    pub label: String,

    /// Route path (e.g., "/almacen/stock"). Absent for pure grouping nodes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Required permission to see this entry. Absent = visible to any
    /// authenticated user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permission: Option<String>,

    /// Icon tag, resolved by the rendering layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,

    /// Ordered child entries.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<MenuNode>,
}

impl MenuNode {
    /// Create a navigable leaf.
    pub fn leaf(key: impl Into<String>, label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            path: Some(path.into()),
            permission: None,
            icon: None,
            children: Vec::new(),
        }
    }

    /// Create a grouping node with child entries.
    pub fn group(
        key: impl Into<String>,
        label: impl Into<String>,
        children: Vec<MenuNode>,
    ) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            path: None,
            permission: None,
            icon: None,
            children,
        }
    }

    /// Require a permission to see this entry.
    #[must_use]
    pub fn with_permission(mut self, permission: impl Into<String>) -> Self {
        self.permission = Some(permission.into());
        self
    }

    /// Attach an icon tag.
    #[must_use]
    pub fn with_icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Attach a route path (turns a group into a navigable group).
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Whether this node has child entries.
    pub fn is_group(&self) -> bool {
        !self.children.is_empty()
    }

    /// Whether this node links to a route.
    pub fn is_navigable(&self) -> bool {
        self.path.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn leaf_builder() {
        let node = MenuNode::leaf("17", "Stock", "/almacen/stock")
            .with_permission("almacen.can_view_stock");
        assert!(node.is_navigable());
        assert!(!node.is_group());
        assert_eq!(node.permission.as_deref(), Some("almacen.can_view_stock"));
    }

    #[test]
    fn group_builder() {
        let node = MenuNode::group(
            "sub4",
            "Almacen",
            vec![MenuNode::leaf("17", "Stock", "/almacen/stock")],
        )
        .with_icon(Icon::Store);
        assert!(node.is_group());
        assert!(!node.is_navigable());
        assert_eq!(node.icon, Some(Icon::Store));
    }

    #[test]
    fn deserialize_minimal() {
        let node: MenuNode = serde_json::from_str(
            r#"{"key": "1", "label": "Inicio", "path": "/", "icon": "home"}"#,
        )
        .unwrap();
        assert_eq!(node.key, "1");
        assert_eq!(node.icon, Some(Icon::Home));
        assert!(node.permission.is_none());
        assert!(node.children.is_empty());
    }

    #[test]
    fn serialize_skips_absent_fields() {
        let json = serde_json::to_string(&MenuNode::leaf("1", "Inicio", "/")).unwrap();
        assert!(!json.contains("permission"));
        assert!(!json.contains("children"));
        assert!(!json.contains("icon"));
    }
}
