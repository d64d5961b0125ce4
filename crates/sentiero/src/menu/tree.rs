//! Validated menu tree.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::filter::filter_nodes;
use super::node::MenuNode;
use crate::error::{MenuError, MenuResult};
use crate::permissions::{PermissionRegistry, PermissionSet};

/// An ordered, validated navigation tree.
///
/// Constructed once at application start and never mutated; multiple
/// callers may read it concurrently without coordination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<MenuNode>", into = "Vec<MenuNode>")]
pub struct MenuTree {
    roots: Vec<MenuNode>,
}

impl MenuTree {
    /// Build a tree from root nodes, validating structure.
    ///
    /// Rejects duplicate or empty keys, empty labels, and nodes with
    /// neither a path nor children (they could never navigate anywhere
    /// nor reveal anything).
    pub fn new(roots: Vec<MenuNode>) -> MenuResult<Self> {
        let mut keys = HashSet::new();
        for node in &roots {
            validate_node(node, &mut keys)?;
        }

        debug!(nodes = keys.len(), "validated menu tree");
        Ok(Self { roots })
    }

    /// The root nodes, in order.
    pub fn roots(&self) -> &[MenuNode] {
        &self.roots
    }

    /// Total node count, groups included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Check if the tree has no entries.
    pub fn is_empty(&self) -> bool {
        self.roots.is_empty()
    }

    /// Find a node anywhere in the tree by key.
    pub fn get(&self, key: &str) -> Option<&MenuNode> {
        self.iter().find(|n| n.key == key)
    }

    /// Depth-first pre-order iteration over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = &MenuNode> {
        let mut stack: Vec<&MenuNode> = self.roots.iter().rev().collect();
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// Prune the tree down to what a user holding `permissions` may see.
    ///
    /// Pure and order-preserving. A node survives iff its `permission` is
    /// absent or held; a node whose permission is not held is removed along
    /// with all descendants without evaluating them. A surviving group left
    /// with no path and no visible children is removed as well.
    ///
    /// Filtering is idempotent, and pruning a validated tree cannot
    /// introduce structural violations, so the result skips re-validation.
    pub fn visible_for(&self, permissions: &PermissionSet) -> MenuTree {
        MenuTree {
            roots: filter_nodes(&self.roots, permissions),
        }
    }

    /// Strictly validate that every permission the menu references is
    /// registered. Intended as a load-time typo check; filtering never
    /// consults the registry.
    pub fn validate_against(&self, registry: &PermissionRegistry) -> MenuResult<()> {
        for node in self.iter() {
            if let Some(permission) = &node.permission
                && !registry.contains(permission)
            {
                return Err(MenuError::UnknownPermission {
                    key: node.key.clone(),
                    permission: permission.clone(),
                });
            }
        }
        Ok(())
    }

    /// Lenient variant of [`validate_against`](Self::validate_against):
    /// logs each unregistered permission and returns the offending strings
    /// instead of failing.
    pub fn unknown_permissions(&self, registry: &PermissionRegistry) -> Vec<String> {
        let mut unknown = Vec::new();
        for node in self.iter() {
            if let Some(permission) = &node.permission
                && !registry.contains(permission)
            {
                warn!(
                    key = %node.key,
                    permission = %permission,
                    "menu entry references unregistered permission"
                );
                unknown.push(permission.clone());
            }
        }
        unknown
    }
}

impl TryFrom<Vec<MenuNode>> for MenuTree {
    type Error = MenuError;

    fn try_from(roots: Vec<MenuNode>) -> MenuResult<Self> {
        Self::new(roots)
    }
}

impl From<MenuTree> for Vec<MenuNode> {
    fn from(tree: MenuTree) -> Self {
        tree.roots
    }
}

fn validate_node<'a>(node: &'a MenuNode, keys: &mut HashSet<&'a str>) -> MenuResult<()> {
    if node.key.is_empty() {
        return Err(MenuError::EmptyKey);
    }
    if !keys.insert(&node.key) {
        return Err(MenuError::DuplicateKey(node.key.clone()));
    }
    if node.label.is_empty() {
        return Err(MenuError::EmptyLabel {
            key: node.key.clone(),
        });
    }
    if node.path.is_none() && node.children.is_empty() {
        return Err(MenuError::DeadEnd {
            key: node.key.clone(),
        });
    }

    for child in &node.children {
        validate_node(child, keys)?;
    }
    Ok(())
}
