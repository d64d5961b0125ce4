//! Recursive permission pruning.

use super::node::MenuNode;
use crate::permissions::PermissionSet;

/// Filter a sibling list, preserving order among survivors.
pub(super) fn filter_nodes(nodes: &[MenuNode], permissions: &PermissionSet) -> Vec<MenuNode> {
    nodes
        .iter()
        .filter_map(|node| filter_node(node, permissions))
        .collect()
}

/// Visibility check for one node.
///
/// A gated node the user cannot see is dropped along with its entire
/// subtree, without evaluating the children. A surviving node keeps only
/// its visible children; if that leaves it with no path and no children it
/// is dropped too, since it would render as an empty group.
fn filter_node(node: &MenuNode, permissions: &PermissionSet) -> Option<MenuNode> {
    if let Some(required) = &node.permission
        && !permissions.contains(required)
    {
        return None;
    }

    let children = filter_nodes(&node.children, permissions);
    if node.path.is_none() && children.is_empty() {
        return None;
    }

    Some(MenuNode {
        children,
        ..node.clone()
    })
}
