//! Sentiero — permission-gated navigation menus.
//!
//! Models a static navigation menu tree whose entries are gated by opaque
//! `module.action` permission strings, and prunes that tree down to what a
//! given user may see. Filtering is a UI convenience only: every route
//! reachable through a visible entry must still be enforced server-side by
//! the authorization layer that owns the permission strings.

pub mod config;
pub mod error;
pub mod menu;
pub mod permissions;

pub use error::MenuError;
pub use menu::{Icon, MenuNode, MenuTree};
pub use permissions::{ImplicationMap, PermissionRegistry, PermissionSet, Role, RoleSet};

pub mod prelude {
    pub use crate::error::MenuError;
    pub use crate::menu::{Icon, MenuNode, MenuTree};
    pub use crate::permissions::{
        ImplicationMap, PermissionKind, PermissionRegistry, PermissionSet, Role, RoleSet,
    };
}
