//! Permission sets, the known-permission registry, implication expansion,
//! and declarative role grants.

mod expand;
mod registry;
mod roles;
mod set;

pub use expand::ImplicationMap;
pub use registry::{PermissionDef, PermissionKind, PermissionRegistry};
pub use roles::{Role, RoleSet};
pub use set::PermissionSet;
