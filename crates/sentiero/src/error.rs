//! Subsystem error types.

use thiserror::Error;

/// Errors raised while constructing or validating menu configuration.
///
/// Filtering itself has no error conditions: a missing `permission` field
/// means "public" and an unknown permission string simply never matches.
/// Everything here is rejected at configuration-load time.
#[derive(Debug, Error)]
pub enum MenuError {
    #[error("duplicate menu key {0:?}")]
    DuplicateKey(String),

    #[error("menu node with empty key")]
    EmptyKey,

    #[error("menu node {key:?} has an empty label")]
    EmptyLabel { key: String },

    #[error("menu node {key:?} has neither a path nor children")]
    DeadEnd { key: String },

    #[error("menu node {key:?} references unregistered permission {permission:?}")]
    UnknownPermission { key: String, permission: String },

    #[error("invalid permission identifier {0:?}: expected lowercase \"module.action\"")]
    InvalidIdentifier(String),

    #[error("permission {0:?} already registered")]
    DuplicatePermission(String),

    #[error("duplicate role {0:?}")]
    DuplicateRole(String),

    #[error("unknown role {0:?}")]
    UnknownRole(String),
}

/// Result type alias using MenuError.
pub type MenuResult<T> = Result<T, MenuError>;
