//! Navigation menu tree: data model, validation, and permission filtering.

mod filter;
mod node;
mod tree;

pub use node::{Icon, MenuNode};
pub use tree::MenuTree;
