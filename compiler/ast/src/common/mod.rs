//! Small shared pieces of the AST that don't belong to any single node kind.

pub mod visibility;
pub use visibility::Visibility;
