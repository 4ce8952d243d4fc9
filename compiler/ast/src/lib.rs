//! The Abstract Syntax Tree for the Kuin programming language.
//!
//! Every node is owned by exactly one parent with no back-edges, and the tree is immutable
//! once parsing returns it. Nodes carry no source location — spans live only in
//! [`kuin_errors`] diagnostics, never in the tree itself, which keeps structural
//! `PartialEq` simple instead of requiring a span-blind equality impl.

pub mod common;
pub use common::Visibility;

mod literal;
pub use literal::Literal;

mod type_;
pub use type_::{ContainerKind, Type};

mod expr;
pub use expr::{ops, Expr, ValueList};

mod stmt;
pub use stmt::{ClassMember, IfdefMode, Stmt};

pub use kuin_span::Symbol;
