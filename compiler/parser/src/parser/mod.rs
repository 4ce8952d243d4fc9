//! The recursive-descent parser proper, built on top of `tokenizer`'s flat token stream.
//!
//! A `context` module holds the token-stream cursor and its `bump`/`check`/`eat`/`expect`
//! primitives, one module per grammar area (`qualname`, `type_`, `expression`,
//! `statement`), and a `file` module ties everything together behind the crate's two
//! public entry points.

pub(crate) mod context;
pub(crate) mod expression;
pub(crate) mod file;
pub(crate) mod qualname;
pub(crate) mod statement;
pub(crate) mod type_;

pub use file::{parse_expression, parse_program};
