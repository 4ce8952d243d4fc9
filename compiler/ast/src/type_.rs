use crate::Expr;
use kuin_span::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the three built-in container kinds a [`Type::Container`] names.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContainerKind {
    List,
    Stack,
    Queue,
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::List => write!(f, "list"),
            ContainerKind::Stack => write!(f, "stack"),
            ContainerKind::Queue => write!(f, "queue"),
        }
    }
}

/// A type expression.
///
/// Container, dict, and func types are written with an explicit parenthesized argument
/// list (`list(int)`, `dict(int, char)`, `func(int, int): bool`), which keeps the grammar
/// LL(1) without lookahead past the leading keyword.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Type {
    Primitive(Symbol),
    Named(Symbol),
    Container { kind: ContainerKind, item: Box<Type> },
    Dict { key: Box<Type>, value: Box<Type> },
    Func { args: Vec<Type>, ret: Box<Type> },
    /// One entry per `[]`/`[N]` dimension, left-to-right; `None` for an empty-bracket
    /// dimension.
    Array { base: Box<Type>, sizes: Vec<Option<Expr>> },
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Primitive(sym) | Type::Named(sym) => write!(f, "{sym}"),
            Type::Container { kind, item } => write!(f, "{kind}({item})"),
            Type::Dict { key, value } => write!(f, "dict({key}, {value})"),
            Type::Func { args, ret } => {
                write!(f, "func(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, "): {ret}")
            }
            Type::Array { base, sizes } => {
                for size in sizes {
                    write!(f, "[")?;
                    if let Some(e) = size {
                        write!(f, "{e}")?;
                    }
                    write!(f, "]")?;
                }
                write!(f, "{base}")
            }
        }
    }
}
