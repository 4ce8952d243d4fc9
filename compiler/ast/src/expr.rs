use crate::{Literal, Type};
use kuin_span::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual operator tags used as the `op` field of [`Expr::Op`]. Interning these through
/// `Symbol::intern` keeps `Op` a single small enum-free payload instead of a second
/// operator-kind enum.
pub mod ops {
    pub const ASSIGN: &str = "::";
    pub const ASSIGN_ADD: &str = ":+";
    pub const ASSIGN_SUB: &str = ":-";
    pub const ASSIGN_MUL: &str = ":*";
    pub const ASSIGN_DIV: &str = ":/";
    pub const ASSIGN_MOD: &str = ":%";
    pub const ASSIGN_CAT: &str = ":~";
    pub const ASSIGN_POW: &str = ":^";
    pub const TERNARY: &str = "?()";
    pub const AND: &str = "&";
    pub const OR: &str = "|";
    pub const EQ: &str = "=";
    pub const NEQ: &str = "<>";
    pub const LT: &str = "<";
    pub const GT: &str = ">";
    pub const LE: &str = "<=";
    pub const GE: &str = ">=";
    pub const CONCAT: &str = "~";
    pub const ADD: &str = "+";
    pub const SUB: &str = "-";
    pub const MUL: &str = "*";
    pub const DIV: &str = "/";
    pub const MOD: &str = "%";
    pub const NOT: &str = "!";
    pub const IS: &str = "@is";
    pub const NIS: &str = "@nis";
}

/// A comma-separated list of single values or inclusive `lo @to hi` ranges, used by
/// `switch`/`try` headers.
pub type ValueList = Vec<(Expr, Option<Expr>)>;

/// An expression node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    Literal(Literal),
    Ref(Symbol),
    Call { func: Symbol, args: Vec<Expr> },
    Index { array: Symbol, index: Box<Expr> },
    New(Type),
    Op { op: Symbol, operands: Vec<Expr> },
    /// `$` cast. Pulled out of the generic [`Expr::Op`] shape because its right operand
    /// is a [`Type`], not an `Expr`.
    Cast { expr: Box<Expr>, ty: Type },
    ValueList(ValueList),
}

impl Expr {
    pub fn op(op: &str, operands: Vec<Expr>) -> Expr {
        Expr::Op { op: Symbol::intern(op), operands }
    }

    pub fn unary(op: &str, operand: Expr) -> Expr {
        Expr::op(op, vec![operand])
    }

    pub fn binary(op: &str, lhs: Expr, rhs: Expr) -> Expr {
        Expr::op(op, vec![lhs, rhs])
    }

    pub fn ternary(cond: Expr, if_true: Expr, if_false: Expr) -> Expr {
        Expr::op(ops::TERNARY, vec![cond, if_true, if_false])
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(lit) => write!(f, "{lit}"),
            Expr::Ref(sym) => write!(f, "{sym}"),
            Expr::Call { func, args } => {
                write!(f, "{func}(")?;
                for (i, a) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{a}")?;
                }
                write!(f, ")")
            }
            Expr::Index { array, index } => write!(f, "{array}[{index}]"),
            Expr::New(ty) => write!(f, "@new {ty}"),
            Expr::Cast { expr, ty } => write!(f, "({expr} $ {ty})"),
            Expr::Op { op, operands } => {
                let op_str = op.as_str();
                match operands.as_slice() {
                    [a] if op_str == ops::IS || op_str == ops::NIS => write!(f, "({a} {op_str})"),
                    [a] => write!(f, "({op_str}{a})"),
                    [a, b] if op_str == ops::IS || op_str == ops::NIS => write!(f, "({a} {op_str} {b})"),
                    [a, b] => write!(f, "({a} {op_str} {b})"),
                    [a, b, c] if op_str == ops::TERNARY => write!(f, "({a} ?({b}, {c}))"),
                    _ => {
                        write!(f, "({op_str}")?;
                        for o in operands {
                            write!(f, " {o}")?;
                        }
                        write!(f, ")")
                    }
                }
            }
            Expr::ValueList(entries) => {
                for (i, (lo, hi)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    match hi {
                        Some(hi) => write!(f, "{lo} @to {hi}")?,
                        None => write!(f, "{lo}")?,
                    }
                }
                Ok(())
            }
        }
    }
}
