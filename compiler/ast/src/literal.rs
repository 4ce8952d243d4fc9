use serde::{Deserialize, Serialize};
use std::fmt;

/// A literal value produced by the lexer: numeric (integer or real), string, character,
/// or boolean.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Int(i64),
    Real(f64),
    Str(String),
    Char(char),
    Bool(bool),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Int(n) => write!(f, "{n}"),
            Literal::Real(x) => {
                if x.fract() == 0.0 && x.is_finite() {
                    write!(f, "{x}.0")
                } else {
                    write!(f, "{x}")
                }
            }
            Literal::Str(s) => write!(f, "\"{}\"", escape_text(s)),
            Literal::Char(c) => write!(f, "'{}'", escape_text(&c.to_string())),
            Literal::Bool(b) => write!(f, "{b}"),
        }
    }
}

/// Re-applies the lexer's escape table in reverse, for the pretty-printer.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            other => out.push(other),
        }
    }
    out
}
