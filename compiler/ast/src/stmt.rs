use crate::{Expr, Type, ValueList, Visibility};
use kuin_span::Symbol;
use serde::{Deserialize, Serialize};
use std::fmt;

/// `ifdef`'s header keyword.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IfdefMode {
    Release,
    Debug,
}

impl fmt::Display for IfdefMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IfdefMode::Release => write!(f, "release"),
            IfdefMode::Debug => write!(f, "debug"),
        }
    }
}

/// One member of a `class` body: a nested definition plus its visibility and override
/// marker.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClassMember {
    pub visibility: Visibility,
    pub is_override: bool,
    pub def: Box<Stmt>,
}

/// A statement node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Stmt {
    If { clauses: Vec<(Option<Expr>, Vec<Stmt>)>, block_name: Option<Symbol> },
    Switch { target: Expr, cases: Vec<(Option<ValueList>, Vec<Stmt>)>, block_name: Option<Symbol> },
    While { cond: Expr, skip: Option<Expr>, body: Vec<Stmt>, block_name: Option<Symbol> },
    For { start: Expr, end: Expr, step: Option<Expr>, body: Vec<Stmt>, block_name: Option<Symbol> },
    Foreach { items: Expr, body: Vec<Stmt>, block_name: Option<Symbol> },
    Try {
        ignore: Option<ValueList>,
        body: Vec<Stmt>,
        catch_values: Option<ValueList>,
        catch_body: Vec<Stmt>,
        finally_body: Vec<Stmt>,
        block_name: Option<Symbol>,
    },
    Ifdef { mode: IfdefMode, body: Vec<Stmt>, block_name: Option<Symbol> },
    Block { body: Vec<Stmt>, block_name: Option<Symbol> },

    Do(Expr),
    Break(Option<Symbol>),
    Continue(Option<Symbol>),
    Return(Option<Expr>),
    Assert(Expr),
    Throw { code: Expr, message: Option<Expr> },
    Import(Symbol),

    Func { name: Symbol, params: Vec<(Symbol, Type)>, ret: Option<Type>, body: Vec<Stmt> },
    Var { name: Symbol, ty: Type, init: Option<Expr> },
    Const { name: Symbol, ty: Type, init: Expr },
    Alias { name: Symbol, ty: Type },
    Class { name: Symbol, parent: Option<Symbol>, members: Vec<ClassMember> },
    /// `members` is the ordered mapping produced by the running-counter algorithm: each
    /// member without an explicit value takes the counter and increments it; each with an
    /// explicit value resets the counter to one past it.
    Enum { name: Symbol, members: Vec<(Symbol, i64)> },
}

fn fmt_body(f: &mut fmt::Formatter<'_>, body: &[Stmt]) -> fmt::Result {
    for s in body {
        write!(f, "{s} ")?;
    }
    Ok(())
}

fn fmt_block_name(f: &mut fmt::Formatter<'_>, name: Option<Symbol>) -> fmt::Result {
    if let Some(n) = name {
        write!(f, " {n}")?;
    }
    Ok(())
}

impl fmt::Display for Stmt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stmt::If { clauses, block_name } => {
                write!(f, "if")?;
                fmt_block_name(f, *block_name)?;
                for (i, (cond, body)) in clauses.iter().enumerate() {
                    match (i, cond) {
                        (0, Some(c)) => write!(f, " ({c}) ")?,
                        (_, Some(c)) => write!(f, " elif ({c}) ")?,
                        (_, None) => write!(f, " else ")?,
                    }
                    fmt_body(f, body)?;
                }
                write!(f, "end if")
            }
            Stmt::Switch { target, cases, block_name } => {
                write!(f, "switch")?;
                fmt_block_name(f, *block_name)?;
                write!(f, " ({target}) ")?;
                for (values, body) in cases {
                    match values {
                        Some(vl) => write!(f, "case {vl} ")?,
                        None => write!(f, "default ")?,
                    }
                    fmt_body(f, body)?;
                }
                write!(f, "end switch")
            }
            Stmt::While { cond, skip, body, block_name } => {
                write!(f, "while")?;
                fmt_block_name(f, *block_name)?;
                match skip {
                    Some(s) => write!(f, " ({cond}, {s}) ")?,
                    None => write!(f, " ({cond}) ")?,
                }
                fmt_body(f, body)?;
                write!(f, "end while")
            }
            Stmt::For { start, end, step, body, block_name } => {
                write!(f, "for")?;
                fmt_block_name(f, *block_name)?;
                match step {
                    Some(s) => write!(f, " ({start}, {end}, {s}) ")?,
                    None => write!(f, " ({start}, {end}) ")?,
                }
                fmt_body(f, body)?;
                write!(f, "end for")
            }
            Stmt::Foreach { items, body, block_name } => {
                write!(f, "foreach")?;
                fmt_block_name(f, *block_name)?;
                write!(f, " ({items}) ")?;
                fmt_body(f, body)?;
                write!(f, "end foreach")
            }
            Stmt::Try { ignore, body, catch_values, catch_body, finally_body, block_name } => {
                write!(f, "try")?;
                fmt_block_name(f, *block_name)?;
                match ignore {
                    Some(vl) => write!(f, " ({vl}) ")?,
                    None => write!(f, " () ")?,
                }
                fmt_body(f, body)?;
                if let Some(vl) = catch_values {
                    write!(f, "catch {vl} ")?;
                    fmt_body(f, catch_body)?;
                }
                if !finally_body.is_empty() {
                    write!(f, "finally ")?;
                    fmt_body(f, finally_body)?;
                }
                write!(f, "end try")
            }
            Stmt::Ifdef { mode, body, block_name } => {
                write!(f, "ifdef")?;
                fmt_block_name(f, *block_name)?;
                write!(f, " ({mode}) ")?;
                fmt_body(f, body)?;
                write!(f, "end ifdef")
            }
            Stmt::Block { body, block_name } => {
                write!(f, "block")?;
                fmt_block_name(f, *block_name)?;
                write!(f, " ")?;
                fmt_body(f, body)?;
                write!(f, "end block")
            }
            Stmt::Do(e) => write!(f, "do {e}"),
            Stmt::Break(name) => {
                write!(f, "break")?;
                fmt_block_name(f, *name)
            }
            Stmt::Continue(name) => {
                write!(f, "continue")?;
                fmt_block_name(f, *name)
            }
            Stmt::Return(e) => match e {
                Some(e) => write!(f, "return {e}"),
                None => write!(f, "return"),
            },
            Stmt::Assert(e) => write!(f, "assert {e}"),
            Stmt::Throw { code, message } => match message {
                Some(m) => write!(f, "throw {code}, {m}"),
                None => write!(f, "throw {code}"),
            },
            Stmt::Import(name) => write!(f, "import {name}"),
            Stmt::Func { name, params, ret, body } => {
                write!(f, "func {name}(")?;
                for (i, (p, t)) in params.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{p}: {t}")?;
                }
                write!(f, ")")?;
                if let Some(r) = ret {
                    write!(f, ": {r}")?;
                }
                write!(f, " ")?;
                fmt_body(f, body)?;
                write!(f, "end func")
            }
            Stmt::Var { name, ty, init } => {
                write!(f, "var {name}: {ty}")?;
                if let Some(e) = init {
                    write!(f, " :: {e}")?;
                }
                Ok(())
            }
            Stmt::Const { name, ty, init } => write!(f, "const {name}: {ty} :: {init}"),
            Stmt::Alias { name, ty } => write!(f, "alias {name}: {ty}"),
            Stmt::Class { name, parent, members } => {
                write!(f, "class {name}")?;
                if let Some(p) = parent {
                    write!(f, ": {p}")?;
                }
                write!(f, " ")?;
                for m in members {
                    write!(f, "{}", m.visibility)?;
                    if m.is_override {
                        write!(f, "*")?;
                    }
                    write!(f, "{} ", m.def)?;
                }
                write!(f, "end class")
            }
            Stmt::Enum { name, members } => {
                write!(f, "enum {name} ")?;
                for (sym, value) in members {
                    write!(f, "{sym} :: {value} ")?;
                }
                write!(f, "end enum")
            }
        }
    }
}
