//! String interning for identifiers, qualified names, and operator tags.
//!
//! A `Symbol` is a cheap, `Copy`, interned handle onto a `&'static str`. All
//! interning happens through a thread-local [`Session`], matching the
//! `rustc_span`-style pattern the tokenizer was written against: a parse
//! entry point opens a session for the duration of the call so that
//! `Symbol::intern` has somewhere to store its strings.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An interned string.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Interns `string` in the current session, returning a handle to it.
    ///
    /// # Panics
    /// Panics if called outside of a [`Session`] (see [`create_session_if_not_set_then`]).
    pub fn intern(string: &str) -> Self {
        SESSION_GLOBALS.with(|session| session.symbol_interner.borrow_mut().intern(string))
    }

    /// Returns the underlying string. Borrows from the active session.
    pub fn as_str(&self) -> &'static str {
        SESSION_GLOBALS.with(|session| session.symbol_interner.borrow().get(*self))
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Symbol {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Symbol {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Ok(Symbol::intern(&s))
    }
}

/// Interns strings into a growable table, leaking them for the `'static` lifetime of the
/// owning session. Leaked memory is reclaimed when the process exits; sessions are expected
/// to live for the duration of a single `parse_expression`/`parse_program` call.
#[derive(Default)]
struct Interner {
    strings: IndexSet<&'static str, fxhash::FxBuildHasher>,
}

impl Interner {
    fn intern(&mut self, string: &str) -> Symbol {
        if let Some(index) = self.strings.get_index_of(string) {
            return Symbol(index as u32);
        }
        let leaked: &'static str = Box::leak(string.to_owned().into_boxed_str());
        let (index, _) = self.strings.insert_full(leaked);
        Symbol(index as u32)
    }

    fn get(&self, symbol: Symbol) -> &'static str {
        self.strings.get_index(symbol.0 as usize).expect("interned symbol out of range")
    }
}

struct SessionGlobals {
    symbol_interner: std::cell::RefCell<Interner>,
}

impl SessionGlobals {
    fn new() -> Self {
        SessionGlobals { symbol_interner: std::cell::RefCell::new(Interner::default()) }
    }
}

scoped_tls::scoped_thread_local!(static SESSION_GLOBALS: SessionGlobals);

/// Runs `f` with a fresh interning session active on this thread, unless one is already
/// active (nested parses reuse the outer session rather than shadowing it).
pub fn create_session_if_not_set_then<R>(f: impl FnOnce() -> R) -> R {
    if SESSION_GLOBALS.is_set() {
        f()
    } else {
        let session = SessionGlobals::new();
        SESSION_GLOBALS.set(&session, f)
    }
}
