//! Byte positions and spans of source text.

use serde::{Deserialize, Serialize};
use std::{
    fmt,
    ops::{Add, Sub},
};

/// A byte offset into a source string.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BytePos(pub u32);

impl BytePos {
    pub fn from_usize(n: usize) -> Self {
        BytePos(n as u32)
    }

    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for BytePos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BytePos({})", self.0)
    }
}

/// Common operations over a type that tracks a byte position.
pub trait Pos {
    fn from_usize(n: usize) -> Self;
    fn to_usize(self) -> usize;
}

impl Pos for BytePos {
    fn from_usize(n: usize) -> Self {
        BytePos::from_usize(n)
    }

    fn to_usize(self) -> usize {
        self.to_usize()
    }
}

impl Add for BytePos {
    type Output = BytePos;

    fn add(self, rhs: BytePos) -> BytePos {
        BytePos(self.0 + rhs.0)
    }
}

impl Sub for BytePos {
    type Output = BytePos;

    fn sub(self, rhs: BytePos) -> BytePos {
        BytePos(self.0 - rhs.0)
    }
}

/// A half-open `[lo, hi)` byte range into the original source text.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub lo: BytePos,
    pub hi: BytePos,
}

impl Span {
    pub fn new(lo: BytePos, hi: BytePos) -> Self {
        Span { lo, hi }
    }

    /// A span carrying no real location; used when a node is synthesized rather than parsed.
    pub fn dummy() -> Self {
        Span { lo: BytePos(0), hi: BytePos(0) }
    }

    pub fn is_dummy(&self) -> bool {
        self.lo == self.hi && self.lo == BytePos(0)
    }

    /// The smallest span that contains both `self` and `other`.
    pub fn to(self, other: Span) -> Span {
        Span::new(self.lo.min(other.lo), self.hi.max(other.hi))
    }
}

impl Add for Span {
    type Output = Span;

    fn add(self, rhs: Span) -> Span {
        self.to(rhs)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.lo.0, self.hi.0)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}..{}", self.lo.0, self.hi.0)
    }
}
