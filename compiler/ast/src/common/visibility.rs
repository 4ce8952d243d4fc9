use serde::{Deserialize, Serialize};
use std::fmt;

/// A class member's visibility marker: `''` (public, the default), `'+'` (protected), or
/// `'-'` (private).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Visibility::Public => Ok(()),
            Visibility::Protected => write!(f, "+"),
            Visibility::Private => write!(f, "-"),
        }
    }
}
