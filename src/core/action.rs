//! Move representation.
//!
//! A move is the ground term a role submits on a turn, such as `(mark 1 1)`
//! or `noop`. A joint move is one `Move` per role, in role order.

use std::fmt;

use crate::gdl::Term;

/// A single role's move.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move(Term);

impl Move {
    /// Wrap a term as a move.
    #[must_use]
    pub fn new(contents: Term) -> Self {
        Self(contents)
    }

    /// The move's term.
    #[must_use]
    pub fn contents(&self) -> &Term {
        &self.0
    }
}

impl From<Term> for Move {
    fn from(term: Term) -> Self {
        Self(term)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self.0)
    }
}
