//! Role identification.
//!
//! A role is one of the players a game description declares with
//! `(role name)`. Roles are listed in description order, and that order is
//! the order of every joint move.

use std::fmt;

use crate::gdl::{Constant, Term};

/// A game role, e.g. `xplayer`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Role(Constant);

impl Role {
    /// Create a role from its name.
    #[must_use]
    pub fn new(name: Constant) -> Self {
        Self(name)
    }

    /// The role's name.
    #[must_use]
    pub fn name(&self) -> &Constant {
        &self.0
    }

    /// The role as a term, for building queries.
    #[must_use]
    pub fn to_term(&self) -> Term {
        Term::Constant(self.0.clone())
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Role({})", self.0)
    }
}
