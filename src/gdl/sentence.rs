//! Sentences: propositions and relations.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::term::{Args, Compound, Constant, Term, Variable};

/// A nullary sentence such as `terminal`.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Proposition(Constant);

impl Proposition {
    pub(crate) fn new(name: Constant) -> Self {
        Self(name)
    }

    /// The proposition's name.
    #[must_use]
    pub fn name(&self) -> &Constant {
        &self.0
    }
}

impl fmt::Display for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Debug for Proposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A sentence with arguments, e.g. `(cell 1 1 b)`.
#[derive(Clone)]
pub struct Relation(pub(crate) Arc<Compound>);

interned_node!(Relation);

impl Relation {
    pub(crate) const TAG: u8 = 2;

    pub(crate) fn new(name: Constant, args: Args) -> Self {
        Self(Arc::new(Compound::new(Self::TAG, name, args)))
    }

    /// The relation's predicate name.
    #[must_use]
    pub fn name(&self) -> &Constant {
        &self.0.name
    }

    /// The arguments, in order.
    #[must_use]
    pub fn args(&self) -> &[Term] {
        &self.0.args
    }

    /// Number of arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.0.args.len()
    }

    /// Get an argument by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Term> {
        self.0.args.get(index)
    }

    /// True if no variable occurs anywhere inside.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        self.0.ground
    }
}

impl PartialOrd for Relation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Relation {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.0.cmp_structure(&other.0)
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_list(f)
    }
}

/// A GDL sentence: the atomic formulas facts, rule heads and queries are
/// made of.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sentence {
    /// A sentence without arguments.
    Proposition(Proposition),
    /// A sentence with arguments.
    Relation(Relation),
}

impl Sentence {
    /// The predicate name.
    #[must_use]
    pub fn name(&self) -> &Constant {
        match self {
            Sentence::Proposition(p) => p.name(),
            Sentence::Relation(r) => r.name(),
        }
    }

    /// The arguments. Empty for propositions.
    #[must_use]
    pub fn args(&self) -> &[Term] {
        match self {
            Sentence::Proposition(_) => &[],
            Sentence::Relation(r) => r.args(),
        }
    }

    /// Number of arguments.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.args().len()
    }

    /// Get an argument by position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Term> {
        self.args().get(index)
    }

    /// True if no variable occurs in this sentence.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        match self {
            Sentence::Proposition(_) => true,
            Sentence::Relation(r) => r.is_ground(),
        }
    }

    /// Push every variable in this sentence onto `out`, first appearance
    /// first, without duplicates.
    pub fn collect_variables(&self, out: &mut Vec<Variable>) {
        if self.is_ground() {
            return;
        }
        for arg in self.args() {
            arg.collect_variables(out);
        }
    }

    /// Check whether both sentences are the same pooled node.
    #[must_use]
    pub fn ptr_eq(&self, other: &Sentence) -> bool {
        match (self, other) {
            (Sentence::Proposition(a), Sentence::Proposition(b)) => a.name().ptr_eq(b.name()),
            (Sentence::Relation(a), Sentence::Relation(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl From<Proposition> for Sentence {
    fn from(p: Proposition) -> Self {
        Sentence::Proposition(p)
    }
}

impl From<Relation> for Sentence {
    fn from(r: Relation) -> Self {
        Sentence::Relation(r)
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sentence::Proposition(p) => p.fmt(f),
            Sentence::Relation(r) => r.fmt(f),
        }
    }
}

impl fmt::Debug for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
