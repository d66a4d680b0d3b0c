//! Literals: the things that can appear in a rule body.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

use super::sentence::Sentence;
use super::term::{Term, Variable};

#[derive(PartialEq, Eq)]
pub(crate) struct NotData {
    hash: u64,
    body: Literal,
}

/// Negation as failure: `(not body)`.
#[derive(Clone)]
pub struct Not(Arc<NotData>);

interned_node!(Not);

impl Not {
    pub(crate) fn new(body: Literal) -> Self {
        let mut hasher = FxHasher::default();
        3u8.hash(&mut hasher);
        body.hash(&mut hasher);
        Self(Arc::new(NotData {
            hash: hasher.finish(),
            body,
        }))
    }

    /// The negated literal.
    #[must_use]
    pub fn body(&self) -> &Literal {
        &self.0.body
    }
}

impl fmt::Display for Not {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(not {})", self.0.body)
    }
}

#[derive(PartialEq, Eq)]
pub(crate) struct OrData {
    hash: u64,
    disjuncts: Box<[Literal]>,
    ground: bool,
}

/// Disjunction: `(or a b ...)`.
#[derive(Clone)]
pub struct Or(Arc<OrData>);

interned_node!(Or);

impl Or {
    pub(crate) fn new(disjuncts: Vec<Literal>) -> Self {
        let ground = disjuncts.iter().all(Literal::is_ground);
        let mut hasher = FxHasher::default();
        4u8.hash(&mut hasher);
        disjuncts.hash(&mut hasher);
        Self(Arc::new(OrData {
            hash: hasher.finish(),
            disjuncts: disjuncts.into_boxed_slice(),
            ground,
        }))
    }

    /// The disjuncts, in order.
    #[must_use]
    pub fn disjuncts(&self) -> &[Literal] {
        &self.0.disjuncts
    }
}

impl fmt::Display for Or {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(or")?;
        for disjunct in self.0.disjuncts.iter() {
            write!(f, " {}", disjunct)?;
        }
        f.write_str(")")
    }
}

#[derive(PartialEq, Eq)]
pub(crate) struct DistinctData {
    hash: u64,
    left: Term,
    right: Term,
}

/// Inequality of two terms: `(distinct a b)`.
#[derive(Clone)]
pub struct Distinct(Arc<DistinctData>);

interned_node!(Distinct);

impl Distinct {
    pub(crate) fn new(left: Term, right: Term) -> Self {
        let mut hasher = FxHasher::default();
        5u8.hash(&mut hasher);
        left.hash(&mut hasher);
        right.hash(&mut hasher);
        Self(Arc::new(DistinctData {
            hash: hasher.finish(),
            left,
            right,
        }))
    }

    /// First argument.
    #[must_use]
    pub fn left(&self) -> &Term {
        &self.0.left
    }

    /// Second argument.
    #[must_use]
    pub fn right(&self) -> &Term {
        &self.0.right
    }
}

impl fmt::Display for Distinct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(distinct {} {})", self.0.left, self.0.right)
    }
}

/// A body literal.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Literal {
    /// A positive sentence, proved by resolution.
    Sentence(Sentence),
    /// Negation as failure.
    Not(Not),
    /// Disjunction.
    Or(Or),
    /// Term inequality.
    Distinct(Distinct),
}

impl Literal {
    /// True if no variable occurs in this literal.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        match self {
            Literal::Sentence(s) => s.is_ground(),
            Literal::Not(n) => n.body().is_ground(),
            Literal::Or(o) => o.0.ground,
            Literal::Distinct(d) => d.left().is_ground() && d.right().is_ground(),
        }
    }

    /// The sentence, if this is a positive literal.
    #[must_use]
    pub fn as_sentence(&self) -> Option<&Sentence> {
        match self {
            Literal::Sentence(s) => Some(s),
            _ => None,
        }
    }

    /// Push every variable in this literal onto `out`, first appearance
    /// first, without duplicates.
    pub fn collect_variables(&self, out: &mut Vec<Variable>) {
        match self {
            Literal::Sentence(s) => s.collect_variables(out),
            Literal::Not(n) => n.body().collect_variables(out),
            Literal::Or(o) => {
                for disjunct in o.disjuncts() {
                    disjunct.collect_variables(out);
                }
            }
            Literal::Distinct(d) => {
                d.left().collect_variables(out);
                d.right().collect_variables(out);
            }
        }
    }
}

impl From<Sentence> for Literal {
    fn from(sentence: Sentence) -> Self {
        Literal::Sentence(sentence)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Sentence(s) => s.fmt(f),
            Literal::Not(n) => n.fmt(f),
            Literal::Or(o) => o.fmt(f),
            Literal::Distinct(d) => d.fmt(f),
        }
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
