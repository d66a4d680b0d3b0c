//! Rules and top-level description items.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use rustc_hash::FxHasher;

use super::literal::Literal;
use super::sentence::Sentence;
use super::term::Variable;

#[derive(PartialEq, Eq)]
pub(crate) struct RuleData {
    hash: u64,
    head: Sentence,
    body: Box<[Literal]>,
    ground: bool,
}

/// A Horn-style rule `(<= head body...)`. Facts are rules with an empty body.
#[derive(Clone)]
pub struct Rule(Arc<RuleData>);

interned_node!(Rule);

impl Rule {
    pub(crate) fn new(head: Sentence, body: Vec<Literal>) -> Self {
        let ground = head.is_ground() && body.iter().all(Literal::is_ground);
        let mut hasher = FxHasher::default();
        6u8.hash(&mut hasher);
        head.hash(&mut hasher);
        body.hash(&mut hasher);
        Self(Arc::new(RuleData {
            hash: hasher.finish(),
            head,
            body: body.into_boxed_slice(),
            ground,
        }))
    }

    /// The conclusion.
    #[must_use]
    pub fn head(&self) -> &Sentence {
        &self.0.head
    }

    /// The premises, in order.
    #[must_use]
    pub fn body(&self) -> &[Literal] {
        &self.0.body
    }

    /// True for a rule with no premises.
    #[must_use]
    pub fn is_fact(&self) -> bool {
        self.0.body.is_empty()
    }

    /// True if no variable occurs anywhere in the rule.
    #[must_use]
    pub fn is_ground(&self) -> bool {
        self.0.ground
    }

    /// Every variable in the rule, head first, without duplicates.
    #[must_use]
    pub fn variables(&self) -> Vec<Variable> {
        let mut out = Vec::new();
        if !self.is_ground() {
            self.head().collect_variables(&mut out);
            for literal in self.body() {
                literal.collect_variables(&mut out);
            }
        }
        out
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(<= {}", self.0.head)?;
        for literal in self.0.body.iter() {
            write!(f, " {}", literal)?;
        }
        f.write_str(")")
    }
}

/// One top-level item of a game description.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum Gdl {
    /// A rule with a body.
    Rule(Rule),
    /// A ground or non-ground fact.
    Sentence(Sentence),
}

impl Gdl {
    /// The sentence this item concludes.
    #[must_use]
    pub fn head(&self) -> &Sentence {
        match self {
            Gdl::Rule(rule) => rule.head(),
            Gdl::Sentence(sentence) => sentence,
        }
    }
}

impl fmt::Display for Gdl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gdl::Rule(rule) => rule.fmt(f),
            Gdl::Sentence(sentence) => sentence.fmt(f),
        }
    }
}

impl fmt::Debug for Gdl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
