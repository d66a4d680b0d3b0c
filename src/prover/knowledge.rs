//! Rules indexed by the predicate they conclude.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::gdl::{Constant, Gdl, Rule, Sentence};
use crate::intern::Interner;

/// Rules and facts grouped by head predicate name.
///
/// Facts are stored as rules with an empty body. Within a predicate, rules
/// keep description order; exact duplicates are dropped.
#[derive(Clone, Debug, Default)]
pub struct KnowledgeBase {
    rules: FxHashMap<Constant, Vec<Rule>>,
    len: usize,
}

impl KnowledgeBase {
    /// Index a game description.
    pub fn new(pool: &Interner, description: &[Gdl]) -> Self {
        Self::from_rules(description.iter().map(|gdl| match gdl {
            Gdl::Rule(rule) => rule.clone(),
            Gdl::Sentence(sentence) => pool.fact_rule(sentence.clone()),
        }))
    }

    /// Index a set of facts, e.g. a state plus the moves being made.
    pub fn from_sentences(pool: &Interner, facts: impl IntoIterator<Item = Sentence>) -> Self {
        Self::from_rules(facts.into_iter().map(|fact| pool.fact_rule(fact)))
    }

    fn from_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        let mut kb = Self::default();
        let mut seen: FxHashSet<Rule> = FxHashSet::default();
        for rule in rules {
            if seen.insert(rule.clone()) {
                kb.rules
                    .entry(rule.head().name().clone())
                    .or_default()
                    .push(rule);
                kb.len += 1;
            }
        }
        kb
    }

    /// Every rule whose head has the same predicate name as `sentence`.
    /// Unknown predicates yield an empty slice.
    #[must_use]
    pub fn fetch(&self, sentence: &Sentence) -> &[Rule] {
        self.rules
            .get(sentence.name())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of stored rules and facts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Predicate names with at least one rule, sorted.
    #[must_use]
    pub fn predicates(&self) -> Vec<&Constant> {
        let mut names: Vec<&Constant> = self.rules.keys().collect();
        names.sort();
        names
    }
}
