//! Renaming variables apart.

use rustc_hash::FxHashMap;

use crate::gdl::{Rule, Sentence, Term, Variable};
use crate::intern::Interner;

use super::substituter::MapVariables;

/// Prefix of generated variable names.
///
/// `;` starts a comment in GDL text, so no parsed variable carries this
/// prefix and generated names never collide with a description's own.
pub const RENAMED_PREFIX: &str = "?;r";

/// Produces fresh variable names from a private counter.
///
/// The prover owns one renamer per query, so every rule instance used within
/// that query has variables no other instance shares. Within one call a
/// variable occurring several times maps to the same fresh name.
#[derive(Debug, Default)]
pub struct VariableRenamer {
    next: usize,
}

impl VariableRenamer {
    /// Create a renamer starting at `?;r0`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rename every variable in a rule.
    pub fn rename_rule(&mut self, rule: &Rule, pool: &Interner) -> Rule {
        if rule.is_ground() {
            return rule.clone();
        }
        self.rename(rule, pool)
    }

    /// Rename every variable in a sentence.
    pub fn rename_sentence(&mut self, sentence: &Sentence, pool: &Interner) -> Sentence {
        if sentence.is_ground() {
            return sentence.clone();
        }
        self.rename(sentence, pool)
    }

    /// Rename with a fresh renamer, so alpha-equivalent sentences come out
    /// identical. Used as a memo key.
    #[must_use]
    pub fn canonical(sentence: &Sentence, pool: &Interner) -> Sentence {
        Self::new().rename_sentence(sentence, pool)
    }

    fn rename<T: MapVariables>(&mut self, node: &T, pool: &Interner) -> T {
        let mut renamings: FxHashMap<Variable, Variable> = FxHashMap::default();
        let next = &mut self.next;
        node.map_variables(pool, &mut |variable| {
            let fresh = renamings.entry(variable.clone()).or_insert_with(|| {
                let name = format!("{}{}", RENAMED_PREFIX, *next);
                *next += 1;
                pool.variable(&name)
            });
            Term::Variable(fresh.clone())
        })
    }
}
