//! Memo tables for subgoal answers.
//!
//! Keys are canonically renamed sentences, so alpha-equivalent subgoals
//! share one entry. Values are the answers: the subgoal with each solution
//! substituted in, deduplicated and in discovery order.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::gdl::Sentence;

/// Answers to one subgoal.
pub type Answers = Arc<[Sentence]>;

/// Per-query memo table, owned by a single proof.
#[derive(Debug, Default)]
pub struct AnswerCache {
    contents: FxHashMap<Sentence, Answers>,
}

impl AnswerCache {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a key has answers.
    #[must_use]
    pub fn contains(&self, key: &Sentence) -> bool {
        self.contents.contains_key(key)
    }

    /// Answers stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Sentence) -> Option<Answers> {
        self.contents.get(key).cloned()
    }

    /// Store answers under `key`.
    pub fn put(&mut self, key: Sentence, answers: Answers) {
        self.contents.insert(key, answers);
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

/// Prover-wide memo table for answers that do not depend on the state.
///
/// Shared by every query running on the prover. Readers proceed in parallel;
/// an insert takes the write lock only for the map update.
#[derive(Debug, Default)]
pub struct SharedAnswerCache {
    inner: RwLock<AnswerCache>,
}

impl SharedAnswerCache {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers stored under `key`.
    #[must_use]
    pub fn get(&self, key: &Sentence) -> Option<Answers> {
        self.inner.read().get(key)
    }

    /// Check whether a key has answers.
    #[must_use]
    pub fn contains(&self, key: &Sentence) -> bool {
        self.inner.read().contains(key)
    }

    /// Store answers under `key`. A concurrent writer computing the same
    /// key stores the same answers, so last write wins.
    pub fn put(&self, key: Sentence, answers: Answers) {
        self.inner.write().put(key, answers);
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True when nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
