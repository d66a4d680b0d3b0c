//! Game state representation.
//!
//! A `MachineState` is the set of ground sentences true in a position, each
//! of the form `(true X)`. Contents live in a persistent `im::OrdSet`, so
//! cloning a state is O(1) and iteration order is the structural order of
//! the sentences, independent of how the state was built.
//!
//! The hash of the contents is computed once at construction; states are
//! used as cache keys on every state-machine call.

use std::fmt;
use std::hash::{Hash, Hasher};

use im::OrdSet;
use rustc_hash::FxHasher;

use crate::gdl::Sentence;

/// An immutable set of ground sentences.
#[derive(Clone)]
pub struct MachineState {
    contents: OrdSet<Sentence>,
    hash: u64,
}

impl MachineState {
    /// Create a state from a set of sentences.
    #[must_use]
    pub fn new(contents: OrdSet<Sentence>) -> Self {
        let mut hasher = FxHasher::default();
        contents.len().hash(&mut hasher);
        for sentence in contents.iter() {
            sentence.hash(&mut hasher);
        }
        Self {
            contents,
            hash: hasher.finish(),
        }
    }

    /// Create a state from any collection of sentences.
    pub fn from_sentences(sentences: impl IntoIterator<Item = Sentence>) -> Self {
        Self::new(sentences.into_iter().collect())
    }

    /// The sentences in this state.
    #[must_use]
    pub fn contents(&self) -> &OrdSet<Sentence> {
        &self.contents
    }

    /// Iterate over the sentences in structural order.
    pub fn iter(&self) -> impl Iterator<Item = &Sentence> {
        self.contents.iter()
    }

    /// Check whether a sentence holds in this state.
    #[must_use]
    pub fn contains(&self, sentence: &Sentence) -> bool {
        self.contents.contains(sentence)
    }

    /// Number of sentences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contents.len()
    }

    /// True for the empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }
}

impl PartialEq for MachineState {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.contents == other.contents
    }
}

impl Eq for MachineState {}

impl Hash for MachineState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for sentence in self.contents.iter() {
            write!(f, " {}", sentence)?;
        }
        f.write_str(" )")
    }
}

impl fmt::Debug for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MachineState{}", self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gdl::GdlFactory;
    use crate::intern::Interner;
    use std::sync::Arc;

    fn sentences(texts: &[&str]) -> Vec<Sentence> {
        let factory = GdlFactory::new(Arc::new(Interner::new()));
        texts
            .iter()
            .map(|text| factory.parse_sentence(text).unwrap())
            .collect()
    }

    #[test]
    fn test_order_independent_equality() {
        let s = sentences(&["(true (cell 1 1 b))", "(true (control xplayer))"]);
        let a = MachineState::from_sentences(s.clone());
        let b = MachineState::from_sentences(s.into_iter().rev());

        assert_eq!(a, b);
        assert_eq!(a.len(), 2);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_contains() {
        let s = sentences(&["(true (control xplayer))", "(true (control oplayer))"]);
        let state = MachineState::from_sentences(vec![s[0].clone()]);

        assert!(state.contains(&s[0]));
        assert!(!state.contains(&s[1]));
    }

    #[test]
    fn test_display() {
        let s = sentences(&["(true (control xplayer))"]);
        let state = MachineState::from_sentences(s);
        assert_eq!(state.to_string(), "( (true (control xplayer)) )");
        assert_eq!(MachineState::from_sentences(Vec::new()).to_string(), "( )");
    }

    #[test]
    fn test_clone_is_equal() {
        let state = MachineState::from_sentences(sentences(&["(true a)", "(true b)"]));
        let copy = state.clone();
        assert_eq!(state, copy);
    }
}
