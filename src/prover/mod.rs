//! Logical inference over GDL.
//!
//! ## Key Components
//!
//! - `Substitution` / `Substitute`: variable bindings and applying them
//! - `unify`: most general unifier of two sentences
//! - `VariableRenamer`: renaming rules apart, canonical memo keys
//! - `KnowledgeBase`: rules indexed by head predicate
//! - `AimaProver`: backward-chaining resolution with memoization
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use rust_ggp::core::ProverConfig;
//! use rust_ggp::gdl::GdlFactory;
//! use rust_ggp::intern::Interner;
//! use rust_ggp::prover::{AimaProver, Prover};
//!
//! let factory = GdlFactory::new(Arc::new(Interner::new()));
//! let description = factory
//!     .parse_description("(role white) (role black)")
//!     .unwrap();
//! let prover = AimaProver::new(Arc::clone(factory.pool()), &description, ProverConfig::default());
//!
//! let roles = prover.ask_all(&factory.parse_sentence("(role ?r)").unwrap(), &[]);
//! assert_eq!(roles.len(), 2);
//! ```

use std::hash::BuildHasherDefault;

use indexmap::IndexSet;
use rustc_hash::FxHasher;

use crate::gdl::Sentence;

pub mod aima;
pub mod cache;
pub mod knowledge;
pub mod renamer;
pub mod substituter;
pub mod substitution;
pub mod unifier;

pub use aima::AimaProver;
pub use knowledge::KnowledgeBase;
pub use renamer::VariableRenamer;
pub use substituter::{MapVariables, Substitute};
pub use substitution::Substitution;
pub use unifier::unify;

/// Deterministic hasher for prover-internal tables.
pub type FxBuildHasher = BuildHasherDefault<FxHasher>;

/// Query answers, in the order they were found.
pub type SentenceSet = IndexSet<Sentence, FxBuildHasher>;

/// Answers queries against a game description plus per-query facts.
///
/// `context` holds the facts true for this query only: typically the
/// current state's `(true ...)` sentences and the `(does ...)` sentences of
/// a joint move.
pub trait Prover: Send + Sync {
    /// Every instance of `query` that follows from the rules and `context`.
    fn ask_all(&self, query: &Sentence, context: &[Sentence]) -> SentenceSet;

    /// The first instance of `query` found, if any.
    fn ask_one(&self, query: &Sentence, context: &[Sentence]) -> Option<Sentence>;

    /// Whether any instance of `query` follows.
    fn prove(&self, query: &Sentence, context: &[Sentence]) -> bool {
        self.ask_one(query, context).is_some()
    }
}
