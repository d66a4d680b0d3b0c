//! # rust-ggp
//!
//! A General Game Playing reasoning core: games written in GDL, answered by
//! a backward-chaining prover behind a state machine interface.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: Nothing about a game is compiled in. Roles, moves,
//!    transitions and payoffs all come from the description.
//!
//! 2. **Shared, Immutable Nodes**: Terms, sentences and rules are reference
//!    counted and interned through an explicit `Interner`, so equal nodes
//!    share storage and compare cheaply.
//!
//! 3. **Deterministic**: Answer order, state contents and random rollouts
//!    depend only on the description and the seed.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Substitutions, states and the recursion
//!   guard use `im-rs`, so branching during proof search is cheap.
//!
//! - **Memoization**: The prover caches state-independent answers across
//!   queries; `CachedStateMachine` caches whole answers per state and tick.
//!
//! ## Modules
//!
//! - `intern`: Interning pool for symbols and logic nodes
//! - `symbol`: S-expression parsing
//! - `gdl`: Logic grammar, GDL conversion, rule transforms
//! - `prover`: Unification, substitution, renaming, resolution
//! - `statemachine`: StateMachine trait, prover-backed and cached machines
//! - `core`: Roles, moves, states, configuration, RNG
//! - `games`: Bundled game descriptions

#[macro_use]
mod macros;

pub mod core;
pub mod error;
pub mod intern;
pub mod symbol;
pub mod gdl;
pub mod prover;
pub mod statemachine;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Role, Move, MachineState,
    GameRng,
    CacheConfig, MachineConfig, ProverConfig,
};

pub use crate::error::{Error, Result};

pub use crate::intern::{Interner, PoolStats};

pub use crate::symbol::{Atom, List, Symbol, SymbolFactory};

pub use crate::gdl::{
    Constant, Function, Term, Variable,
    Proposition, Relation, Sentence,
    Distinct, Literal, Not, Or,
    Gdl, Rule, GdlFactory,
};

pub use crate::prover::{AimaProver, Prover, SentenceSet, Substitution, unify};

pub use crate::statemachine::{
    StateMachine, ProverStateMachine, CachedStateMachine,
    QueryBuilder, ResultParser,
};
