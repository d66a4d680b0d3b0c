//! The GDL logic grammar: terms, sentences, literals and rules.
//!
//! ## Node Types
//!
//! - `Term`: `Constant`, `Variable`, or `Function`
//! - `Sentence`: `Proposition` or `Relation`
//! - `Literal`: a `Sentence`, or `Not`, `Or`, `Distinct`
//! - `Rule`: a head sentence with a body of literals
//! - `Gdl`: one top-level item of a game description (rule or fact)
//!
//! ## Interning
//!
//! Nodes are immutable and reference counted. Compound nodes cache their
//! ground flag and a structural hash when built. Constructors are private to
//! the crate: nodes are created through an `Interner`, which hands back the
//! canonical copy, so structurally equal nodes from one pool share storage.
//!
//! Equality stays structural (with a pointer fast path) and ordering is a
//! structural total order on names, so sets and maps of nodes iterate
//! deterministically.

pub mod term;
pub mod sentence;
pub mod literal;
pub mod rule;
pub mod factory;
pub mod transforms;
pub mod stratify;

pub use term::{Constant, Function, Term, Variable};
pub use sentence::{Proposition, Relation, Sentence};
pub use literal::{Distinct, Literal, Not, Or};
pub use rule::{Gdl, Rule};
pub use factory::GdlFactory;
