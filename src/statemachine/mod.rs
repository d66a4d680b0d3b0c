//! Game state machines over GDL descriptions.
//!
//! ## Key Components
//!
//! - `StateMachine`: legal moves, transitions, goals and terminality
//! - `ProverStateMachine`: answers each question with the prover
//! - `CachedStateMachine`: memoizes any machine per state, pruned per tick
//! - `QueryBuilder` / `ResultParser`: the bridge between both layers
//!
//! ## Usage
//!
//! ```
//! use std::sync::Arc;
//! use rust_ggp::core::MachineConfig;
//! use rust_ggp::games;
//! use rust_ggp::gdl::GdlFactory;
//! use rust_ggp::intern::Interner;
//! use rust_ggp::statemachine::{ProverStateMachine, StateMachine};
//!
//! let pool = Arc::new(Interner::new());
//! let description = GdlFactory::new(Arc::clone(&pool))
//!     .parse_description(games::TICTACTOE)
//!     .unwrap();
//! let machine = ProverStateMachine::cached(pool, &description, MachineConfig::default()).unwrap();
//!
//! let start = machine.initial_state();
//! let xplayer = machine.roles()[0].clone();
//! assert_eq!(machine.legal_moves(&start, &xplayer).unwrap().len(), 9);
//! assert!(!machine.is_terminal(&start).unwrap());
//! ```

pub mod cache;
pub mod machine;
pub mod prover;
pub mod query;
pub mod result;

pub use cache::{CachedStateMachine, TtlCache};
pub use machine::StateMachine;
pub use prover::ProverStateMachine;
pub use query::QueryBuilder;
pub use result::ResultParser;
