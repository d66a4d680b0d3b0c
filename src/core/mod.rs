//! Core value types: roles, moves, states, RNG, configuration.
//!
//! These are the types that cross the state-machine boundary. All of them
//! are immutable (or, for `GameRng`, owned by one caller) and cheap to clone.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::Role;
pub use rng::GameRng;
pub use config::{CacheConfig, MachineConfig, ProverConfig};
pub use action::Move;
pub use state::MachineState;
