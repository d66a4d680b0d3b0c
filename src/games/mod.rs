//! Bundled game descriptions.
//!
//! Each game is GDL text, ready for `GdlFactory::parse_description` or
//! `ProverStateMachine::from_text`.
//!
//! - `TICTACTOE`: the standard two-player board game
//! - `BUTTONS`: one move to a win
//! - `WALK`: recursion over a cyclic graph
//! - `PENNIES`: simultaneous moves

mod small;
mod tictactoe;

pub use small::{BUTTONS, PENNIES, WALK};
pub use tictactoe::TICTACTOE;
