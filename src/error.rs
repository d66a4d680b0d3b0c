//! Error types for parsing game descriptions and querying state machines.

use thiserror::Error;

use crate::core::{MachineState, Move, Role};

/// A specialized `Result` type for rust-ggp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading a game description or simulating a game.
///
/// Format errors are reported at parse time. The three definition errors
/// come from the state machine boundary: they indicate a broken game
/// description and are fatal to the query that raised them.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Malformed symbol or GDL text.
    #[error("Format error: {reason} in `{text}`")]
    Format {
        /// What was wrong with the input.
        reason: String,
        /// The offending text (or a rendering of the offending symbol).
        text: String,
    },

    /// A role has no legal move in a state.
    #[error("No legal moves for role {role} in state {state}")]
    MoveDefinition {
        /// The role that could not move.
        role: Role,
        /// The state that was queried.
        state: MachineState,
    },

    /// A role's goal value is missing, ambiguous, or not an integer.
    #[error("Goal for role {role} is not well defined in state {state}: {reason}")]
    GoalDefinition {
        /// The role whose goal was requested.
        role: Role,
        /// The state that was queried.
        state: MachineState,
        /// Why the goal could not be read.
        reason: String,
    },

    /// The successor of a state could not be computed.
    #[error("Transition from state {state} under moves {moves:?} is not well defined: {reason}")]
    TransitionDefinition {
        /// The state being advanced.
        state: MachineState,
        /// The joint move that was applied.
        moves: Vec<Move>,
        /// Why the transition failed.
        reason: String,
    },

    /// The description cannot be used to build a state machine.
    #[error("Invalid game description: {0}")]
    InvalidDescription(String),
}

impl Error {
    /// Build a format error.
    pub fn format(reason: impl Into<String>, text: impl Into<String>) -> Self {
        Error::Format {
            reason: reason.into(),
            text: text.into(),
        }
    }

    /// Check if this is a parse-time error.
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. })
    }
}
