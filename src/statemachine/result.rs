//! Turning prover answers into typed results.

use std::sync::Arc;

use log::error;

use crate::core::{MachineState, Move, Role};
use crate::error::{Error, Result};
use crate::gdl::{Sentence, Term};
use crate::intern::Interner;
use crate::prover::SentenceSet;

/// Reads roles, moves, states and goal values out of answer sets.
#[derive(Clone, Debug)]
pub struct ResultParser {
    pool: Arc<Interner>,
}

impl ResultParser {
    /// Create a parser interning into `pool`.
    #[must_use]
    pub fn new(pool: Arc<Interner>) -> Self {
        Self { pool }
    }

    /// The second argument of each `(legal role move)` answer.
    #[must_use]
    pub fn to_moves(&self, answers: &SentenceSet) -> Vec<Move> {
        answers
            .iter()
            .filter_map(|answer| answer.get(1))
            .cloned()
            .map(Move::new)
            .collect()
    }

    /// A state with `(true X)` for each `(next X)` (or `(init X)`) answer.
    #[must_use]
    pub fn to_state(&self, answers: &SentenceSet) -> MachineState {
        let truth = self.pool.constant("true");
        MachineState::from_sentences(
            answers
                .iter()
                .filter_map(|answer| answer.get(0))
                .map(|fluent| self.pool.sentence(truth.clone(), [fluent.clone()])),
        )
    }

    /// The argument of each `(role r)` answer, in answer order.
    ///
    /// Fails if a role is not a constant.
    pub fn to_roles(&self, answers: &SentenceSet) -> Result<Vec<Role>> {
        answers
            .iter()
            .map(|answer| match answer.get(0) {
                Some(Term::Constant(name)) => Ok(Role::new(name.clone())),
                _ => Err(Error::InvalidDescription(format!(
                    "role must be a single constant, found {}",
                    answer
                ))),
            })
            .collect()
    }

    /// The goal value from the answers to `(goal role ?x)`.
    ///
    /// There must be exactly one answer and its value must be an integer.
    pub fn to_goal_value(
        &self,
        answers: &SentenceSet,
        role: &Role,
        state: &MachineState,
    ) -> Result<i32> {
        let goal_error = |reason: String| {
            error!("goal for {} undefined: {}", role, reason);
            Error::GoalDefinition {
                role: role.clone(),
                state: state.clone(),
                reason,
            }
        };

        let mut iter = answers.iter();
        let (Some(answer), None) = (iter.next(), iter.next()) else {
            return Err(goal_error(format!(
                "expected exactly one goal value, found {}",
                answers.len()
            )));
        };
        parse_goal(answer).ok_or_else(|| goal_error(format!("{} is not an integer goal", answer)))
    }
}

fn parse_goal(answer: &Sentence) -> Option<i32> {
    answer.get(1)?.as_constant()?.name().parse().ok()
}
