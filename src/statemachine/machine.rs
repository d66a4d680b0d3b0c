//! State machine trait for GDL games.
//!
//! Implementations answer the four questions a player asks of a game:
//! - What moves are legal
//! - What state follows a joint move
//! - Whether the game is over
//! - What each role scores

use crate::core::{GameRng, MachineState, Move, Role};
use crate::error::{Error, Result};

/// State machine trait.
///
/// Implementations are shared between threads; every query takes `&self`.
///
/// ## Implementation Notes
///
/// - `legal_moves`: fail with `Error::MoveDefinition` if a role cannot move
/// - `next_state`: joint moves are ordered like `roles()`
/// - `goal`: fail with `Error::GoalDefinition` unless exactly one integer
///   value is defined
/// - `do_per_move_work`: called once per game tick; the default does nothing
pub trait StateMachine: Send + Sync {
    /// The state the game starts in.
    fn initial_state(&self) -> MachineState;

    /// The game's roles, in description order.
    fn roles(&self) -> &[Role];

    /// Legal moves for a role, in the order the description yields them.
    fn legal_moves(&self, state: &MachineState, role: &Role) -> Result<Vec<Move>>;

    /// The state after every role plays its move from `moves`.
    fn next_state(&self, state: &MachineState, moves: &[Move]) -> Result<MachineState>;

    /// A role's payoff in a state.
    fn goal(&self, state: &MachineState, role: &Role) -> Result<i32>;

    /// Check if the game is over.
    fn is_terminal(&self, state: &MachineState) -> Result<bool>;

    /// Per-tick housekeeping.
    fn do_per_move_work(&self) {}

    // === Convenience Methods ===

    /// Payoffs for every role, in role order.
    fn goals(&self, state: &MachineState) -> Result<Vec<i32>> {
        self.roles()
            .iter()
            .map(|role| self.goal(state, role))
            .collect()
    }

    /// Position of a role in `roles()`.
    fn role_index(&self, role: &Role) -> Option<usize> {
        self.roles().iter().position(|r| r == role)
    }

    /// Every joint move: the cross product of each role's legal moves.
    ///
    /// The first role varies slowest.
    fn legal_joint_moves(&self, state: &MachineState) -> Result<Vec<Vec<Move>>> {
        let per_role = self
            .roles()
            .iter()
            .map(|role| self.legal_moves(state, role))
            .collect::<Result<Vec<_>>>()?;
        Ok(cross_product(&per_role))
    }

    /// Every joint move in which `role` plays `fixed`.
    fn legal_joint_moves_with(
        &self,
        state: &MachineState,
        role: &Role,
        fixed: &Move,
    ) -> Result<Vec<Vec<Move>>> {
        let per_role = self
            .roles()
            .iter()
            .map(|r| {
                if r == role {
                    Ok(vec![fixed.clone()])
                } else {
                    self.legal_moves(state, r)
                }
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(cross_product(&per_role))
    }

    /// The successor under every legal joint move, in joint move order.
    fn next_states(&self, state: &MachineState) -> Result<Vec<MachineState>> {
        self.legal_joint_moves(state)?
            .iter()
            .map(|moves| self.next_state(state, moves))
            .collect()
    }

    /// A uniformly random legal move for a role.
    fn random_move(&self, state: &MachineState, role: &Role, rng: &mut GameRng) -> Result<Move> {
        let moves = self.legal_moves(state, role)?;
        rng.choose(&moves).cloned().ok_or_else(|| Error::MoveDefinition {
            role: role.clone(),
            state: state.clone(),
        })
    }

    /// A random legal move for every role, in role order.
    fn random_joint_move(&self, state: &MachineState, rng: &mut GameRng) -> Result<Vec<Move>> {
        self.roles()
            .iter()
            .map(|role| self.random_move(state, role, rng))
            .collect()
    }

    /// A random joint move in which `role` plays `fixed`.
    fn random_joint_move_with(
        &self,
        state: &MachineState,
        role: &Role,
        fixed: &Move,
        rng: &mut GameRng,
    ) -> Result<Vec<Move>> {
        self.roles()
            .iter()
            .map(|r| {
                if r == role {
                    Ok(fixed.clone())
                } else {
                    self.random_move(state, r, rng)
                }
            })
            .collect()
    }

    /// The state after a random joint move.
    fn random_next_state(&self, state: &MachineState, rng: &mut GameRng) -> Result<MachineState> {
        let moves = self.random_joint_move(state, rng)?;
        self.next_state(state, &moves)
    }

    /// Play random joint moves until the game ends.
    ///
    /// Returns the terminal state and the number of moves played.
    fn perform_depth_charge(
        &self,
        state: &MachineState,
        rng: &mut GameRng,
    ) -> Result<(MachineState, usize)> {
        let mut current = state.clone();
        let mut depth = 0;
        while !self.is_terminal(&current)? {
            current = self.random_next_state(&current, rng)?;
            depth += 1;
        }
        Ok((current, depth))
    }
}

/// Every combination picking one item from each slot, first slot slowest.
fn cross_product(slots: &[Vec<Move>]) -> Vec<Vec<Move>> {
    let mut combinations: Vec<Vec<Move>> = vec![Vec::with_capacity(slots.len())];
    for slot in slots {
        combinations = combinations
            .iter()
            .flat_map(|prefix| {
                slot.iter().map(move |item| {
                    let mut combination = prefix.clone();
                    combination.push(item.clone());
                    combination
                })
            })
            .collect();
    }
    combinations
}
