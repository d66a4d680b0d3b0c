//! State machine answering every query with the prover.

use std::fmt;
use std::sync::Arc;

use log::{debug, error};

use super::cache::CachedStateMachine;
use super::machine::StateMachine;
use super::query::QueryBuilder;
use super::result::ResultParser;
use crate::core::{MachineConfig, MachineState, Move, ProverConfig, Role};
use crate::error::{Error, Result};
use crate::gdl::{Gdl, GdlFactory};
use crate::intern::Interner;
use crate::prover::{AimaProver, Prover};

/// A `StateMachine` backed by an `AimaProver`.
///
/// Roles and the initial state are computed once at construction.
pub struct ProverStateMachine {
    prover: AimaProver,
    queries: QueryBuilder,
    parser: ResultParser,
    roles: Vec<Role>,
    initial_state: MachineState,
}

impl ProverStateMachine {
    /// Build a machine for a parsed description.
    ///
    /// Fails with `Error::InvalidDescription` if the description declares no
    /// roles or a role that is not a constant.
    pub fn new(pool: Arc<Interner>, description: &[Gdl], config: ProverConfig) -> Result<Self> {
        let prover = AimaProver::new(Arc::clone(&pool), description, config);
        let queries = QueryBuilder::new(Arc::clone(&pool));
        let parser = ResultParser::new(pool);

        let roles = parser.to_roles(&prover.ask_all(queries.role_query(), &[]))?;
        if roles.is_empty() {
            return Err(Error::InvalidDescription("no roles declared".to_string()));
        }
        let initial_state = parser.to_state(&prover.ask_all(queries.init_query(), &[]));
        debug!(
            "state machine ready: roles [{}], {} initial facts",
            roles
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" "),
            initial_state.len()
        );

        Ok(Self {
            prover,
            queries,
            parser,
            roles,
            initial_state,
        })
    }

    /// Parse GDL text and build a machine for it.
    pub fn from_text(pool: Arc<Interner>, text: &str, config: ProverConfig) -> Result<Self> {
        let description = GdlFactory::new(Arc::clone(&pool)).parse_description(text)?;
        Self::new(pool, &description, config)
    }

    /// Build a machine wrapped in a per-tick cache.
    pub fn cached(
        pool: Arc<Interner>,
        description: &[Gdl],
        config: MachineConfig,
    ) -> Result<CachedStateMachine<Self>> {
        let machine = Self::new(pool, description, config.prover)?;
        Ok(CachedStateMachine::new(machine, config.cache))
    }

    /// The underlying prover.
    #[must_use]
    pub fn prover(&self) -> &AimaProver {
        &self.prover
    }
}

impl StateMachine for ProverStateMachine {
    fn initial_state(&self) -> MachineState {
        self.initial_state.clone()
    }

    fn roles(&self) -> &[Role] {
        &self.roles
    }

    fn legal_moves(&self, state: &MachineState, role: &Role) -> Result<Vec<Move>> {
        let answers = self
            .prover
            .ask_all(&self.queries.legal_query(role), &self.queries.context(state));
        let moves = self.parser.to_moves(&answers);
        if moves.is_empty() {
            error!("no legal moves for {} in {}", role, state);
            return Err(Error::MoveDefinition {
                role: role.clone(),
                state: state.clone(),
            });
        }
        Ok(moves)
    }

    fn next_state(&self, state: &MachineState, moves: &[Move]) -> Result<MachineState> {
        let transition_error = |reason: String| {
            error!("bad transition from {}: {}", state, reason);
            Error::TransitionDefinition {
                state: state.clone(),
                moves: moves.to_vec(),
                reason,
            }
        };

        if moves.len() != self.roles.len() {
            return Err(transition_error(format!(
                "expected {} moves, got {}",
                self.roles.len(),
                moves.len()
            )));
        }

        let context = self.queries.context_with_moves(state, &self.roles, moves);
        let answers = self.prover.ask_all(self.queries.next_query(), &context);
        let next = self.parser.to_state(&answers);
        if let Some(fact) = next.iter().find(|fact| !fact.is_ground()) {
            return Err(transition_error(format!("non-ground fact {}", fact)));
        }
        Ok(next)
    }

    fn goal(&self, state: &MachineState, role: &Role) -> Result<i32> {
        let answers = self
            .prover
            .ask_all(&self.queries.goal_query(role), &self.queries.context(state));
        self.parser.to_goal_value(&answers, role, state)
    }

    fn is_terminal(&self, state: &MachineState) -> Result<bool> {
        Ok(self
            .prover
            .prove(self.queries.terminal_query(), &self.queries.context(state)))
    }
}

impl fmt::Debug for ProverStateMachine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProverStateMachine")
            .field("roles", &self.roles)
            .field("initial_state", &self.initial_state)
            .field("prover", &self.prover)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games;

    fn machine(text: &str) -> Result<ProverStateMachine> {
        ProverStateMachine::from_text(Arc::new(Interner::new()), text, ProverConfig::default())
    }

    #[test]
    fn test_no_roles_is_rejected() {
        let result = machine("(init (cell a))");
        assert!(matches!(result, Err(Error::InvalidDescription(_))));
    }

    #[test]
    fn test_format_error_propagates() {
        let result = machine("(role white");
        assert!(matches!(result, Err(Error::Format { .. })));
    }

    #[test]
    fn test_button_game() {
        let sm = machine(games::BUTTONS).unwrap();
        let robot = sm.roles()[0].clone();
        assert_eq!(robot.to_string(), "robot");

        let start = sm.initial_state();
        assert!(!sm.is_terminal(&start).unwrap());
        assert_eq!(sm.goal(&start, &robot).unwrap(), 0);

        let moves = sm.legal_moves(&start, &robot).unwrap();
        assert_eq!(moves.len(), 2);

        let press = moves
            .iter()
            .find(|mv| mv.to_string() == "press")
            .cloned()
            .unwrap();
        let next = sm.next_state(&start, &[press]).unwrap();
        assert!(sm.is_terminal(&next).unwrap());
        assert_eq!(sm.goal(&next, &robot).unwrap(), 100);
    }

    #[test]
    fn test_wrong_joint_move_length() {
        let sm = machine(games::BUTTONS).unwrap();
        let result = sm.next_state(&sm.initial_state(), &[]);
        assert!(matches!(result, Err(Error::TransitionDefinition { .. })));
    }

    #[test]
    fn test_missing_legal_moves() {
        let sm = machine("(role stuck) (init on) (<= (goal stuck 0) on)").unwrap();
        let role = sm.roles()[0].clone();
        let result = sm.legal_moves(&sm.initial_state(), &role);
        assert!(matches!(result, Err(Error::MoveDefinition { .. })));
    }

    #[test]
    fn test_non_ground_next_is_rejected() {
        let sm = machine("(role r) (legal r go) (<= (next (cell ?x)) (true on))  (init on)").unwrap();
        let role = sm.roles()[0].clone();
        let go = sm.legal_moves(&sm.initial_state(), &role).unwrap();
        let result = sm.next_state(&sm.initial_state(), &go);
        assert!(matches!(result, Err(Error::TransitionDefinition { .. })));
    }
}
