//! Memoizing decorator over any state machine.

use std::fmt;
use std::sync::Arc;

use log::debug;
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use super::ttl::TtlCache;
use crate::core::{CacheConfig, MachineState, Move, Role};
use crate::error::Result;
use crate::statemachine::StateMachine;

/// Everything computed so far about one state.
#[derive(Debug, Default)]
struct Row {
    moves: FxHashMap<Role, Vec<Move>>,
    nexts: FxHashMap<Vec<Move>, MachineState>,
    goals: FxHashMap<Role, i32>,
    terminal: Option<bool>,
}

/// Caches every answer of a backing machine per state.
///
/// Rows are locked independently: concurrent callers asking about the same
/// state wait for one computation, while other states stay available.
/// Errors are returned as-is and never stored. Each `do_per_move_work` call
/// ages the rows and evicts the stale ones.
pub struct CachedStateMachine<M> {
    backing: M,
    rows: Mutex<TtlCache<MachineState, Arc<Mutex<Row>>>>,
}

impl<M: StateMachine> CachedStateMachine<M> {
    /// Wrap `backing`.
    #[must_use]
    pub fn new(backing: M, config: CacheConfig) -> Self {
        Self {
            backing,
            rows: Mutex::new(TtlCache::new(config.ttl)),
        }
    }

    /// The wrapped machine.
    #[must_use]
    pub fn backing(&self) -> &M {
        &self.backing
    }

    /// Number of states with a live row.
    #[must_use]
    pub fn cached_states(&self) -> usize {
        self.rows.lock().len()
    }

    fn row(&self, state: &MachineState) -> Arc<Mutex<Row>> {
        let mut rows = self.rows.lock();
        Arc::clone(rows.get_or_insert_with(state.clone(), Arc::default))
    }
}

impl<M: StateMachine> StateMachine for CachedStateMachine<M> {
    fn initial_state(&self) -> MachineState {
        self.backing.initial_state()
    }

    fn roles(&self) -> &[Role] {
        self.backing.roles()
    }

    fn legal_moves(&self, state: &MachineState, role: &Role) -> Result<Vec<Move>> {
        let row = self.row(state);
        let mut row = row.lock();
        if let Some(moves) = row.moves.get(role) {
            return Ok(moves.clone());
        }
        let moves = self.backing.legal_moves(state, role)?;
        row.moves.insert(role.clone(), moves.clone());
        Ok(moves)
    }

    fn next_state(&self, state: &MachineState, moves: &[Move]) -> Result<MachineState> {
        let row = self.row(state);
        let mut row = row.lock();
        if let Some(next) = row.nexts.get(moves) {
            return Ok(next.clone());
        }
        let next = self.backing.next_state(state, moves)?;
        row.nexts.insert(moves.to_vec(), next.clone());
        Ok(next)
    }

    fn goal(&self, state: &MachineState, role: &Role) -> Result<i32> {
        let row = self.row(state);
        let mut row = row.lock();
        if let Some(&value) = row.goals.get(role) {
            return Ok(value);
        }
        let value = self.backing.goal(state, role)?;
        row.goals.insert(role.clone(), value);
        Ok(value)
    }

    fn is_terminal(&self, state: &MachineState) -> Result<bool> {
        let row = self.row(state);
        let mut row = row.lock();
        if let Some(terminal) = row.terminal {
            return Ok(terminal);
        }
        let terminal = self.backing.is_terminal(state)?;
        row.terminal = Some(terminal);
        Ok(terminal)
    }

    fn do_per_move_work(&self) {
        let mut rows = self.rows.lock();
        let evicted = rows.prune();
        debug!("cache pruned {} states, {} remain", evicted, rows.len());
        drop(rows);
        self.backing.do_per_move_work();
    }
}

impl<M: fmt::Debug> fmt::Debug for CachedStateMachine<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CachedStateMachine")
            .field("backing", &self.backing)
            .field("cached_states", &self.rows.lock().len())
            .finish()
    }
}
