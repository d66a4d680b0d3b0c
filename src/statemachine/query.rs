//! Building prover queries and contexts.

use std::sync::Arc;

use crate::core::{MachineState, Move, Role};
use crate::gdl::{Sentence, Term};
use crate::intern::Interner;

/// Builds the standard GDL queries and per-query contexts.
///
/// The fixed queries (`(init ?x)`, `(next ?x)`, `terminal`, `(role ?x)`) are
/// built once; role-specific queries are interned on demand.
#[derive(Clone, Debug)]
pub struct QueryBuilder {
    pool: Arc<Interner>,
    var: Term,
    init: Sentence,
    next: Sentence,
    terminal: Sentence,
    role: Sentence,
}

impl QueryBuilder {
    /// Create a builder interning into `pool`.
    #[must_use]
    pub fn new(pool: Arc<Interner>) -> Self {
        let var = Term::Variable(pool.variable("?x"));
        let init = pool.sentence(pool.constant("init"), [var.clone()]);
        let next = pool.sentence(pool.constant("next"), [var.clone()]);
        let terminal = pool.sentence(pool.constant("terminal"), Vec::<Term>::new());
        let role = pool.sentence(pool.constant("role"), [var.clone()]);
        Self {
            pool,
            var,
            init,
            next,
            terminal,
            role,
        }
    }

    /// `(init ?x)`
    #[must_use]
    pub fn init_query(&self) -> &Sentence {
        &self.init
    }

    /// `(next ?x)`
    #[must_use]
    pub fn next_query(&self) -> &Sentence {
        &self.next
    }

    /// `terminal`
    #[must_use]
    pub fn terminal_query(&self) -> &Sentence {
        &self.terminal
    }

    /// `(role ?x)`
    #[must_use]
    pub fn role_query(&self) -> &Sentence {
        &self.role
    }

    /// `(legal <role> ?x)`
    #[must_use]
    pub fn legal_query(&self, role: &Role) -> Sentence {
        self.pool.sentence(
            self.pool.constant("legal"),
            [role.to_term(), self.var.clone()],
        )
    }

    /// `(goal <role> ?x)`
    #[must_use]
    pub fn goal_query(&self, role: &Role) -> Sentence {
        self.pool.sentence(
            self.pool.constant("goal"),
            [role.to_term(), self.var.clone()],
        )
    }

    /// `(does <role> <move>)`
    #[must_use]
    pub fn to_does(&self, role: &Role, mv: &Move) -> Sentence {
        self.pool.sentence(
            self.pool.constant("does"),
            [role.to_term(), mv.contents().clone()],
        )
    }

    /// The facts of a state.
    #[must_use]
    pub fn context(&self, state: &MachineState) -> Vec<Sentence> {
        state.iter().cloned().collect()
    }

    /// The facts of a state plus one `does` fact per role, pairing `roles`
    /// and `moves` positionally.
    #[must_use]
    pub fn context_with_moves(
        &self,
        state: &MachineState,
        roles: &[Role],
        moves: &[Move],
    ) -> Vec<Sentence> {
        let mut context = Vec::with_capacity(state.len() + moves.len());
        context.extend(state.iter().cloned());
        context.extend(
            roles
                .iter()
                .zip(moves)
                .map(|(role, mv)| self.to_does(role, mv)),
        );
        context
    }
}
