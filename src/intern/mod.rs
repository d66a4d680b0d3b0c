//! Term pool: hash-consing for symbols and GDL nodes.
//!
//! Every node the parsers, the prover and the state machine build goes
//! through an `Interner`, so structurally equal nodes from one pool are the
//! same allocation. Equality checks then mostly resolve on the pointer fast
//! path, and memo tables keyed by sentences stay small.
//!
//! ## Concurrency
//!
//! Each table is a `DashMap` used as a set. Interning is insert-if-absent
//! through the entry API: concurrent callers racing on the same key all get
//! back the single stored node.
//!
//! ## Keywords
//!
//! The GDL keywords (`init`, `true`, `next`, `role`, `does`, `goal`,
//! `legal`, `terminal`, `base`, `input`) are matched case-insensitively and
//! always stored lower-case.

use std::hash::{BuildHasherDefault, Hash};

use dashmap::DashMap;
use log::debug;
use rustc_hash::FxHasher;

use crate::gdl::term::Args;
use crate::gdl::{
    Constant, Distinct, Function, Literal, Not, Or, Proposition, Relation, Rule, Sentence, Term,
    Variable,
};
use crate::symbol::{Atom, List, Symbol};

type Table<K> = DashMap<K, (), BuildHasherDefault<FxHasher>>;

/// GDL keywords, stored lower-case.
pub const KEYWORDS: [&str; 10] = [
    "init", "true", "next", "role", "does", "goal", "legal", "terminal", "base", "input",
];

/// Sizes of the pool's tables.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Symbol atoms.
    pub atoms: usize,
    /// Symbol lists.
    pub lists: usize,
    /// Constants, keywords included.
    pub constants: usize,
    /// Variables.
    pub variables: usize,
    /// Functions.
    pub functions: usize,
    /// Relations.
    pub relations: usize,
    /// Not, or and distinct literals.
    pub literals: usize,
    /// Rules.
    pub rules: usize,
}

impl PoolStats {
    /// Total number of pooled nodes.
    #[must_use]
    pub fn total(&self) -> usize {
        self.atoms
            + self.lists
            + self.constants
            + self.variables
            + self.functions
            + self.relations
            + self.literals
            + self.rules
    }
}

/// Hash-consing pool for symbols and GDL nodes.
///
/// Usually shared as `Arc<Interner>` by everything working on one game.
#[derive(Default)]
pub struct Interner {
    atoms: Table<Atom>,
    lists: Table<List>,
    constants: Table<Constant>,
    variables: Table<Variable>,
    functions: Table<Function>,
    relations: Table<Relation>,
    nots: Table<Not>,
    ors: Table<Or>,
    distincts: Table<Distinct>,
    rules: Table<Rule>,
}

/// Return the stored copy of `key`, inserting it if absent.
fn intern<K: Eq + Hash + Clone>(table: &Table<K>, key: K) -> K {
    if let Some(existing) = table.get(&key) {
        return existing.key().clone();
    }
    table.entry(key).or_insert(()).key().clone()
}

/// Map a keyword spelled in any case to its lower-case form.
fn normalize_keyword(name: &str) -> &str {
    KEYWORDS
        .iter()
        .copied()
        .find(|keyword| keyword.eq_ignore_ascii_case(name))
        .unwrap_or(name)
}

impl Interner {
    /// Create an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Symbols ===

    /// Intern an atom.
    pub fn atom(&self, text: &str) -> Atom {
        if let Some(existing) = self.atoms.get(text) {
            return existing.key().clone();
        }
        intern(&self.atoms, Atom::new(text))
    }

    /// Intern a list of already-interned symbols.
    pub fn list(&self, items: Vec<Symbol>) -> List {
        intern(&self.lists, List::new(items))
    }

    // === Terms ===

    /// Intern a constant. Keywords are stored lower-case.
    pub fn constant(&self, name: &str) -> Constant {
        let name = normalize_keyword(name);
        if let Some(existing) = self.constants.get(name) {
            return existing.key().clone();
        }
        intern(&self.constants, Constant::new(name))
    }

    /// Intern a variable. `name` includes the leading `?`.
    pub fn variable(&self, name: &str) -> Variable {
        if let Some(existing) = self.variables.get(name) {
            return existing.key().clone();
        }
        intern(&self.variables, Variable::new(name))
    }

    /// Intern a function application.
    pub fn function(&self, name: Constant, args: impl IntoIterator<Item = Term>) -> Function {
        let args: Args = args.into_iter().collect();
        intern(&self.functions, Function::new(name, args))
    }

    // === Sentences ===

    /// Build a proposition.
    pub fn proposition(&self, name: &str) -> Proposition {
        Proposition::new(self.constant(name))
    }

    /// Intern a relation.
    pub fn relation(&self, name: Constant, args: impl IntoIterator<Item = Term>) -> Relation {
        let args: Args = args.into_iter().collect();
        intern(&self.relations, Relation::new(name, args))
    }

    /// Build a sentence: a proposition when `args` is empty, else a relation.
    pub fn sentence(&self, name: Constant, args: impl IntoIterator<Item = Term>) -> Sentence {
        let args: Args = args.into_iter().collect();
        if args.is_empty() {
            Sentence::Proposition(Proposition::new(name))
        } else {
            Sentence::Relation(intern(&self.relations, Relation::new(name, args)))
        }
    }

    // === Literals and rules ===

    /// Intern a negation.
    pub fn not(&self, body: Literal) -> Not {
        intern(&self.nots, Not::new(body))
    }

    /// Intern a disjunction.
    pub fn or(&self, disjuncts: Vec<Literal>) -> Or {
        intern(&self.ors, Or::new(disjuncts))
    }

    /// Intern a `distinct` literal.
    pub fn distinct(&self, left: Term, right: Term) -> Distinct {
        intern(&self.distincts, Distinct::new(left, right))
    }

    /// Intern a rule.
    pub fn rule(&self, head: Sentence, body: Vec<Literal>) -> Rule {
        intern(&self.rules, Rule::new(head, body))
    }

    /// Intern the body-less rule standing for a fact.
    pub fn fact_rule(&self, fact: Sentence) -> Rule {
        self.rule(fact, Vec::new())
    }

    // === Maintenance ===

    /// Clear every table except constants.
    ///
    /// Handles obtained earlier stay valid (they own their storage) but are
    /// no longer canonical, so only call this between games.
    pub fn drain(&self) {
        let before = self.stats();
        self.atoms.clear();
        self.lists.clear();
        self.variables.clear();
        self.functions.clear();
        self.relations.clear();
        self.nots.clear();
        self.ors.clear();
        self.distincts.clear();
        self.rules.clear();
        debug!(
            "drained term pool: {} nodes released, {} constants kept",
            before.total() - before.constants,
            self.constants.len()
        );
    }

    /// Current table sizes.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            atoms: self.atoms.len(),
            lists: self.lists.len(),
            constants: self.constants.len(),
            variables: self.variables.len(),
            functions: self.functions.len(),
            relations: self.relations.len(),
            literals: self.nots.len() + self.ors.len() + self.distincts.len(),
            rules: self.rules.len(),
        }
    }
}

impl std::fmt::Debug for Interner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Interner").field("stats", &self.stats()).finish()
    }
}
