//! Backward-chaining resolution prover.
//!
//! ## Search
//!
//! Goals are proved depth first, leftmost goal first, carrying the current
//! substitution. A sentence goal is answered as a whole: every rule whose
//! head unifies with it is renamed apart and its body proved, and the
//! resulting instances are memoized under the goal's canonical form. The
//! remaining goals are then continued once per memoized answer.
//!
//! ## Recursion Guard
//!
//! A sentence already being answered higher up the same branch yields no
//! solutions on that branch. Sentences are compared in canonical form, so a
//! left-recursive rule that re-asks its goal under fresh variable names is
//! cut too. The guard is a persistent set, extended per branch, so sibling
//! branches never see each other's entries.
//!
//! ## Fixed Answers
//!
//! A predicate is volatile for a query when the query context supplies facts
//! for it, when it is `true` or `does`, or when its rules reach such a
//! predicate. A subgoal that is not volatile and never hits the recursion
//! guard has the same answers in every query. Those answers go to a
//! prover-wide cache and later queries reuse them. Everything else is
//! memoized only for the current query.

use std::sync::Arc;

use indexmap::IndexSet;
use log::{debug, trace};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::ProverConfig;
use crate::gdl::stratify::{check_stratification, DependencyGraph};
use crate::gdl::transforms::reorder_negations;
use crate::gdl::{Constant, Gdl, Literal, Rule, Sentence};
use crate::intern::Interner;

use super::cache::{AnswerCache, Answers, SharedAnswerCache};
use super::knowledge::KnowledgeBase;
use super::renamer::VariableRenamer;
use super::substituter::Substitute;
use super::substitution::Substitution;
use super::unifier::unify;
use super::{FxBuildHasher, Prover, SentenceSet};

/// Canonical forms of the sentences being answered on the current branch.
type Guard = im::HashSet<Sentence, FxBuildHasher>;

/// Solutions found for a goal list.
type Solutions = IndexSet<Substitution, FxBuildHasher>;

/// Mutable state private to one query.
struct Query {
    context: KnowledgeBase,
    volatile: FxHashSet<Constant>,
    cache: AnswerCache,
    renamer: VariableRenamer,
}

/// Resolution prover over a game description.
///
/// Immutable after construction apart from the fixed-answer cache, so one
/// instance can serve concurrent queries.
pub struct AimaProver {
    pool: Arc<Interner>,
    knowledge: KnowledgeBase,
    dependencies: FxHashMap<Constant, FxHashSet<Constant>>,
    state_predicates: [Constant; 2],
    fixed_answers: SharedAnswerCache,
    config: ProverConfig,
}

impl AimaProver {
    /// Build a prover for `description`.
    ///
    /// Depending on `config`, the description is checked for negative
    /// recursion and has its negations reordered first.
    pub fn new(pool: Arc<Interner>, description: &[Gdl], config: ProverConfig) -> Self {
        if config.check_stratification {
            check_stratification(description);
        }
        let knowledge = if config.reorder_negations {
            KnowledgeBase::new(&pool, &reorder_negations(&pool, description))
        } else {
            KnowledgeBase::new(&pool, description)
        };
        let graph = DependencyGraph::new(description);
        let dependencies = graph
            .heads()
            .map(|head| (head.clone(), graph.dependencies(head)))
            .collect();
        debug!(
            "prover loaded {} rules over {} predicates",
            knowledge.len(),
            knowledge.predicates().len()
        );

        let state_predicates = [pool.constant("true"), pool.constant("does")];
        Self {
            pool,
            knowledge,
            dependencies,
            state_predicates,
            fixed_answers: SharedAnswerCache::new(),
            config,
        }
    }

    /// The pool this prover builds nodes in.
    #[must_use]
    pub fn pool(&self) -> &Arc<Interner> {
        &self.pool
    }

    /// The static rules.
    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &ProverConfig {
        &self.config
    }

    /// Number of subgoals with state-independent answers cached so far.
    #[must_use]
    pub fn fixed_answer_count(&self) -> usize {
        self.fixed_answers.len()
    }

    fn run(&self, query: &Sentence, context: &[Sentence], ask_one: bool) -> SentenceSet {
        let volatile = context
            .iter()
            .map(|fact| fact.name().clone())
            .chain(self.state_predicates.iter().cloned())
            .collect();
        let mut state = Query {
            context: KnowledgeBase::from_sentences(&self.pool, context.iter().cloned()),
            volatile,
            cache: AnswerCache::new(),
            renamer: VariableRenamer::new(),
        };
        let goals = [Literal::Sentence(query.clone())];
        let mut solutions = Solutions::default();

        self.ask(
            &goals,
            &mut state,
            &Substitution::new(),
            ask_one,
            &mut solutions,
            &Guard::default(),
        );

        solutions
            .iter()
            .map(|theta| query.substitute(theta, &self.pool))
            .collect()
    }

    /// Prove `goals` left to right. Returns true iff every answer found is
    /// independent of the state.
    fn ask(
        &self,
        goals: &[Literal],
        query: &mut Query,
        theta: &Substitution,
        ask_one: bool,
        results: &mut Solutions,
        guard: &Guard,
    ) -> bool {
        let Some((first, rest)) = goals.split_first() else {
            results.insert(theta.clone());
            return true;
        };

        match first.substitute(theta, &self.pool) {
            Literal::Distinct(distinct) => {
                if distinct.left() != distinct.right() {
                    self.ask(rest, query, theta, ask_one, results, guard)
                } else {
                    true
                }
            }
            Literal::Not(not) => {
                let mut counterexamples = Solutions::default();
                let mut is_constant = self.ask(
                    std::slice::from_ref(not.body()),
                    query,
                    theta,
                    true,
                    &mut counterexamples,
                    guard,
                );
                if counterexamples.is_empty() {
                    is_constant &= self.ask(rest, query, theta, ask_one, results, guard);
                }
                is_constant
            }
            Literal::Or(or) => {
                let mut is_constant = true;
                for disjunct in or.disjuncts() {
                    let mut branch = Vec::with_capacity(rest.len() + 1);
                    branch.push(disjunct.clone());
                    branch.extend_from_slice(rest);

                    is_constant &= self.ask(&branch, query, theta, ask_one, results, guard);
                    if ask_one && !results.is_empty() {
                        break;
                    }
                }
                is_constant
            }
            Literal::Sentence(sentence) => {
                self.ask_sentence(&sentence, rest, query, theta, ask_one, results, guard)
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn ask_sentence(
        &self,
        sentence: &Sentence,
        rest: &[Literal],
        query: &mut Query,
        theta: &Substitution,
        ask_one: bool,
        results: &mut Solutions,
        guard: &Guard,
    ) -> bool {
        let key = VariableRenamer::canonical(sentence, &self.pool);
        let fixed = if self.is_volatile(sentence, query) {
            None
        } else {
            self.fixed_answers.get(&key)
        };

        let (answers, mut is_constant) = match fixed {
            Some(answers) => (answers, true),
            None => match query.cache.get(&key) {
                Some(answers) => (answers, false),
                None => {
                    if guard.contains(&key) {
                        trace!("recursion guard cut {}", sentence);
                        return false;
                    }
                    let guard = guard.update(key.clone());
                    let (answers, constant) = self.answer(sentence, query, theta, &guard);
                    if constant && self.config.fixed_answer_cache {
                        self.fixed_answers.put(key, answers.clone());
                        (answers, true)
                    } else {
                        query.cache.put(key, answers.clone());
                        (answers, false)
                    }
                }
            },
        };

        for answer in answers.iter() {
            let Some(theta_prime) = unify(sentence, answer) else {
                continue;
            };
            is_constant &= self.ask(
                rest,
                query,
                &theta.compose(&theta_prime),
                ask_one,
                results,
                guard,
            );
            if ask_one && !results.is_empty() {
                break;
            }
        }
        is_constant
    }

    /// Whether answers to `sentence` can differ between queries.
    fn is_volatile(&self, sentence: &Sentence, query: &Query) -> bool {
        let name = sentence.name();
        query.volatile.contains(name)
            || self
                .dependencies
                .get(name)
                .is_some_and(|deps| query.volatile.iter().any(|p| deps.contains(p)))
    }

    /// Compute every instance of `sentence` provable from the rules and the
    /// context. `guard` already holds the sentence.
    fn answer(
        &self,
        sentence: &Sentence,
        query: &mut Query,
        theta: &Substitution,
        guard: &Guard,
    ) -> (Answers, bool) {
        let candidates: Vec<Rule> = self
            .knowledge
            .fetch(sentence)
            .iter()
            .chain(query.context.fetch(sentence))
            .cloned()
            .collect();
        trace!("answering {} from {} candidates", sentence, candidates.len());

        let mut is_constant = !self.is_volatile(sentence, query);
        let mut solutions = Solutions::default();
        for rule in &candidates {
            let renamed = query.renamer.rename_rule(rule, &self.pool);
            if let Some(theta_prime) = unify(renamed.head(), sentence) {
                is_constant &= self.ask(
                    renamed.body(),
                    query,
                    &theta.compose(&theta_prime),
                    false,
                    &mut solutions,
                    guard,
                );
            }
        }

        let answers: SentenceSet = solutions
            .iter()
            .map(|solution| sentence.substitute(solution, &self.pool))
            .collect();
        (answers.into_iter().collect::<Vec<_>>().into(), is_constant)
    }
}

impl Prover for AimaProver {
    fn ask_all(&self, query: &Sentence, context: &[Sentence]) -> SentenceSet {
        self.run(query, context, false)
    }

    fn ask_one(&self, query: &Sentence, context: &[Sentence]) -> Option<Sentence> {
        self.run(query, context, true).into_iter().next()
    }
}

impl std::fmt::Debug for AimaProver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AimaProver")
            .field("rules", &self.knowledge.len())
            .field("fixed_answers", &self.fixed_answers.len())
            .field("config", &self.config)
            .finish()
    }
}
