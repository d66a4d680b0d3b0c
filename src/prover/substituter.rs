//! Applying substitutions to GDL nodes.

use crate::gdl::{Literal, Rule, Sentence, Term, Variable};
use crate::intern::Interner;

use super::substitution::Substitution;

/// Rebuild a node with every variable replaced by `f(variable)`.
///
/// Ground nodes come back unchanged, without touching the pool. Shared by
/// substitution and variable renaming.
pub trait MapVariables: Sized + Clone {
    /// Rebuild `self` through `pool`, mapping each variable occurrence.
    fn map_variables<F>(&self, pool: &Interner, f: &mut F) -> Self
    where
        F: FnMut(&Variable) -> Term;
}

impl MapVariables for Term {
    fn map_variables<F>(&self, pool: &Interner, f: &mut F) -> Self
    where
        F: FnMut(&Variable) -> Term,
    {
        match self {
            Term::Constant(_) => self.clone(),
            Term::Variable(variable) => f(variable),
            Term::Function(function) => {
                if function.is_ground() {
                    return self.clone();
                }
                let args: Vec<Term> = function
                    .args()
                    .iter()
                    .map(|arg| arg.map_variables(pool, f))
                    .collect();
                Term::Function(pool.function(function.name().clone(), args))
            }
        }
    }
}

impl MapVariables for Sentence {
    fn map_variables<F>(&self, pool: &Interner, f: &mut F) -> Self
    where
        F: FnMut(&Variable) -> Term,
    {
        match self {
            Sentence::Relation(relation) if !relation.is_ground() => {
                let args: Vec<Term> = relation
                    .args()
                    .iter()
                    .map(|arg| arg.map_variables(pool, f))
                    .collect();
                Sentence::Relation(pool.relation(relation.name().clone(), args))
            }
            _ => self.clone(),
        }
    }
}

impl MapVariables for Literal {
    fn map_variables<F>(&self, pool: &Interner, f: &mut F) -> Self
    where
        F: FnMut(&Variable) -> Term,
    {
        if self.is_ground() {
            return self.clone();
        }
        match self {
            Literal::Sentence(sentence) => Literal::Sentence(sentence.map_variables(pool, f)),
            Literal::Not(not) => Literal::Not(pool.not(not.body().map_variables(pool, f))),
            Literal::Or(or) => {
                let disjuncts = or
                    .disjuncts()
                    .iter()
                    .map(|disjunct| disjunct.map_variables(pool, f))
                    .collect();
                Literal::Or(pool.or(disjuncts))
            }
            Literal::Distinct(distinct) => {
                let left = distinct.left().map_variables(pool, f);
                let right = distinct.right().map_variables(pool, f);
                Literal::Distinct(pool.distinct(left, right))
            }
        }
    }
}

impl MapVariables for Rule {
    fn map_variables<F>(&self, pool: &Interner, f: &mut F) -> Self
    where
        F: FnMut(&Variable) -> Term,
    {
        if self.is_ground() {
            return self.clone();
        }
        let head = self.head().map_variables(pool, f);
        let body = self
            .body()
            .iter()
            .map(|literal| literal.map_variables(pool, f))
            .collect();
        pool.rule(head, body)
    }
}

/// Apply a substitution.
///
/// Variables follow chains of bindings (`?x -> ?y -> a`) until they reach an
/// unbound variable or a term without bound variables. Ground inputs and
/// empty substitutions return the input unchanged.
pub trait Substitute: Sized {
    /// Replace every bound variable in `self` by its binding.
    fn substitute(&self, theta: &Substitution, pool: &Interner) -> Self;
}

impl<T: MapVariables> Substitute for T {
    fn substitute(&self, theta: &Substitution, pool: &Interner) -> Self {
        if theta.is_empty() {
            return self.clone();
        }
        self.map_variables(pool, &mut |variable| resolve(variable, theta, pool))
    }
}

fn resolve(variable: &Variable, theta: &Substitution, pool: &Interner) -> Term {
    match theta.get(variable) {
        None => Term::Variable(variable.clone()),
        Some(Term::Variable(next)) if next == variable => Term::Variable(variable.clone()),
        Some(binding) => binding.substitute(theta, pool),
    }
}
