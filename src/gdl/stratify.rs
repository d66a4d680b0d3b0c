//! Negative-recursion detection.
//!
//! Negation as failure is only sound when no predicate depends negatively on
//! itself. The prover's recursion guard cuts such cycles silently, so
//! descriptions are checked at load time and offending predicates reported.

use std::collections::VecDeque;

use log::warn;
use rustc_hash::{FxHashMap, FxHashSet};

use super::{Constant, Gdl, Literal};

/// Predicate dependency graph: head name to `(body name, negative)` edges.
#[derive(Debug, Default)]
pub struct DependencyGraph {
    edges: FxHashMap<Constant, Vec<(Constant, bool)>>,
}

impl DependencyGraph {
    /// Build the graph for a description.
    #[must_use]
    pub fn new(description: &[Gdl]) -> Self {
        let mut graph = Self::default();
        for gdl in description {
            if let Gdl::Rule(rule) = gdl {
                let head = rule.head().name().clone();
                for literal in rule.body() {
                    graph.add_literal(&head, literal, false);
                }
            }
        }
        graph
    }

    fn add_literal(&mut self, head: &Constant, literal: &Literal, negative: bool) {
        match literal {
            Literal::Sentence(sentence) => {
                self.edges
                    .entry(head.clone())
                    .or_default()
                    .push((sentence.name().clone(), negative));
            }
            Literal::Not(not) => self.add_literal(head, not.body(), true),
            Literal::Or(or) => {
                for disjunct in or.disjuncts() {
                    self.add_literal(head, disjunct, negative);
                }
            }
            Literal::Distinct(_) => {}
        }
    }

    /// True if `to` can be reached from `from` along any edges.
    #[must_use]
    pub fn reaches(&self, from: &Constant, to: &Constant) -> bool {
        let mut seen: FxHashSet<&Constant> = FxHashSet::default();
        let mut queue: VecDeque<&Constant> = VecDeque::new();
        queue.push_back(from);

        while let Some(current) = queue.pop_front() {
            if current == to {
                return true;
            }
            if !seen.insert(current) {
                continue;
            }
            if let Some(edges) = self.edges.get(current) {
                queue.extend(edges.iter().map(|(next, _)| next));
            }
        }
        false
    }

    /// Predicates defined by at least one rule.
    pub fn heads(&self) -> impl Iterator<Item = &Constant> {
        self.edges.keys()
    }

    /// Every predicate reachable from `from` in one or more steps.
    #[must_use]
    pub fn dependencies(&self, from: &Constant) -> FxHashSet<Constant> {
        let mut seen: FxHashSet<Constant> = FxHashSet::default();
        let mut stack: Vec<&Constant> = vec![from];
        while let Some(current) = stack.pop() {
            let Some(edges) = self.edges.get(current) else {
                continue;
            };
            for (next, _) in edges {
                if seen.insert(next.clone()) {
                    stack.push(next);
                }
            }
        }
        seen
    }

    /// Predicates that depend negatively on something that leads back to
    /// them, sorted by name.
    #[must_use]
    pub fn negative_cycles(&self) -> Vec<Constant> {
        let mut offenders: Vec<Constant> = self
            .edges
            .iter()
            .filter(|(head, edges)| {
                edges
                    .iter()
                    .any(|(body, negative)| *negative && self.reaches(body, head))
            })
            .map(|(head, _)| head.clone())
            .collect();
        offenders.sort();
        offenders
    }
}

/// Check a description for negative recursion, warning about each offending
/// predicate. Returns true when the description is stratified.
pub fn check_stratification(description: &[Gdl]) -> bool {
    let offenders = DependencyGraph::new(description).negative_cycles();
    for predicate in &offenders {
        warn!(
            "predicate `{}` depends negatively on itself; answers through it may be incomplete",
            predicate
        );
    }
    offenders.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gdl::GdlFactory;
    use crate::intern::Interner;
    use std::sync::Arc;

    fn parse(text: &str) -> Vec<Gdl> {
        GdlFactory::new(Arc::new(Interner::new()))
            .parse_description(text)
            .unwrap()
    }

    #[test]
    fn test_stratified_description() {
        let description = parse(
            "(<= (p ?x) (q ?x) (not (r ?x)))
             (<= (r ?x) (s ?x))
             (<= (q ?x) (q2 ?x))",
        );
        assert!(check_stratification(&description));
    }

    #[test]
    fn test_direct_negative_cycle() {
        let description = parse("(<= p (not p))");
        let cycles = DependencyGraph::new(&description).negative_cycles();
        assert_eq!(cycles.len(), 1);
        assert_eq!(cycles[0].name(), "p");
        assert!(!check_stratification(&description));
    }

    #[test]
    fn test_indirect_negative_cycle_through_or() {
        let description = parse(
            "(<= a (or b c))
             (<= c (not a))",
        );
        let cycles = DependencyGraph::new(&description).negative_cycles();
        let names: Vec<&str> = cycles.iter().map(Constant::name).collect();
        assert_eq!(names, vec!["c"]);
    }

    #[test]
    fn test_dependencies_are_transitive() {
        let description = parse(
            "(<= (legal ?p go) (ready ?p))
             (<= (ready ?p) (role ?p) (not (true (blocked ?p))))
             (<= (loop ?x) (loop ?x))",
        );
        let graph = DependencyGraph::new(&description);

        let legal = graph.heads().find(|c| c.name() == "legal").unwrap().clone();
        let deps = graph.dependencies(&legal);
        let mut names: Vec<&str> = deps.iter().map(Constant::name).collect();
        names.sort_unstable();
        assert_eq!(names, vec!["ready", "role", "true"]);

        let looping = graph.heads().find(|c| c.name() == "loop").unwrap().clone();
        assert!(graph.dependencies(&looping).contains(&looping));
    }

    #[test]
    fn test_positive_recursion_is_fine() {
        let description = parse("(<= (path ?x ?y) (edge ?x ?z) (path ?z ?y))");
        assert!(check_stratification(&description));
    }
}
