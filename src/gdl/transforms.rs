//! Description rewrites applied before proving.

use rustc_hash::FxHashSet;

use crate::intern::Interner;

use super::{Gdl, Literal, Rule, Variable};

/// Move every `distinct` and `not` literal after the positive literals that
/// bind its variables.
///
/// The prover evaluates `distinct` and `not` on whatever bindings exist when
/// it reaches them, so an early negation over an unbound variable gives wrong
/// answers. A literal whose variables are never all bound goes to the end of
/// the body. Relative order is otherwise preserved.
pub fn reorder_negations(pool: &Interner, description: &[Gdl]) -> Vec<Gdl> {
    description
        .iter()
        .map(|gdl| match gdl {
            Gdl::Rule(rule) => Gdl::Rule(reorder_rule(pool, rule)),
            Gdl::Sentence(_) => gdl.clone(),
        })
        .collect()
}

/// Reorder a single rule body. Returns the rule unchanged when nothing moves.
pub fn reorder_rule(pool: &Interner, rule: &Rule) -> Rule {
    let body = rule.body();
    let mut bound: FxHashSet<Variable> = FxHashSet::default();
    let mut waiting: Vec<&Literal> = Vec::new();
    let mut reordered: Vec<Literal> = Vec::with_capacity(body.len());

    for literal in body {
        match literal {
            Literal::Distinct(_) | Literal::Not(_) => {
                if is_bound(literal, &bound) {
                    reordered.push(literal.clone());
                } else {
                    waiting.push(literal);
                }
            }
            Literal::Sentence(_) | Literal::Or(_) => {
                reordered.push(literal.clone());
                bound.extend(binds(literal));
                waiting.retain(|pending| {
                    if is_bound(pending, &bound) {
                        reordered.push((*pending).clone());
                        false
                    } else {
                        true
                    }
                });
            }
        }
    }
    reordered.extend(waiting.into_iter().cloned());

    if reordered.as_slice() == body {
        rule.clone()
    } else {
        pool.rule(rule.head().clone(), reordered)
    }
}

/// Variables a positive literal is guaranteed to bind. For `or`, only the
/// variables every disjunct binds.
fn binds(literal: &Literal) -> Vec<Variable> {
    match literal {
        Literal::Sentence(sentence) => {
            let mut vars = Vec::new();
            sentence.collect_variables(&mut vars);
            vars
        }
        Literal::Or(or) => {
            let mut branches = or.disjuncts().iter().map(binds);
            let Some(mut common) = branches.next() else {
                return Vec::new();
            };
            for branch in branches {
                common.retain(|var| branch.contains(var));
            }
            common
        }
        Literal::Distinct(_) | Literal::Not(_) => Vec::new(),
    }
}

fn is_bound(literal: &Literal, bound: &FxHashSet<Variable>) -> bool {
    let mut vars = Vec::new();
    literal.collect_variables(&mut vars);
    vars.iter().all(|var| bound.contains(var))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gdl::GdlFactory;
    use std::sync::Arc;

    fn rule(factory: &GdlFactory, text: &str) -> Rule {
        match factory.parse_gdl(text).unwrap() {
            Gdl::Rule(rule) => rule,
            Gdl::Sentence(s) => panic!("expected a rule, got {}", s),
        }
    }

    #[test]
    fn test_distinct_moves_after_binding() {
        let factory = GdlFactory::new(Arc::new(Interner::new()));
        let original = rule(&factory, "(<= (p ?x ?y) (distinct ?x ?y) (q ?x) (r ?y))");
        let reordered = reorder_rule(factory.pool(), &original);
        assert_eq!(
            reordered.to_string(),
            "(<= (p ?x ?y) (q ?x) (r ?y) (distinct ?x ?y))"
        );
    }

    #[test]
    fn test_not_moves_after_its_variable() {
        let factory = GdlFactory::new(Arc::new(Interner::new()));
        let original = rule(&factory, "(<= (p ?x) (not (q ?x)) (r ?x) (s ?z))");
        let reordered = reorder_rule(factory.pool(), &original);
        assert_eq!(reordered.to_string(), "(<= (p ?x) (r ?x) (not (q ?x)) (s ?z))");
    }

    #[test]
    fn test_unbindable_literal_goes_last() {
        let factory = GdlFactory::new(Arc::new(Interner::new()));
        let original = rule(&factory, "(<= (p ?x) (distinct ?w a) (q ?x))");
        let reordered = reorder_rule(factory.pool(), &original);
        assert_eq!(reordered.to_string(), "(<= (p ?x) (q ?x) (distinct ?w a))");
    }

    #[test]
    fn test_already_ordered_rule_is_unchanged() {
        let factory = GdlFactory::new(Arc::new(Interner::new()));
        let original = rule(&factory, "(<= (p ?x) (q ?x) (not (r ?x)))");
        let reordered = reorder_rule(factory.pool(), &original);
        assert!(reordered.ptr_eq(&original));
    }

    #[test]
    fn test_or_binds_common_variables() {
        let factory = GdlFactory::new(Arc::new(Interner::new()));
        let original = rule(
            &factory,
            "(<= (p ?x) (distinct ?x a) (or (q ?x ?y) (r ?x)))",
        );
        let reordered = reorder_rule(factory.pool(), &original);
        assert_eq!(
            reordered.to_string(),
            "(<= (p ?x) (or (q ?x ?y) (r ?x)) (distinct ?x a))"
        );
    }
}
