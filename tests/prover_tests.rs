//! Prover tests.
//!
//! These tests query descriptions directly through the `Prover` trait,
//! without a state machine in between.

use std::sync::Arc;

use rust_ggp::core::ProverConfig;
use rust_ggp::games;
use rust_ggp::gdl::{GdlFactory, Sentence};
use rust_ggp::intern::Interner;
use rust_ggp::prover::{AimaProver, Prover};

fn setup(text: &str, config: ProverConfig) -> (GdlFactory, AimaProver) {
    let factory = GdlFactory::new(Arc::new(Interner::new()));
    let description = factory.parse_description(text).unwrap();
    let prover = AimaProver::new(Arc::clone(factory.pool()), &description, config);
    (factory, prover)
}

fn texts(answers: impl IntoIterator<Item = Sentence>) -> Vec<String> {
    answers.into_iter().map(|s| s.to_string()).collect()
}

/// Test recursion over a cyclic graph.
#[test]
fn test_reachability_on_cycle() {
    let (f, prover) = setup(games::WALK, ProverConfig::default());
    let query = f.parse_sentence("(reach a ?z)").unwrap();

    let mut reached = texts(prover.ask_all(&query, &[]));
    reached.sort();
    assert_eq!(
        reached,
        vec!["(reach a a)", "(reach a b)", "(reach a c)", "(reach a d)"]
    );

    assert!(prover.prove(&f.parse_sentence("(reach c c)").unwrap(), &[]));
    assert!(!prover.prove(&f.parse_sentence("(reach d a)").unwrap(), &[]));
}

/// Test that left recursion terminates when each level renames its variables.
#[test]
fn test_left_recursion_terminates() {
    let facts = "(parent a b) (parent b c)";
    let (f, left) = setup(
        &format!(
            "{} (<= (anc ?x ?y) (parent ?x ?y)) (<= (anc ?x ?y) (anc ?x ?z) (parent ?z ?y))",
            facts
        ),
        ProverConfig::default(),
    );
    let query = f.parse_sentence("(anc a ?w)").unwrap();

    // The recursive call is cut on its first repetition, so only the base
    // case contributes.
    let answers = left.ask_all(&query, &[]);
    assert!(answers.contains(&f.parse_sentence("(anc a b)").unwrap()));

    let (f, right) = setup(
        &format!(
            "{} (<= (anc ?x ?y) (parent ?x ?y)) (<= (anc ?x ?y) (parent ?x ?z) (anc ?z ?y))",
            facts
        ),
        ProverConfig::default(),
    );
    let query = f.parse_sentence("(anc a ?w)").unwrap();
    assert_eq!(
        texts(right.ask_all(&query, &[])),
        vec!["(anc a b)", "(anc a c)"]
    );
}

/// Test that answers built from context facts change with the context.
#[test]
fn test_context_derived_answers_follow_context() {
    let (f, prover) = setup("(role a) (<= (seen ?x) (foo ?x))", ProverConfig::default());
    let query = f.parse_sentence("(seen ?x)").unwrap();

    assert!(prover.ask_all(&query, &[]).is_empty());

    let first = [f.parse_sentence("(foo 1)").unwrap()];
    assert_eq!(texts(prover.ask_all(&query, &first)), vec!["(seen 1)"]);

    let second = [f.parse_sentence("(foo 2)").unwrap()];
    assert_eq!(texts(prover.ask_all(&query, &second)), vec!["(seen 2)"]);

    let direct = f.parse_sentence("(foo ?x)").unwrap();
    assert_eq!(texts(prover.ask_all(&direct, &second)), vec!["(foo 2)"]);
    assert!(prover.ask_all(&query, &[]).is_empty());
}

/// Test that state-dependent queries read the context.
#[test]
fn test_context_facts() {
    let (f, prover) = setup(games::WALK, ProverConfig::default());
    let legal = f.parse_sentence("(legal walker ?m)").unwrap();

    let at_c = [f.parse_sentence("(true (at c))").unwrap()];
    assert_eq!(
        texts(prover.ask_all(&legal, &at_c)),
        vec!["(legal walker (move a))", "(legal walker (move d))", "(legal walker stay)"]
    );

    let at_d = [f.parse_sentence("(true (at d))").unwrap()];
    assert!(prover.ask_all(&legal, &at_d).is_empty());
    assert!(prover.prove(&f.parse_sentence("terminal").unwrap(), &at_d));
    assert!(!prover.prove(&f.parse_sentence("terminal").unwrap(), &at_c));
}

/// Test that answers are identical with and without the fixed-answer cache.
#[test]
fn test_fixed_answer_cache_is_transparent() {
    let (f, cached) = setup(games::WALK, ProverConfig::default());
    let (_, uncached) = setup(
        games::WALK,
        ProverConfig::default().with_fixed_answer_cache(false),
    );

    for node in ["a", "b", "c"] {
        let context = [f.parse_sentence(&format!("(true (at {}))", node)).unwrap()];
        let legal = f.parse_sentence("(legal walker ?m)").unwrap();
        assert_eq!(
            texts(cached.ask_all(&legal, &context)),
            texts(uncached.ask_all(&legal, &context))
        );
    }

    assert!(cached.fixed_answer_count() > 0);
    assert_eq!(uncached.fixed_answer_count(), 0);
}

/// Test that repeated queries answer identically.
#[test]
fn test_repeated_queries_are_deterministic() {
    let (f, prover) = setup(games::TICTACTOE, ProverConfig::default());
    let state: Vec<Sentence> = [
        "(true (cell 1 1 x))",
        "(true (cell 1 2 b))",
        "(true (cell 1 3 o))",
        "(true (control xplayer))",
    ]
    .iter()
    .map(|text| f.parse_sentence(text).unwrap())
    .collect();
    let query = f.parse_sentence("(legal ?r ?m)").unwrap();

    let first = texts(prover.ask_all(&query, &state));
    let second = texts(prover.ask_all(&query, &state));
    assert_eq!(first, second);
    assert_eq!(
        first,
        vec!["(legal xplayer (mark 1 2))", "(legal oplayer noop)"]
    );
}

/// Test ask_one against ask_all.
#[test]
fn test_ask_one_is_first_answer() {
    let (f, prover) = setup(games::WALK, ProverConfig::default());
    let query = f.parse_sentence("(edge ?x ?y)").unwrap();

    let all = prover.ask_all(&query, &[]);
    let one = prover.ask_one(&query, &[]).unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all.first(), Some(&one));
    assert_eq!(one.to_string(), "(edge a b)");

    assert!(prover
        .ask_one(&f.parse_sentence("(edge d ?y)").unwrap(), &[])
        .is_none());
}

/// Test that negations and distincts wait for their variables to be bound.
#[test]
fn test_negation_reordering() {
    let text = "
        (num 1) (num 2) (num 3)
        (<= (pair ?x ?y) (distinct ?x ?y) (num ?x) (num ?y))
        (<= (odd ?x) (not (even ?x)) (num ?x))
        (even 2)
    ";
    let (f, reordered) = setup(text, ProverConfig::default());
    let pair = f.parse_sentence("(pair ?a ?b)").unwrap();
    let odd = f.parse_sentence("(odd ?a)").unwrap();

    assert_eq!(reordered.ask_all(&pair, &[]).len(), 6);
    assert_eq!(texts(reordered.ask_all(&odd, &[])), vec!["(odd 1)", "(odd 3)"]);

    // Without reordering the leading literals see unbound variables:
    // distinct variables always differ, and some number is even.
    let (f, literal) = setup(text, ProverConfig::default().with_reorder_negations(false));
    let pair = f.parse_sentence("(pair ?a ?b)").unwrap();
    let odd = f.parse_sentence("(odd ?a)").unwrap();
    assert_eq!(literal.ask_all(&pair, &[]).len(), 9);
    assert!(literal.ask_all(&odd, &[]).is_empty());
}

/// Test that clearing the pool keeps existing nodes usable.
#[test]
fn test_drain_between_games() {
    let (f, prover) = setup(games::WALK, ProverConfig::default());
    let before = f.pool().stats();
    assert!(before.relations > 0);

    f.pool().drain();
    let after = f.pool().stats();
    assert_eq!(after.relations, 0);
    assert_eq!(after.constants, before.constants);

    let query = f.parse_sentence("(reach b ?z)").unwrap();
    assert_eq!(prover.ask_all(&query, &[]).len(), 4);
}
