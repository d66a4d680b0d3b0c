//! Tic-tac-toe end to end.
//!
//! These tests play the bundled tic-tac-toe description through the
//! prover-backed state machine, with and without the cache.

use std::sync::Arc;

use rust_ggp::core::{CacheConfig, GameRng, MachineState, Move, ProverConfig, Role};
use rust_ggp::games;
use rust_ggp::gdl::GdlFactory;
use rust_ggp::intern::Interner;
use rust_ggp::statemachine::{CachedStateMachine, ProverStateMachine, StateMachine};
use rust_ggp::Error;

fn setup() -> (GdlFactory, ProverStateMachine) {
    let pool = Arc::new(Interner::new());
    let factory = GdlFactory::new(Arc::clone(&pool));
    let sm = ProverStateMachine::from_text(pool, games::TICTACTOE, ProverConfig::default()).unwrap();
    (factory, sm)
}

fn mv(factory: &GdlFactory, text: &str) -> Move {
    Move::new(factory.parse_term(text).unwrap())
}

fn roles(sm: &impl StateMachine) -> (Role, Role) {
    (sm.roles()[0].clone(), sm.roles()[1].clone())
}

/// Play x(1,1), o(1,3), x(3,1), o(2,2), x(2,1): x completes column 1.
fn play_column_win<M: StateMachine>(factory: &GdlFactory, sm: &M) -> MachineState {
    let noop = mv(factory, "noop");
    let script = [
        ("(mark 1 1)", true),
        ("(mark 1 3)", false),
        ("(mark 3 1)", true),
        ("(mark 2 2)", false),
        ("(mark 2 1)", true),
    ];
    let (x, o) = roles(sm);

    let mut state = sm.initial_state();
    for (text, x_to_move) in script {
        assert!(!sm.is_terminal(&state).unwrap());
        let mark = mv(factory, text);
        let mover = if x_to_move { &x } else { &o };
        assert!(sm.legal_moves(&state, mover).unwrap().contains(&mark));

        let joint = if x_to_move {
            vec![mark, noop.clone()]
        } else {
            vec![noop.clone(), mark]
        };
        state = sm.next_state(&state, &joint).unwrap();
    }
    state
}

/// Test roles and the opening position.
#[test]
fn test_initial_position() {
    let (factory, sm) = setup();
    let (x, o) = roles(&sm);
    assert_eq!(x.to_string(), "xplayer");
    assert_eq!(o.to_string(), "oplayer");

    let start = sm.initial_state();
    assert_eq!(start.len(), 10);
    assert!(!sm.is_terminal(&start).unwrap());

    let x_moves = sm.legal_moves(&start, &x).unwrap();
    assert_eq!(x_moves.len(), 9);
    assert!(x_moves.contains(&mv(&factory, "(mark 2 2)")));

    let o_moves = sm.legal_moves(&start, &o).unwrap();
    assert_eq!(o_moves, vec![mv(&factory, "noop")]);

    assert_eq!(sm.legal_joint_moves(&start).unwrap().len(), 9);
}

/// Test that no goal is defined while the board is open and undecided.
#[test]
fn test_goal_undefined_midgame() {
    let (_, sm) = setup();
    let (x, _) = roles(&sm);
    let result = sm.goal(&sm.initial_state(), &x);
    assert!(matches!(result, Err(Error::GoalDefinition { .. })));
}

/// Test a forced win for xplayer down column 1.
#[test]
fn test_column_win() {
    let (factory, sm) = setup();
    let (x, o) = roles(&sm);

    let end = play_column_win(&factory, &sm);
    assert!(sm.is_terminal(&end).unwrap());
    assert_eq!(sm.goal(&end, &x).unwrap(), 100);
    assert_eq!(sm.goal(&end, &o).unwrap(), 0);
    assert_eq!(sm.goals(&end).unwrap(), vec![100, 0]);
}

/// Test that the cached machine plays the same game.
#[test]
fn test_cached_column_win() {
    let (factory, sm) = setup();
    let cached = CachedStateMachine::new(sm, CacheConfig::default());

    let end = play_column_win(&factory, &cached);
    assert!(cached.is_terminal(&end).unwrap());
    assert_eq!(cached.goals(&end).unwrap(), vec![100, 0]);
}

/// Test that control alternates and marks persist.
#[test]
fn test_transition_contents() {
    let (factory, sm) = setup();
    let start = sm.initial_state();
    let next = sm
        .next_state(&start, &[mv(&factory, "(mark 2 2)"), mv(&factory, "noop")])
        .unwrap();

    let fact = |text: &str| factory.parse_sentence(text).unwrap();
    assert!(next.contains(&fact("(true (cell 2 2 x))")));
    assert!(next.contains(&fact("(true (cell 1 1 b))")));
    assert!(!next.contains(&fact("(true (cell 2 2 b))")));
    assert!(next.contains(&fact("(true (control oplayer))")));
    assert_eq!(next.len(), 10);

    let (x, o) = roles(&sm);
    assert_eq!(sm.legal_moves(&next, &o).unwrap().len(), 8);
    assert_eq!(sm.legal_moves(&next, &x).unwrap(), vec![mv(&factory, "noop")]);
}

/// Test that random rollouts end in a scored terminal state.
#[test]
fn test_depth_charges() {
    let (_, sm) = setup();
    let mut rng = GameRng::new(42);
    let start = sm.initial_state();

    for _ in 0..5 {
        let (end, depth) = sm.perform_depth_charge(&start, &mut rng).unwrap();
        assert!(sm.is_terminal(&end).unwrap());
        assert!((5..=9).contains(&depth));

        let goals = sm.goals(&end).unwrap();
        assert!(matches!(goals.as_slice(), [100, 0] | [0, 100] | [50, 50]));
    }
}

/// Test that rollouts are reproducible from a seed.
#[test]
fn test_depth_charge_determinism() {
    let (_, sm) = setup();
    let start = sm.initial_state();

    let first = sm.perform_depth_charge(&start, &mut GameRng::new(7)).unwrap();
    let second = sm.perform_depth_charge(&start, &mut GameRng::new(7)).unwrap();
    assert_eq!(first, second);
}
