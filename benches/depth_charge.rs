//! Benchmarks for random rollouts of tic-tac-toe.
//!
//! Rollouts are the inner loop of Monte Carlo players, so they exercise
//! every state machine query on many fresh states.

#![allow(missing_docs)]

use std::hint::black_box;
use std::sync::Arc;

use criterion::{criterion_group, criterion_main, Criterion};
use rust_ggp::core::{CacheConfig, GameRng, ProverConfig};
use rust_ggp::games;
use rust_ggp::gdl::GdlFactory;
use rust_ggp::intern::Interner;
use rust_ggp::statemachine::{CachedStateMachine, ProverStateMachine, StateMachine};

fn machine(config: ProverConfig) -> ProverStateMachine {
    ProverStateMachine::from_text(Arc::new(Interner::new()), games::TICTACTOE, config).unwrap()
}

fn bench_parse(c: &mut Criterion) {
    let factory = GdlFactory::new(Arc::new(Interner::new()));

    c.bench_function("parse_tictactoe", |b| {
        b.iter(|| black_box(factory.parse_description(black_box(games::TICTACTOE)).unwrap()));
    });
}

fn bench_depth_charge(c: &mut Criterion) {
    let sm = machine(ProverConfig::default());
    let start = sm.initial_state();
    let mut rng = GameRng::new(42);

    c.bench_function("depth_charge_prover", |b| {
        b.iter(|| black_box(sm.perform_depth_charge(&start, &mut rng).unwrap()));
    });
}

fn bench_depth_charge_no_fixed_answers(c: &mut Criterion) {
    let sm = machine(ProverConfig::default().with_fixed_answer_cache(false));
    let start = sm.initial_state();
    let mut rng = GameRng::new(42);

    c.bench_function("depth_charge_prover_no_fixed_answers", |b| {
        b.iter(|| black_box(sm.perform_depth_charge(&start, &mut rng).unwrap()));
    });
}

fn bench_depth_charge_cached(c: &mut Criterion) {
    // A long ttl keeps the whole explored tree warm between rollouts.
    let sm = CachedStateMachine::new(
        machine(ProverConfig::default()),
        CacheConfig::default().with_ttl(u32::MAX),
    );
    let start = sm.initial_state();
    let mut rng = GameRng::new(42);

    c.bench_function("depth_charge_cached", |b| {
        b.iter(|| black_box(sm.perform_depth_charge(&start, &mut rng).unwrap()));
    });
}

fn bench_legal_moves(c: &mut Criterion) {
    let sm = machine(ProverConfig::default());
    let start = sm.initial_state();
    let x = sm.roles()[0].clone();

    c.bench_function("legal_moves_initial", |b| {
        b.iter(|| black_box(sm.legal_moves(black_box(&start), &x).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_parse,
    bench_legal_moves,
    bench_depth_charge,
    bench_depth_charge_no_fixed_answers,
    bench_depth_charge_cached,
);
criterion_main!(benches);
