#[macro_use]
extern crate criterion;
extern crate rand;
extern crate rs_gto;

use criterion::Criterion;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_gto::core::{Deck, Rankable};
use rs_gto::holdem::evaluate;

fn dealt(n: usize) -> Vec<rs_gto::core::Card> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut deck = Deck::new();
    deck.shuffle(&mut rng);
    deck.deal(n).unwrap()
}

fn rank_one(c: &mut Criterion) {
    let hand = dealt(5);
    c.bench_function("Rank one 5 card hand", move |b| b.iter(|| hand.rank_five()));
}

fn rank_best_seven(c: &mut Criterion) {
    let hand = dealt(7);
    c.bench_function("Rank best 5card hand from 7", move |b| {
        b.iter(|| hand.rank())
    });
}

fn evaluate_river(c: &mut Criterion) {
    let cards = dealt(7);
    let (hole, board) = cards.split_at(2);
    c.bench_function("Evaluate hole cards on a river board", |b| {
        b.iter(|| evaluate(hole, board))
    });
}

criterion_group!(benches, rank_one, rank_best_seven, evaluate_river);
criterion_main!(benches);
