#[macro_use]
extern crate criterion;

use criterion::Criterion;
use poker_equity::core::{Deck, Hand, Rankable, compare};
use rand::{SeedableRng, rngs::StdRng};

fn sample_hand(n: usize, seed: u64) -> Hand {
    let mut rng = StdRng::seed_from_u64(seed);
    let cards = Deck::default()
        .sample_without_replacement(n, &mut rng)
        .expect("Should be able to sample from a full deck.");
    Hand::new_with_cards(cards).expect("Sampled cards are unique.")
}

fn rank_one(c: &mut Criterion) {
    let hand = sample_hand(5, 1);
    c.bench_function("Rank one 5 card hand", move |b| b.iter(|| hand.rank()));
}

fn rank_best_seven(c: &mut Criterion) {
    let hand = sample_hand(7, 2);
    c.bench_function("Rank best 5card hand from 7", move |b| {
        b.iter(|| hand.rank())
    });
}

fn compare_two_sevens(c: &mut Criterion) {
    let a = sample_hand(7, 3).rank().expect("Seven cards rank.");
    let b_rank = sample_hand(7, 4).rank().expect("Seven cards rank.");
    c.bench_function("Compare two ranked hands", move |b| {
        b.iter(|| compare(&a, &b_rank))
    });
}

criterion_group!(benches, rank_one, rank_best_seven, compare_two_sevens);
criterion_main!(benches);
