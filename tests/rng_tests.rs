//! RNG tests for memory-grid-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие перестановок
//! - Fisher–Yates в RandomSource::shuffle идёт от последнего индекса вниз
//! - DeterministicRng тасует через `rand::seq::SliceRandom`
//! - пересидирование по номеру раунда
//! - стабильность hash-reseeding RngSeed

use memory_grid_engine::engine::RandomSource;
use memory_grid_engine::infra::{DeterministicRng, RngSeed, SystemRng};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

fn make_u64_seed(a: u64) -> [u8; 32] {
    let mut s = [0u8; 32];
    s[..8].copy_from_slice(&a.to_le_bytes());
    s
}

/// Всегда отдаёт 0 и запоминает, с какими `upper` его звали.
#[derive(Default)]
struct ZeroRng {
    calls: Vec<usize>,
}

impl RandomSource for ZeroRng {
    fn index_below(&mut self, upper: usize) -> usize {
        self.calls.push(upper);
        0
    }
}

//
// TEST 1 - DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_seed(make_u64_seed(123));
    let mut r2 = DeterministicRng::from_seed(make_u64_seed(123));

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
}

//
// TEST 2 - different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_u64(111);
    let mut r2 = DeterministicRng::from_u64(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds must produce different shuffle");
}

//
// TEST 3 - no duplicates after shuffle
//
#[test]
fn shuffle_produces_no_duplicates() {
    let mut rng = DeterministicRng::from_u64(555);

    let mut slots = (0..16).collect::<Vec<u8>>();
    rng.shuffle(&mut slots);

    let mut sorted = slots.clone();
    sorted.sort_unstable();
    sorted.dedup();

    assert_eq!(sorted, (0..16).collect::<Vec<u8>>());
}

//
// TEST 4 - Fisher–Yates walks from the last index down
//
#[test]
fn default_shuffle_is_fisher_yates_from_the_end() {
    let mut rng = ZeroRng::default();
    let mut v = vec![0, 1, 2, 3];

    rng.shuffle(&mut v);

    // i=3: swap(3,0) -> [3,1,2,0]; i=2: swap(2,0) -> [2,1,3,0]; i=1: swap(1,0) -> [1,2,3,0]
    assert_eq!(v, vec![1, 2, 3, 0]);
    assert_eq!(rng.calls, vec![4, 3, 2]);
}

#[test]
fn shuffle_of_empty_and_single_is_noop() {
    let mut rng = ZeroRng::default();

    let mut empty: Vec<u8> = Vec::new();
    rng.shuffle(&mut empty);
    let mut one = vec![7u8];
    rng.shuffle(&mut one);

    assert!(empty.is_empty());
    assert_eq!(one, vec![7]);
    assert!(rng.calls.is_empty());
}

#[test]
fn deterministic_rng_shuffle_matches_rand_slice_shuffle() {
    let seed = make_u64_seed(2024);

    let mut ours = DeterministicRng::from_seed(seed);
    let mut reference = StdRng::from_seed(seed);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();
    ours.shuffle(&mut a);
    b.shuffle(&mut reference);

    assert_eq!(a, b);
}

#[test]
fn system_rng_shuffle_is_a_permutation() {
    let mut rng = SystemRng;
    let mut v: Vec<u8> = (0..64).collect();
    rng.shuffle(&mut v);

    v.sort_unstable();
    assert_eq!(v, (0..64).collect::<Vec<u8>>());
}

//
// TEST 5 - begin_round reseeds independently of previous consumption
//
#[test]
fn begin_round_reseeds_from_round_index() {
    let mut r1 = DeterministicRng::from_u64(42);
    let mut r2 = DeterministicRng::from_u64(42);

    // r1 успел что-то потратить в раунде 0.
    r1.begin_round(0);
    let mut junk: Vec<u32> = (0..30).collect();
    r1.shuffle(&mut junk);

    r1.begin_round(3);
    r2.begin_round(3);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();
    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same base seed + round index must give same shuffle");
}

#[test]
fn different_rounds_give_different_shuffles() {
    let mut rng = DeterministicRng::from_u64(42);

    rng.begin_round(0);
    let mut a: Vec<u32> = (0..52).collect();
    rng.shuffle(&mut a);

    rng.begin_round(1);
    let mut b: Vec<u32> = (0..52).collect();
    rng.shuffle(&mut b);

    assert_ne!(a, b);
}

//
// TEST 6 - SystemRng stays in range
//
#[test]
fn system_rng_index_below_in_range() {
    let mut rng = SystemRng;
    for upper in 1..50 {
        for _ in 0..20 {
            assert!(rng.index_below(upper) < upper);
        }
    }
}

//
// TEST 7 - RngSeed hash pipeline
//
#[test]
fn rngseed_derive_changes_seed_per_round() {
    let base = RngSeed::from_u64(777);

    let s0 = base.derive(0);
    let s1 = base.derive(1);

    assert_ne!(s0, s1, "Different round indexes must produce different seeds");
    assert_ne!(s0, base);
    assert_eq!(s0, RngSeed::from_u64(777).derive(0), "derive must be pure");
}

#[test]
fn rngseed_from_u64_layout() {
    let seed = RngSeed::from_u64(1);
    assert_eq!(seed.bytes[0], 1);
    assert!(seed.bytes[1..].iter().all(|&b| b == 0));
    assert_eq!(RngSeed::from_bytes(seed.bytes), seed);
}
