//! Provides a set of patterns useful for testing and benchmarking sorting algorithms.
//! Currently limited to i32 values.

use std::env;

use once_cell::sync::Lazy;
use rand::prelude::*;
use zipf::ZipfDistribution;

// --- Public ---

pub fn random(len: usize) -> Vec<i32> {
    //     .
    // : . : :
    // :.:::.::

    let mut rng = new_seeded_rng();

    (0..len).map(|_| rng.gen::<i32>()).collect()
}

pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<rand::distributions::Uniform<i32>>,
{
    // :.:.:.::

    let mut rng = new_seeded_rng();
    let dist: rand::distributions::Uniform<i32> = range.into();

    (0..len).map(|_| dist.sample(&mut rng)).collect()
}

pub fn random_zipf(len: usize, exponent: f64) -> Vec<i32> {
    // https://en.wikipedia.org/wiki/Zipf's_law

    let mut rng = new_seeded_rng();

    // Zipf needs at least one element to draw from.
    let Ok(dist) = ZipfDistribution::new(len.max(1), exponent) else {
        panic!("invalid zipf exponent {exponent}");
    };

    (0..len).map(|_| dist.sample(&mut rng) as i32).collect()
}

pub fn random_extremes(len: usize) -> Vec<i32> {
    // Mostly i32::MIN, i32::MAX, 0 and their neighbours, to catch overflow in comparisons.

    const VALUES: [i32; 7] = [i32::MIN, i32::MIN + 1, -1, 0, 1, i32::MAX - 1, i32::MAX];

    let mut rng = new_seeded_rng();

    (0..len)
        .map(|_| VALUES[rng.gen_range(0..VALUES.len())])
        .collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    // ......
    // ::::::

    (0..len).map(|_| 66).collect()
}

pub fn ascending(len: usize) -> Vec<i32> {
    //     .:
    //   .:::
    // .:::::

    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    // :.
    // :::.
    // :::::.

    (0..len as i32).rev().collect()
}

pub fn saw_ascending(len: usize, saw_count: usize) -> Vec<i32> {
    //   .:  .:
    // .:::.:::

    if len == 0 {
        return Vec::new();
    }

    let saw_len = len.div_ceil(saw_count.clamp(1, len));

    (0..len).map(|i| (i % saw_len) as i32).collect()
}

pub fn saw_descending(len: usize, saw_count: usize) -> Vec<i32> {
    // :.  :.
    // :::.:::.

    let mut v = saw_ascending(len, saw_count);
    for chunk_val in v.iter_mut() {
        *chunk_val = -*chunk_val;
    }

    v
}

pub fn pipe_organ(len: usize) -> Vec<i32> {
    //   .:.
    // .:::::.

    let half = len / 2;

    (0..half as i32)
        .chain((0..(len - half) as i32).rev())
        .collect()
}

/// Seed used by every pattern in this process. Set `OVERRIDE_SEED` to reproduce a failure.
pub fn random_init_seed() -> u64 {
    *SEED
}

// --- Private ---

static SEED: Lazy<u64> = Lazy::new(|| {
    env::var("OVERRIDE_SEED")
        .ok()
        .and_then(|seed| seed.parse::<u64>().ok())
        .unwrap_or_else(|| thread_rng().gen())
});

fn new_seeded_rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
