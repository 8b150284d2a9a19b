use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::Rng;
use rand::SeedableRng;

/// Fixed random seed to support repeatable testing
const SEED: [u8; 32] = [
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 15, 14, 13, 12, 11, 10, 9, 8, 7, 6,
    5, 4, 3, 2, 1,
];

/// Get a random number generator with a const seed for repeatable testing
pub fn rng_fixed_seed() -> StdRng {
    StdRng::from_seed(SEED)
}

/// Draw `n` distinct integers from `lo..hi`, sorted ascending
pub fn random_increasing(rng: &mut StdRng, n: usize, lo: i64, hi: i64) -> Vec<i64> {
    let mut out: Vec<i64> = sample(rng, (hi - lo) as usize, n)
        .into_iter()
        .map(|i| lo + i as i64)
        .collect();
    out.sort_unstable();
    out
}

/// Draw `n` integers from `lo..hi`, in no particular order
pub fn random_values(rng: &mut StdRng, n: usize, lo: i64, hi: i64) -> Vec<i64> {
    std::iter::repeat_with(|| rng.random_range(lo..hi))
        .take(n)
        .collect()
}

/// A random table with strictly increasing domain and range
pub fn random_table(rng: &mut StdRng, n: usize) -> (Vec<i64>, Vec<i64>) {
    let xs = random_increasing(rng, n, -32_768, 32_767);
    let ys = random_increasing(rng, n, -1_000_000, 1_000_000);
    (xs, ys)
}
