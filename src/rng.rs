use rand::distr::uniform::SampleUniform;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// The single source of randomness for a run.
///
/// Same seed and same call sequence give the same draws, which is what makes
/// runs reproducible. Nothing in the simulation may draw from anywhere else.
#[derive(Debug, Clone)]
pub struct RandomSource {
    rng: ChaCha8Rng,
    seed: u64,
}

impl RandomSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Restart the stream from `seed`
    pub fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in [lo, hi). An empty range yields `lo`.
    pub fn uniform_int<T>(&mut self, lo: T, hi: T) -> T
    where
        T: SampleUniform + PartialOrd + Copy,
    {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    /// Uniform real in [lo, hi). An empty range yields `lo`.
    pub fn uniform_real(&mut self, lo: f64, hi: f64) -> f64 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..hi)
    }

    /// Fisher-Yates shuffle: for each position `i`, swap with `uniform_int(i, n)`.
    ///
    /// `j == i` is a legal draw; leaving an element in place is part of a
    /// uniform permutation.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        let n = items.len();
        for i in 0..n {
            let j = self.uniform_int(i, n);
            items.swap(i, j);
        }
    }
}
