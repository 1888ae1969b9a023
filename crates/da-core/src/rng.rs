//! Random number generation
//!
//! Uses a seeded ChaCha RNG so a game can be replayed from its seed.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Game random number generator
///
/// Wraps ChaCha8Rng for reproducible random number generation.
#[derive(Debug, Clone)]
pub struct GameRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1
    ///
    /// Returns 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Returns true with probability percent/100
    pub fn percent(&mut self, percent: u32) -> bool {
        self.rn2(100) < percent
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }

    /// Sample a normal distribution with the given mean and standard deviation.
    ///
    /// A zero, negative or non-finite deviation collapses to the mean.
    pub fn gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        if !(std_dev > 0.0) {
            return mean;
        }
        match Normal::new(mean, std_dev) {
            Ok(normal) => normal.sample(&mut self.rng),
            Err(_) => mean,
        }
    }

    /// Gaussian draw truncated toward zero, never below `floor`
    pub fn gaussian_at_least(&mut self, mean: f64, std_dev: f64, floor: i32) -> i32 {
        (self.gaussian(mean, std_dev) as i32).max(floor)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rn2_bounds() {
        let mut rng = GameRng::new(42);
        for _ in 0..1000 {
            let n = rng.rn2(10);
            assert!(n < 10);
        }
    }

    #[test]
    fn test_reproducibility() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.rn2(100), rng2.rn2(100));
            assert_eq!(rng1.gaussian(5.0, 2.0), rng2.gaussian(5.0, 2.0));
        }
    }

    #[test]
    fn test_zero_inputs() {
        let mut rng = GameRng::new(42);
        assert_eq!(rng.rn2(0), 0);
        assert!(rng.choose::<u8>(&[]).is_none());
    }

    #[test]
    fn test_gaussian_degenerate_deviation() {
        let mut rng = GameRng::new(7);
        assert_eq!(rng.gaussian(3.0, 0.0), 3.0);
        assert_eq!(rng.gaussian(3.0, -1.0), 3.0);
        assert_eq!(rng.gaussian(3.0, f64::NAN), 3.0);
        for _ in 0..100 {
            assert_eq!(rng.gaussian(3.0, -2.5), 3.0);
        }
    }

    #[test]
    fn test_gaussian_at_least_respects_floor() {
        let mut rng = GameRng::new(7);
        for _ in 0..1000 {
            assert!(rng.gaussian_at_least(0.0, 5.0, 1) >= 1);
        }
    }

    #[test]
    fn test_gaussian_mean() {
        let mut rng = GameRng::new(1234);
        let trials = 10_000;
        let total: f64 = (0..trials).map(|_| rng.gaussian(10.0, 2.0)).sum();
        let mean = total / trials as f64;
        assert!((mean - 10.0).abs() < 0.2, "mean drifted to {mean}");
    }
}
