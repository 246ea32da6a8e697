use rand::Rng;

/// The randomness the maze makers consume. Implemented for every [`Rng`], so `rand::rng()` or a
/// seeded `StdRng` can be passed straight in.
pub trait RandomSource {
    /// Uniform integer in `[min, max)`. Callers guarantee `min < max`.
    fn uniform_int(&mut self, min: usize, max: usize) -> usize;

    /// Uniform float in `[0, 1)`.
    fn uniform_float(&mut self) -> f64;
}

impl<R: Rng> RandomSource for R {
    fn uniform_int(&mut self, min: usize, max: usize) -> usize {
        debug_assert!(min < max, "empty range {}..{}", min, max);
        self.random_range(min..max)
    }

    fn uniform_float(&mut self) -> f64 {
        self.random::<f64>()
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_seeded_rng_stays_within_requested_ranges() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let value = rng.uniform_int(3, 8);
            assert!((3..8).contains(&value));

            let unit = rng.uniform_float();
            assert!((0.0..1.0).contains(&unit));
        }
    }

    #[test]
    fn test_singleton_range_always_yields_its_minimum() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..32 {
            assert_eq!(rng.uniform_int(4, 5), 4);
        }
    }
}
