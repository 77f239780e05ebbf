//! Seeded random number generation.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the RNG for one run: reproducible when `seed` is set.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_same_seed_same_stream() {
        let mut a = create_rng(Some(7));
        let mut b = create_rng(Some(7));
        let xs: Vec<u32> = (0..8).map(|_| a.random()).collect();
        let ys: Vec<u32> = (0..8).map(|_| b.random()).collect();
        assert_eq!(xs, ys);
    }
}
