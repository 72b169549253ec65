//! Random decision helpers shared by every simulation system.
//!
//! All helpers take the RNG as an argument so callers decide between
//! `thread_rng()` for play and a seeded `StdRng` for reproducible runs.
//!
//! ```
//! use clangen_logic::random::percentage_roll;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! assert!(percentage_roll(100, &mut rng));
//! ```

use rand::Rng;
use thiserror::Error;

/// Errors from random selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RollError {
    /// `choose_random` was handed an empty sequence.
    #[error("cannot choose from an empty sequence")]
    EmptySelection,
}

/// Pick a uniformly random element of `items`.
pub fn choose_random<'a, T>(items: &'a [T], rng: &mut impl Rng) -> Result<&'a T, RollError> {
    if items.is_empty() {
        return Err(RollError::EmptySelection);
    }
    Ok(&items[rng.gen_range(0..items.len())])
}

/// Roll that succeeds with probability `1 / inverse_chance`.
///
/// Any `inverse_chance` of 1 or less always succeeds.
pub fn inverse_chance_roll(inverse_chance: i32, rng: &mut impl Rng) -> bool {
    if inverse_chance <= 1 {
        return true;
    }
    rng.gen_range(0..inverse_chance) == 0
}

/// Roll that succeeds with probability `chance_of_success / 100`.
///
/// Draws from 1..=100 inclusive, so 0 never succeeds and 100 always does.
pub fn percentage_roll(chance_of_success: i32, rng: &mut impl Rng) -> bool {
    rng.gen_range(1..=100) <= chance_of_success
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_choose_random_empty_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty: [u8; 0] = [];
        assert_eq!(choose_random(&empty, &mut rng), Err(RollError::EmptySelection));
    }

    #[test]
    fn test_choose_random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let items = ["Fire", "Gray", "Sand"];
        for _ in 0..200 {
            let pick = choose_random(&items, &mut rng).unwrap();
            assert!(items.contains(pick));
        }
    }

    #[test]
    fn test_choose_random_single_item() {
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(choose_random(&[42], &mut rng), Ok(&42));
    }

    #[test]
    fn test_choose_random_hits_every_item() {
        let mut rng = StdRng::seed_from_u64(11);
        let items = [0usize, 1, 2, 3];
        let mut seen = [false; 4];
        for _ in 0..400 {
            seen[*choose_random(&items, &mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_inverse_chance_one_always_true() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            assert!(inverse_chance_roll(1, &mut rng));
        }
    }

    #[test]
    fn test_inverse_chance_non_positive_always_true() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(inverse_chance_roll(0, &mut rng));
        assert!(inverse_chance_roll(-3, &mut rng));
    }

    #[test]
    fn test_inverse_chance_rate() {
        let mut rng = StdRng::seed_from_u64(99);
        let hits = (0..10_000).filter(|_| inverse_chance_roll(4, &mut rng)).count();
        // Expect ~2500
        assert!((2000..3000).contains(&hits), "hits = {hits}");
    }

    #[test]
    fn test_percentage_roll_bounds() {
        let mut rng = StdRng::seed_from_u64(17);
        for _ in 0..1000 {
            assert!(percentage_roll(100, &mut rng));
            assert!(!percentage_roll(0, &mut rng));
        }
    }

    #[test]
    fn test_percentage_roll_rate() {
        let mut rng = StdRng::seed_from_u64(23);
        let hits = (0..10_000).filter(|_| percentage_roll(30, &mut rng)).count();
        assert!((2500..3500).contains(&hits), "hits = {hits}");
    }
}
