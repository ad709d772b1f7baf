//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Injected**: The model owns one `GameRng`, seeded at construction;
//!   no global or thread-local randomness anywhere in the engine
//! - **Serializable**: O(1) state capture and restore for replays
//!
//! Every random decision - bubble colors, box spawns, reward draws - flows
//! through this one source, so a seed fully determines a game's spawn and
//! reward sequence. Tests rely on this.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic RNG backing all engine randomness.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Choose a random index with weighted probability.
    ///
    /// Weights do not need to sum to 1.0.
    /// Returns `None` if weights are empty or all zero.
    pub fn choose_weighted(&mut self, weights: &[f32]) -> Option<usize> {
        if weights.is_empty() {
            return None;
        }

        let total: f32 = weights.iter().sum();
        if total <= 0.0 {
            return None;
        }

        let mut threshold = self.inner.gen::<f32>() * total;

        for (i, &weight) in weights.iter().enumerate() {
            threshold -= weight;
            if threshold <= 0.0 {
                return Some(i);
            }
        }

        // Floating point edge case - return last non-zero weight
        Some(weights.len() - 1)
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

/// Serializable RNG state for replay checkpointing.
///
/// Uses ChaCha8 word position for O(1) serialization regardless of
/// how many random numbers have been generated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_choose_weighted() {
        let mut rng = GameRng::new(42);

        // Heavily weighted towards index 0
        let weights = vec![100.0, 0.0, 0.0];
        for _ in 0..10 {
            assert_eq!(rng.choose_weighted(&weights), Some(0));
        }

        // Empty weights
        assert_eq!(rng.choose_weighted(&[]), None);

        // All zero weights
        assert_eq!(rng.choose_weighted(&[0.0, 0.0]), None);
    }

    #[test]
    fn test_choose_weighted_covers_all_indices() {
        let mut rng = GameRng::new(7);
        let weights = [0.5, 0.3, 0.2];
        let mut seen = [false; 3];

        for _ in 0..1000 {
            let idx = rng.choose_weighted(&weights).unwrap();
            seen[idx] = true;
        }

        assert_eq!(seen, [true, true, true]);
    }

    #[test]
    fn test_state_round_trip() {
        let mut rng = GameRng::new(42);

        // Advance the RNG
        for _ in 0..100 {
            rng.gen_range_usize(0..1000);
        }

        // Save state
        let state = rng.state();

        // Continue generating
        let expected: Vec<_> = (0..10).map(|_| rng.gen_range_usize(0..1000)).collect();

        // Restore and verify
        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.gen_range_usize(0..1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
