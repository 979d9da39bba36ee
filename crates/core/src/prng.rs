//! Randomness for random base colors and random schemes.
//!
//! The generators never reach for a global RNG. They take a [`RandomSource`],
//! so tests and reproducible sketches can seed it, and [`Xorshift64`] is the
//! deterministic default.

use serde::{Deserialize, Serialize};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Returns a value in `[0, bound)`. `bound` is never 0.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Xorshift64 deterministic PRNG. Same seed always produces the same sequence.
///
/// Seed 0 is replaced with a non-zero fallback to avoid the all-zeros fixed
/// point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    const FALLBACK_SEED: u64 = 0x5EED_DEAD_BEEF_CAFE;

    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { Self::FALLBACK_SEED } else { seed },
        }
    }

    /// Advances the state with shifts (13, 7, 17) and returns it.
    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Returns a usize in [0, max) by modulo reduction.
    ///
    /// # Panics
    ///
    /// Panics if `max` is 0.
    pub fn next_usize(&mut self, max: usize) -> usize {
        (self.next_u64() % max as u64) as usize
    }
}

impl RandomSource for Xorshift64 {
    fn next_index(&mut self, bound: usize) -> usize {
        self.next_usize(bound)
    }
}
