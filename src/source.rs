//! Randomness providers.
//!
//! A bag only ever needs one capability: a uniform integer in `[0, bound)`.
//! Every [`rand::Rng`] provides it, so thread-local, seeded and ChaCha RNGs all
//! plug in directly. [`ScriptedSource`] replays fixed draws for tests that need
//! to land on an exact cumulative boundary.

use rand::Rng;

/// Source of uniform integer draws.
pub trait RandomSource {
    /// Uniform integer in `[0, bound)`.
    ///
    /// Callers guarantee `bound > 0`.
    fn draw_below(&mut self, bound: u64) -> u64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn draw_below(&mut self, bound: u64) -> u64 {
        self.random_range(0..bound)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound, so the result always
/// stays in range.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<u64>,
    next: usize,
}

impl ScriptedSource {
    /// Replay `draws` in order.
    ///
    /// # Panics
    ///
    /// Panics if `draws` is empty.
    pub fn new(draws: impl Into<Vec<u64>>) -> Self {
        let draws = draws.into();
        assert!(!draws.is_empty(), "ScriptedSource: draws must be non-empty");
        Self { draws, next: 0 }
    }

    /// Number of draws served so far.
    pub fn served(&self) -> usize {
        self.next
    }
}

impl RandomSource for ScriptedSource {
    fn draw_below(&mut self, bound: u64) -> u64 {
        let value = self.draws[self.next % self.draws.len()];
        self.next += 1;
        value % bound
    }
}
