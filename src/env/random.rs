//! Random sources for synthetic device generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `0..len`, or 0 when `len` is zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local generator from `rand`.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..len)
    }
}

/// Reproducible generator seeded from a fixed value.
#[derive(Clone, Debug)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

/// Replays a fixed sequence of indices, wrapping at the end.
///
/// Each value is reduced modulo the requested length.
///
/// # Example
///
/// ```rust
/// use classdesk::env::{RandomSource, ScriptedRandom};
///
/// let mut random = ScriptedRandom::new(vec![1, 7]);
/// assert_eq!(random.pick(4), 1);
/// assert_eq!(random.pick(4), 3);
/// assert_eq!(random.pick(4), 1);
/// ```
#[derive(Clone, Debug)]
pub struct ScriptedRandom {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn pick(&mut self, len: usize) -> usize {
        if self.script.is_empty() || len == 0 {
            return 0;
        }
        let value = self.script[self.cursor % self.script.len()];
        self.cursor += 1;
        value % len
    }
}
