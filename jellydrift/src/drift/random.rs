//! Random source abstraction for the uncertainty term.
//!
//! The daily displacement adds a bounded random term. Drawing it through a
//! trait lets tests and reproducible runs inject a seeded or constant source
//! instead of a process-global generator.

use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};

/// A source of uniform draws in [0, 1).
pub trait RandomSource {
    /// Next value in [0, 1).
    fn next_unit(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Seeded pseudo-random source. Same seed, same sequence.
#[derive(Debug, Clone)]
pub struct SeededRandom {
    seed: u64,
    rng: StdRng,
}

impl SeededRandom {
    /// Create a source from a fixed seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a source with a seed drawn from the thread RNG.
    ///
    /// The seed is retained so the run can be replayed with [`SeededRandom::new`].
    pub fn from_random_seed() -> Self {
        Self::new(rand::random())
    }

    /// The seed this source was created from.
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Unseeded source backed by the thread-local RNG.
///
/// Used when a run does not need to be replayed.
#[derive(Debug, Clone, Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    /// Create a source drawing from [`rand::rng`].
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl RandomSource for ThreadRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// A source that always returns the same value.
///
/// Values outside [0, 1) are clamped into range; NaN and infinities become 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantRandom(f64);

impl ConstantRandom {
    /// Create a constant source.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self::zero();
        }
        Self(value.clamp(0.0, 1.0 - f64::EPSILON))
    }

    /// A source that always returns 0, removing the uncertainty term.
    pub fn zero() -> Self {
        Self(0.0)
    }
}

impl RandomSource for ConstantRandom {
    fn next_unit(&mut self) -> f64 {
        self.0
    }
}
