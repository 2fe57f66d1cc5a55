use crate::error::ConfigError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Lower bound (inclusive) of the three-day demand inflation factor.
pub const JITTER_MIN: f64 = 1.0;
/// Upper bound (exclusive) of the three-day demand inflation factor.
pub const JITTER_MAX: f64 = 1.18;

/// Supplies the bounded inflation factor applied to multi-day demand.
///
/// Every value returned must lie in `[JITTER_MIN, JITTER_MAX)`.
pub trait JitterSource {
    fn next_jitter(&mut self) -> f64;
}

/// Always returns the same factor. Used to pin demand figures in tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedJitter(f64);

impl FixedJitter {
    pub fn new(value: f64) -> Result<Self, ConfigError> {
        if (JITTER_MIN..JITTER_MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ConfigError::JitterOutOfRange(value))
        }
    }

    /// No inflation at all.
    pub fn neutral() -> Self {
        Self(JITTER_MIN)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Default for FixedJitter {
    fn default() -> Self {
        Self::neutral()
    }
}

impl JitterSource for FixedJitter {
    fn next_jitter(&mut self) -> f64 {
        self.0
    }
}

/// Uniform draws from `[JITTER_MIN, JITTER_MAX)` backed by a seedable RNG.
#[derive(Debug, Clone)]
pub struct SeededJitter {
    rng: StdRng,
}

impl SeededJitter {
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl JitterSource for SeededJitter {
    fn next_jitter(&mut self) -> f64 {
        self.rng.gen_range(JITTER_MIN..JITTER_MAX)
    }
}
