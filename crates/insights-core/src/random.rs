//! Injectable randomness for series generation.
//!
//! The generator only ever asks for "the next uniform value in `[0, 1)`", so a
//! test can pin a series exactly by handing it a [`ConstantSource`] or a
//! [`ScriptedSource`] instead of the default [`FastRandSource`].

use crate::Ticker;

/// Source of uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_uniform(&mut self) -> f64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}

/// `fastrand`-backed source, entropy-seeded unless a seed is given.
#[derive(Debug, Clone)]
pub struct FastRandSource {
    rng: fastrand::Rng,
}

impl FastRandSource {
    pub fn from_entropy() -> Self {
        Self {
            rng: fastrand::Rng::new(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
        }
    }
}

impl Default for FastRandSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl RandomSource for FastRandSource {
    fn next_uniform(&mut self) -> f64 {
        self.rng.f64()
    }
}

/// Returns the same value for every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantSource(pub f64);

impl RandomSource for ConstantSource {
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// An empty script behaves like `ConstantSource(0.5)`.
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_uniform(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

/// How a multi-instrument universe obtains its per-instrument sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Seeding {
    /// Fresh entropy for every instrument.
    #[default]
    Entropy,
    /// Deterministic: each instrument gets a seed derived from this base seed
    /// and its ticker, independent of generation order.
    Fixed(u64),
}

impl Seeding {
    pub fn source_for(self, ticker: &Ticker) -> FastRandSource {
        match self {
            Self::Entropy => FastRandSource::from_entropy(),
            Self::Fixed(base) => FastRandSource::seeded(derive_seed(base, ticker)),
        }
    }
}

/// FNV-1a over the ticker bytes, folded with the base seed.
fn derive_seed(base: u64, ticker: &Ticker) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET ^ base;
    for byte in ticker.as_str().bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
