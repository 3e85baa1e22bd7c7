//! Bounded random sources.
//!
//! # Contract
//!
//! A [`RandomSource`] turns an internal draw `u ∈ [0, 1]` into an integer in
//! the closed range `[min, max]`:
//!
//!   value = min + round((max - min) * u)
//!
//! Only the distribution of `u` differs between variants.  Every variant is
//! deterministic for a given seed (or script), and [`RandomSource::rewind`]
//! puts it back into its freshly-seeded state so a simulator can replay a run
//! exactly after a reset.
//!
//! | Variant           | Draw `u`                                         |
//! |-------------------|--------------------------------------------------|
//! | `GaussianSource`  | `clamp(0.5 + 0.25 * z, 0, 1)`, `z ~ N(0, 1)`     |
//! | `UniformSource`   | uniform on `[0, 1]`                              |
//! | `FixedSource`     | a constant fraction                              |
//! | `SequenceSource`  | none: replays scripted values, clamped           |

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Spread of the clamped bell curve; ±2σ covers the whole `[0, 1]` range.
const GAUSSIAN_SPREAD: f64 = 0.25;

/// Supplies bounded pseudo-random integers to the agent generator.
pub trait RandomSource: Send {
    /// A value in `[min, max]`.  Callers guarantee `min <= max`.
    fn next(&mut self, min: u64, max: u64) -> u64;

    /// Restore the source to its initial (seeded) state.
    fn rewind(&mut self);
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next(&mut self, min: u64, max: u64) -> u64 {
        (**self).next(min, max)
    }

    fn rewind(&mut self) {
        (**self).rewind()
    }
}

/// Map a unit draw onto `[min, max]`.
///
/// The offset is clamped to the integer span: above 2^53 the float product
/// can round past `max - min`.
#[inline]
fn scale(min: u64, max: u64, u: f64) -> u64 {
    debug_assert!(min <= max, "inverted bounds {min} > {max}");
    let span = max - min;
    let offset = (span as f64 * u.clamp(0.0, 1.0)).round() as u64;
    min + offset.min(span)
}

// ── GaussianSource ────────────────────────────────────────────────────────────

/// Production default: a clamped, bell-shaped draw centred on the middle of
/// the range.
pub struct GaussianSource {
    seed: u64,
    rng:  SmallRng,
}

impl GaussianSource {
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: SmallRng::seed_from_u64(seed) }
    }

    /// Seed from the thread RNG.  The chosen seed is kept, so [`rewind`]
    /// still replays the same stream.
    ///
    /// [`rewind`]: RandomSource::rewind
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this source replays from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn unit(&mut self) -> f64 {
        let z: f64 = self.rng.sample(StandardNormal);
        (0.5 + GAUSSIAN_SPREAD * z).clamp(0.0, 1.0)
    }
}

impl RandomSource for GaussianSource {
    fn next(&mut self, min: u64, max: u64) -> u64 {
        let u = self.unit();
        scale(min, max, u)
    }

    fn rewind(&mut self) {
        self.rng = SmallRng::seed_from_u64(self.seed);
    }
}

// ── UniformSource ─────────────────────────────────────────────────────────────

/// Flat draw over the whole range.
pub struct UniformSource {
    seed: u64,
    rng:  SmallRng,
}

impl UniformSource {
    pub fn new(seed: u64) -> Self {
        Self { seed, rng: SmallRng::seed_from_u64(seed) }
    }
}

impl RandomSource for UniformSource {
    fn next(&mut self, min: u64, max: u64) -> u64 {
        let u = self.rng.gen_range(0.0..=1.0);
        scale(min, max, u)
    }

    fn rewind(&mut self) {
        self.rng = SmallRng::seed_from_u64(self.seed);
    }
}

// ── FixedSource ───────────────────────────────────────────────────────────────

/// Deterministic stub: always the same fraction of the range.
#[derive(Clone, Copy, Debug)]
pub struct FixedSource {
    fraction: f64,
}

impl FixedSource {
    /// `fraction` is clamped to `[0, 1]`.
    pub fn new(fraction: f64) -> Self {
        Self { fraction: fraction.clamp(0.0, 1.0) }
    }
}

impl Default for FixedSource {
    /// Midpoint of the range.
    fn default() -> Self {
        Self::new(0.5)
    }
}

impl RandomSource for FixedSource {
    fn next(&mut self, min: u64, max: u64) -> u64 {
        scale(min, max, self.fraction)
    }

    fn rewind(&mut self) {}
}

// ── SequenceSource ────────────────────────────────────────────────────────────

/// Deterministic stub that replays a script, cycling when exhausted.
///
/// Each scripted value is clamped into the requested `[min, max]`, so one
/// script can drive both the arrival and the service draws.  An empty script
/// yields `min`.
#[derive(Clone, Debug)]
pub struct SequenceSource {
    values: Vec<u64>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(values: Vec<u64>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for SequenceSource {
    fn next(&mut self, min: u64, max: u64) -> u64 {
        let Some(&value) = self.values.get(self.cursor) else {
            return min;
        };
        self.cursor = (self.cursor + 1) % self.values.len();
        value.clamp(min, max)
    }

    fn rewind(&mut self) {
        self.cursor = 0;
    }
}
