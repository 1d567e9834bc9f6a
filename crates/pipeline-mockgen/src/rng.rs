//! Seeded linear congruential stream
//!
//! `state' = (state * 9301 + 49297) mod 233280`, emitting `state' / 233280`.
//! Every stream owns its state; there is no shared instance.

/// Seed used for the portfolio data set
pub const DEFAULT_SEED: u32 = 12345;

/// LCG multiplier
pub const MULTIPLIER: u64 = 9301;
/// LCG increment
pub const INCREMENT: u64 = 49297;
/// LCG modulus
pub const MODULUS: u64 = 233_280;

/// Deterministic stream of values in `[0, 1)`
///
/// Cloning a stream forks it: the clone continues from the same position
/// without affecting the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PseudoRandomStream {
    state: u64,
    draws: u64,
}

impl PseudoRandomStream {
    /// Create new stream from a seed
    #[inline]
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self {
            state: u64::from(seed),
            draws: 0,
        }
    }

    /// Advance the state and return the next value in `[0, 1)`
    #[inline]
    #[allow(clippy::cast_precision_loss)]
    pub fn next_value(&mut self) -> f64 {
        self.state = (self.state * MULTIPLIER + INCREMENT) % MODULUS;
        self.draws += 1;
        self.state as f64 / MODULUS as f64
    }

    /// Current internal state
    #[inline]
    #[must_use]
    pub fn state(&self) -> u64 {
        self.state
    }

    /// Number of values drawn so far
    #[inline]
    #[must_use]
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

impl Default for PseudoRandomStream {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// The stream never ends
impl Iterator for PseudoRandomStream {
    type Item = f64;

    #[inline]
    fn next(&mut self) -> Option<f64> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}
