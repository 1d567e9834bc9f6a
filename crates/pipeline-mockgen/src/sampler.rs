//! Field samplers layered on a unit-interval source
//!
//! Every sampler consumes exactly one value per scalar decision. The stream is
//! positional, so the order in which an entity calls its samplers is part of
//! the output contract.

use crate::rng::PseudoRandomStream;

/// Source of values in `[0, 1)` with categorical and bounded-integer draws
pub trait Sampler {
    /// Next value in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// `floor(unit() * n)`
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn below(&mut self, n: u32) -> u32 {
        (self.unit() * f64::from(n)).floor() as u32
    }

    /// `floor(unit() * (max - min)) + min`, i.e. a value in `[min, max)`
    fn between(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min < max, "empty range {min}..{max}");
        self.below(max - min) + min
    }

    /// Uniform pick from a non-empty ordered catalog
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    fn pick<'c, T>(&mut self, catalog: &'c [T]) -> &'c T {
        let index = (self.unit() * catalog.len() as f64).floor() as usize;
        &catalog[index]
    }
}

impl Sampler for PseudoRandomStream {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.next_value()
    }
}
