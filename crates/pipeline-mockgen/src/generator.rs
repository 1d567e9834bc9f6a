//! Top-level generation
//!
//! All programs are drawn from one stream that is never reset, so the
//! reproducibility contract covers the whole sequence rather than any single
//! program in isolation.

use crate::config::GeneratorConfig;
use crate::error::GenerationError;
use crate::program::generate_program;
use crate::rng::PseudoRandomStream;
use chrono::NaiveDate;
use pipeline_model::Program;

/// Deterministic portfolio generator
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create new generator
    #[inline]
    #[must_use]
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Lazily generate programs, one per iteration, from a fresh stream
    ///
    /// The reference date is resolved once, when the iterator is created.
    #[must_use]
    pub fn programs(&self) -> Programs {
        Programs {
            stream: PseudoRandomStream::new(self.config.seed),
            reference: self.config.resolve_reference_date(),
            next_index: 0,
            remaining: self.config.count,
        }
    }

    /// Generate the full data set
    pub fn generate(&self) -> Result<Vec<Program>, GenerationError> {
        if let Err(e) = self.config.validate() {
            tracing::warn!("Rejected generator configuration: {}", e);
            return Err(e);
        }

        let programs = self.programs();
        tracing::info!(
            seed = self.config.seed,
            count = self.config.count,
            reference_date = %programs.reference(),
            "Generating portfolio"
        );

        let result = programs.collect::<Result<Vec<_>, _>>()?;
        tracing::info!("Generated {} programs", result.len());
        Ok(result)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(GeneratorConfig::default())
    }
}

/// Iterator over generated programs sharing one stream
#[derive(Debug, Clone)]
pub struct Programs {
    stream: PseudoRandomStream,
    reference: NaiveDate,
    next_index: usize,
    remaining: usize,
}

impl Programs {
    /// Date all generated dates are relative to
    #[inline]
    #[must_use]
    pub fn reference(&self) -> NaiveDate {
        self.reference
    }

    /// Stream position, for diagnostics
    #[inline]
    #[must_use]
    pub fn stream(&self) -> &PseudoRandomStream {
        &self.stream
    }
}

impl Iterator for Programs {
    type Item = Result<Program, GenerationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let result = generate_program(self.next_index, &mut self.stream, self.reference);
        self.next_index += 1;
        // Stop after the first failure; later programs would use a shifted stream.
        self.remaining = if result.is_ok() { self.remaining - 1 } else { 0 };
        Some(result)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}

/// Generate `count` programs with the default seed and today's date
///
/// Equivalent to `Generator::new(GeneratorConfig::new().with_count(count)).generate()`.
pub fn generate(count: usize) -> Result<Vec<Program>, GenerationError> {
    Generator::new(GeneratorConfig::new().with_count(count)).generate()
}
