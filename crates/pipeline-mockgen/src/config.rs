//! Generator configuration

use crate::error::GenerationError;
use crate::rng::DEFAULT_SEED;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Number of programs in the portfolio data set
pub const DEFAULT_COUNT: usize = 50;

/// Generator configuration
///
/// All generated dates are relative to `reference_date`. Leaving it unset
/// captures the current UTC date once per generation run, so output is then
/// reproducible only between runs on the same day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Stream seed
    pub seed: u32,
    /// Number of programs to generate
    pub count: usize,
    /// Date that "now" refers to
    pub reference_date: Option<NaiveDate>,
}

impl GeneratorConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With seed
    #[inline]
    #[must_use]
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// With program count
    #[inline]
    #[must_use]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    /// With a fixed reference date
    #[inline]
    #[must_use]
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Reference date, falling back to today's UTC date
    #[must_use]
    pub fn resolve_reference_date(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Reject configurations that cannot produce a data set
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.count == 0 {
            return Err(GenerationError::invalid_argument(
                "program count must be positive",
            ));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            count: DEFAULT_COUNT,
            reference_date: None,
        }
    }
}
