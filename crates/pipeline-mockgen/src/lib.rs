//! Pipeline Mock Generator
//!
//! Deterministic synthetic data for the drug-development pipeline portfolio.
//!
//! # Overview
//!
//! - **PseudoRandomStream**: seeded linear congruential stream in `[0, 1)`
//! - **Sampler**: categorical and bounded-integer draws, one value per decision
//! - **Generator**: programs, studies and milestones drawn in a fixed order
//!   from one shared stream
//!
//! The same seed, count and reference date always produce the same data set.
//!
//! # Example
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pipeline_mockgen::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::new()
//!     .with_count(1)
//!     .with_reference_date(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
//! let programs = Generator::new(config).generate().unwrap();
//!
//! assert_eq!(programs[0].id, "PRG001");
//! assert_eq!(programs[0].name, "INF-0001");
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod calendar;
pub mod catalog;
pub mod config;
pub mod error;
pub mod generator;
pub mod milestone;
pub mod program;
pub mod rng;
pub mod sampler;
pub mod study;

// Re-exports
pub use config::{GeneratorConfig, DEFAULT_COUNT};
pub use error::GenerationError;
pub use generator::{generate, Generator, Programs};
pub use milestone::{generate_milestone, generate_milestones};
pub use program::{generate_program, program_id};
pub use rng::{PseudoRandomStream, DEFAULT_SEED};
pub use sampler::Sampler;
pub use study::{generate_study, study_name};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for generating portfolio data
    pub use crate::{generate, GenerationError, Generator, GeneratorConfig, PseudoRandomStream, Sampler};
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
