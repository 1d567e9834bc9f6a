//! Pipeline Portfolio
//!
//! The consumer side of the generated data set.
//!
//! # Overview
//!
//! - **Portfolio**: immutable, shareable set of programs with lookup by id
//! - **ProgramFilter**: case-insensitive search plus phase and area facets
//! - **ProgramDetail**: overview, studies and milestones tabs
//! - **EditSession**: transient edit overlay on a copy; never persisted
//! - **PortfolioSummary**: counts per phase and area
//!
//! # Example
//!
//! ```rust,ignore
//! use pipeline_portfolio::{Portfolio, ProgramFilter};
//! use pipeline_model::DevelopmentPhase;
//!
//! let portfolio = Portfolio::new(programs);
//! let filter = ProgramFilter::new()
//!     .with_query("copd")
//!     .with_phases([DevelopmentPhase::PhaseII]);
//!
//! for program in portfolio.search(&filter) {
//!     println!("{} {}", program.code, program.name);
//! }
//! ```

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod detail;
pub mod edit;
pub mod error;
pub mod export;
pub mod filter;
pub mod portfolio;
pub mod summary;

// Re-exports
pub use detail::{timeline, DetailTab, ProgramDetail};
pub use edit::{CurrentUser, EditSession, ProgramEdit, UserRole};
pub use error::PortfolioError;
pub use export::{from_json, to_json, to_json_pretty};
pub use filter::ProgramFilter;
pub use portfolio::Portfolio;
pub use summary::PortfolioSummary;

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the portfolio
    pub use crate::{
        CurrentUser, DetailTab, EditSession, Portfolio, PortfolioError, ProgramEdit,
        ProgramFilter, UserRole,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
