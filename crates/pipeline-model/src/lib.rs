//! Pipeline Model
//!
//! Records for the drug-development pipeline portfolio.
//!
//! # Overview
//!
//! - **Program**: a drug-development project with studies and overall milestones
//! - **Study**: a clinical trial with enrollment and site tracking
//! - **Milestone**: a dated checkpoint with a status
//! - **Categories**: closed enumerations with ordered catalogs and display labels
//!
//! # Example
//!
//! ```rust
//! use pipeline_model::{DevelopmentPhase, TherapeuticArea};
//!
//! let phase: DevelopmentPhase = "phase ii".parse().unwrap();
//! assert_eq!(phase.label(), "Phase II");
//! assert_eq!(TherapeuticArea::Respiratory.name_prefix(), "RES");
//! ```

#![allow(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod category;
pub mod error;
pub mod record;

// Re-exports
pub use category::{DevelopmentPhase, MilestoneStatus, StudyStatus, TherapeuticArea};
pub use error::ParseLabelError;
pub use record::{KeyMetrics, Milestone, Program, Study};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with pipeline records
    pub use crate::{
        DevelopmentPhase, KeyMetrics, Milestone, MilestoneStatus, Program, Study, StudyStatus,
        TherapeuticArea,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
