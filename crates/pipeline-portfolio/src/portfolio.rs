//! Read-only portfolio
//!
//! Built once from generator output by the composition root and passed down.
//! The programs sit behind an `Arc`, so clones share the same data and nothing
//! can mutate it in place.

use crate::detail::{DetailTab, ProgramDetail};
use crate::error::PortfolioError;
use crate::filter::ProgramFilter;
use crate::summary::PortfolioSummary;
use pipeline_model::Program;
use std::sync::Arc;

/// Immutable, shareable set of programs
#[derive(Debug, Clone)]
pub struct Portfolio {
    programs: Arc<[Program]>,
}

impl Portfolio {
    /// Create portfolio from generated programs
    #[must_use]
    pub fn new(programs: Vec<Program>) -> Self {
        tracing::debug!("Portfolio holds {} programs", programs.len());
        Self {
            programs: programs.into(),
        }
    }

    /// Number of programs
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.programs.len()
    }

    /// Check if the portfolio is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.programs.is_empty()
    }

    /// All programs in generation order
    #[inline]
    #[must_use]
    pub fn programs(&self) -> &[Program] {
        &self.programs
    }

    /// Look up a program by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Program> {
        self.programs.iter().find(|p| p.id == id)
    }

    /// Look up a program by id, failing if absent
    pub fn require(&self, id: &str) -> Result<&Program, PortfolioError> {
        self.get(id)
            .ok_or_else(|| PortfolioError::ProgramNotFound(id.to_string()))
    }

    /// Programs passing the filter, in generation order
    #[must_use]
    pub fn search(&self, filter: &ProgramFilter) -> Vec<&Program> {
        let matches: Vec<&Program> = self.programs.iter().filter(|p| filter.matches(p)).collect();
        tracing::debug!(
            query = %filter.query,
            phases = filter.phases.len(),
            areas = filter.areas.len(),
            "Showing {} of {} programs",
            matches.len(),
            self.len()
        );
        matches
    }

    /// Detail view of a program, opened on `tab`
    pub fn detail(&self, id: &str, tab: DetailTab) -> Result<ProgramDetail<'_>, PortfolioError> {
        Ok(ProgramDetail::new(self.require(id)?, tab))
    }

    /// Aggregate counts across the portfolio
    #[must_use]
    pub fn summary(&self) -> PortfolioSummary {
        PortfolioSummary::from_programs(&self.programs)
    }
}

impl From<Vec<Program>> for Portfolio {
    fn from(programs: Vec<Program>) -> Self {
        Self::new(programs)
    }
}
