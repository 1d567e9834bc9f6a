//! Search and facet filters for the program list
//!
//! Search is a case-insensitive substring match over name, code, indication
//! and therapeutic area. Facets are set-membership tests: an empty facet
//! matches everything, values within a facet are OR-combined, and facets are
//! AND-combined with each other and with the search.

use pipeline_model::{DevelopmentPhase, Program, TherapeuticArea};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// List-view filter state
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramFilter {
    /// Free-text search
    pub query: String,
    /// Selected phases
    pub phases: BTreeSet<DevelopmentPhase>,
    /// Selected therapeutic areas
    pub areas: BTreeSet<TherapeuticArea>,
}

impl ProgramFilter {
    /// Create empty filter (matches every program)
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With search query
    #[inline]
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    /// With phases selected
    #[must_use]
    pub fn with_phases(mut self, phases: impl IntoIterator<Item = DevelopmentPhase>) -> Self {
        self.phases.extend(phases);
        self
    }

    /// With areas selected
    #[must_use]
    pub fn with_areas(mut self, areas: impl IntoIterator<Item = TherapeuticArea>) -> Self {
        self.areas.extend(areas);
        self
    }

    /// Select the phase if unselected, unselect it otherwise
    pub fn toggle_phase(&mut self, phase: DevelopmentPhase) {
        if !self.phases.remove(&phase) {
            self.phases.insert(phase);
        }
    }

    /// Select the area if unselected, unselect it otherwise
    pub fn toggle_area(&mut self, area: TherapeuticArea) {
        if !self.areas.remove(&area) {
            self.areas.insert(area);
        }
    }

    /// Clear both facets; the search query is kept
    pub fn clear_facets(&mut self) {
        self.phases.clear();
        self.areas.clear();
    }

    /// Check if any facet value is selected
    #[inline]
    #[must_use]
    pub fn has_facets(&self) -> bool {
        !self.phases.is_empty() || !self.areas.is_empty()
    }

    /// Check if the program passes search and both facets
    #[must_use]
    pub fn matches(&self, program: &Program) -> bool {
        self.matches_query(program)
            && (self.phases.is_empty() || self.phases.contains(&program.phase))
            && (self.areas.is_empty() || self.areas.contains(&program.therapeutic_area))
    }

    fn matches_query(&self, program: &Program) -> bool {
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        [
            program.name.as_str(),
            program.code.as_str(),
            program.indication.as_str(),
            program.therapeutic_area.label(),
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
    }
}
