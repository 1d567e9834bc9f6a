//! Portfolio-wide aggregates

use pipeline_model::{DevelopmentPhase, Program, TherapeuticArea};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counts across every program in the portfolio
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    /// Number of programs
    pub programs: usize,
    /// Number of studies across all programs
    pub studies: usize,
    /// Sum of current enrollment
    pub total_enrollment: u64,
    /// Recruiting or active studies
    pub active_studies: u64,
    /// Completed studies
    pub completed_studies: u64,
    /// Completed program-level milestones
    pub completed_milestones: u64,
    /// Program-level milestones
    pub total_milestones: u64,
    /// Programs per phase; phases with no programs are absent
    pub by_phase: BTreeMap<DevelopmentPhase, usize>,
    /// Programs per area; areas with no programs are absent
    pub by_area: BTreeMap<TherapeuticArea, usize>,
}

impl PortfolioSummary {
    /// Sum stored key metrics; nothing is recomputed from studies
    #[must_use]
    pub fn from_programs(programs: &[Program]) -> Self {
        programs.iter().fold(Self::default(), |mut acc, p| {
            let m = &p.key_metrics;
            acc.programs += 1;
            acc.studies += p.studies.len();
            acc.total_enrollment += u64::from(m.total_enrollment);
            acc.active_studies += u64::from(m.active_studies);
            acc.completed_studies += u64::from(m.completed_studies);
            acc.completed_milestones += u64::from(m.completed_milestones);
            acc.total_milestones += u64::from(m.total_milestones);
            *acc.by_phase.entry(p.phase).or_default() += 1;
            *acc.by_area.entry(p.therapeutic_area).or_default() += 1;
            acc
        })
    }
}
