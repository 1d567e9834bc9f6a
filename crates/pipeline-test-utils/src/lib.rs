//! Testing utilities for the pipeline workspace
//!
//! Shared fixtures pinned to a fixed reference date.

#![allow(missing_docs)]

use chrono::NaiveDate;
use pipeline_mockgen::{Generator, GeneratorConfig, DEFAULT_SEED};
use pipeline_model::{Milestone, MilestoneStatus, Program};

/// Reference date all fixtures are generated against
pub fn fixture_reference_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

pub fn fixture_config(count: usize) -> GeneratorConfig {
    GeneratorConfig::new()
        .with_seed(DEFAULT_SEED)
        .with_count(count)
        .with_reference_date(fixture_reference_date())
}

/// The default 50-program portfolio, pinned to the fixture date
pub fn fixture_programs() -> Vec<Program> {
    fixture_programs_with_count(50)
}

pub fn fixture_programs_with_count(count: usize) -> Vec<Program> {
    Generator::new(fixture_config(count)).generate().unwrap()
}

pub fn fixture_program(id: &str) -> Program {
    fixture_programs()
        .into_iter()
        .find(|p| p.id == id)
        .unwrap_or_else(|| panic!("no fixture program {id}"))
}

pub fn create_milestone(index: usize, target: NaiveDate, status: MilestoneStatus) -> Milestone {
    Milestone {
        id: format!("milestone-{index}"),
        name: format!("Milestone {index}"),
        description: format!("Milestone {index}"),
        target_date: target,
        actual_date: (status == MilestoneStatus::Completed).then_some(target),
        status,
    }
}
