//! Milestone generation
//!
//! One draw per milestone: the status. The name is chosen by position.

use crate::calendar::shift_months;
use crate::catalog::{MILESTONE_STATUSES, MILESTONE_TYPES};
use crate::error::GenerationError;
use crate::sampler::Sampler;
use chrono::NaiveDate;
use pipeline_model::{Milestone, MilestoneStatus};

/// Months before the reference date that milestone 0 targets
const FIRST_TARGET_OFFSET_MONTHS: i32 = -12;
/// Spacing between consecutive milestone targets
const TARGET_SPACING_MONTHS: i32 = 3;

/// Generate the milestone at `index`
///
/// `study_name` only changes the description; it does not affect the stream.
pub fn generate_milestone<S: Sampler + ?Sized>(
    index: usize,
    sampler: &mut S,
    reference: NaiveDate,
    study_name: Option<&str>,
) -> Result<Milestone, GenerationError> {
    let name = MILESTONE_TYPES[index % MILESTONE_TYPES.len()];
    let status = *sampler.pick(&MILESTONE_STATUSES);

    let offset = i32::try_from(index)
        .ok()
        .and_then(|i| i.checked_mul(TARGET_SPACING_MONTHS))
        .and_then(|m| m.checked_add(FIRST_TARGET_OFFSET_MONTHS))
        .ok_or_else(|| GenerationError::invalid_argument(format!("milestone index {index} too large")))?;
    let target_date = shift_months(reference, offset)?;

    let description = match study_name {
        Some(study) => format!("{name} for {study}"),
        None => name.to_string(),
    };

    Ok(Milestone {
        id: format!("milestone-{index}"),
        name: name.to_string(),
        description,
        target_date,
        actual_date: (status == MilestoneStatus::Completed).then_some(target_date),
        status,
    })
}

/// Generate `count` consecutive milestones starting at index 0
pub fn generate_milestones<S: Sampler + ?Sized>(
    count: u32,
    sampler: &mut S,
    reference: NaiveDate,
    study_name: Option<&str>,
) -> Result<Vec<Milestone>, GenerationError> {
    (0..count as usize)
        .map(|index| generate_milestone(index, &mut *sampler, reference, study_name))
        .collect()
}
