//! Study generation
//!
//! Draw order, which must not change:
//! 1. target enrollment in `[50, 550)`
//! 2. current enrollment in `[0, target)`
//! 3. start date: reference minus `[0, 24)` months
//! 4. expected completion: start plus `[12, 48)` months
//! 5. study type
//! 6. status
//! 7. sites in `[5, 55)`
//! 8. principal investigator surname
//! 9. milestone count in `[3, 8)`, then one draw per milestone

use crate::calendar::shift_months;
use crate::catalog::{INVESTIGATOR_SURNAMES, STUDY_STATUSES, STUDY_TYPES};
use crate::error::GenerationError;
use crate::milestone::generate_milestones;
use crate::sampler::Sampler;
use chrono::NaiveDate;
use pipeline_model::{DevelopmentPhase, Study};

const MIN_TARGET_ENROLLMENT: u32 = 50;
const MAX_TARGET_ENROLLMENT: u32 = 550;
const MAX_START_MONTHS_AGO: u32 = 24;
const MIN_DURATION_MONTHS: u32 = 12;
const MAX_DURATION_MONTHS: u32 = 48;
const MIN_SITES: u32 = 5;
const MAX_SITES: u32 = 55;
const MIN_MILESTONES: u32 = 3;
const MAX_MILESTONES: u32 = 8;

/// Display name of the study at `index` within `program_id`
#[must_use]
pub fn study_name(program_id: &str, index: usize) -> String {
    format!("Study {program_id}-{:03}", index + 1)
}

/// Generate the study at `index` within a program
pub fn generate_study<S: Sampler + ?Sized>(
    program_id: &str,
    index: usize,
    phase: DevelopmentPhase,
    sampler: &mut S,
    reference: NaiveDate,
) -> Result<Study, GenerationError> {
    let target_enrollment = sampler.between(MIN_TARGET_ENROLLMENT, MAX_TARGET_ENROLLMENT);
    let current_enrollment = sampler.below(target_enrollment);

    let start_date = shift_months(reference, -months(sampler.below(MAX_START_MONTHS_AGO)))?;
    let duration = sampler.between(MIN_DURATION_MONTHS, MAX_DURATION_MONTHS);
    let expected_completion_date = shift_months(start_date, months(duration))?;

    let study_type = *sampler.pick(&STUDY_TYPES);
    let status = *sampler.pick(&STUDY_STATUSES);
    let sites = sampler.between(MIN_SITES, MAX_SITES);
    let principal_investigator = format!("Dr. {}", sampler.pick(&INVESTIGATOR_SURNAMES));

    let name = study_name(program_id, index);
    let milestone_count = sampler.between(MIN_MILESTONES, MAX_MILESTONES);
    let milestones = generate_milestones(milestone_count, sampler, reference, Some(&name))?;

    Ok(Study {
        id: format!("study-{program_id}-{index}"),
        name,
        study_type: study_type.to_string(),
        phase,
        target_enrollment,
        current_enrollment,
        start_date,
        expected_completion_date,
        status,
        sites,
        principal_investigator,
        milestones,
    })
}

/// Bounded draws are small, so the conversion is lossless
#[allow(clippy::cast_possible_wrap)]
pub(crate) fn months(value: u32) -> i32 {
    value as i32
}
