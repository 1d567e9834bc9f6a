//! Program generation
//!
//! Draw order, which must not change:
//! 1. therapeutic area
//! 2. phase
//! 3. indication, over the area's own catalog
//! 4. study count in `[1, 6)`, then each study
//! 5. overall milestone count in `[4, 8)`, then each milestone
//! 6. start date: reference minus `[0, 60)` months
//! 7. last updated: reference minus `[0, 30)` days
//! 8. description target
//! 9. mechanism
//! 10. project lead first name, then surname
//!
//! Key metrics are derived afterwards without drawing.

use crate::calendar::{days_before, shift_months};
use crate::catalog::{
    indications, DESCRIPTION_TARGETS, LEAD_FIRST_NAMES, LEAD_SURNAMES, MECHANISMS, PHASES,
    THERAPEUTIC_AREAS,
};
use crate::error::GenerationError;
use crate::milestone::generate_milestones;
use crate::sampler::Sampler;
use crate::study::{generate_study, months};
use chrono::NaiveDate;
use pipeline_model::{KeyMetrics, Program, Study};

const MIN_STUDIES: u32 = 1;
const MAX_STUDIES: u32 = 6;
const MIN_OVERALL_MILESTONES: u32 = 4;
const MAX_OVERALL_MILESTONES: u32 = 8;
const MAX_START_MONTHS_AGO: u32 = 60;
const MAX_DAYS_SINCE_UPDATE: u32 = 30;

/// `PRG###` identifier of the program at zero-based `index`
#[must_use]
pub fn program_id(index: usize) -> String {
    format!("PRG{:03}", index + 1)
}

/// Generate the program at zero-based `index`
pub fn generate_program<S: Sampler + ?Sized>(
    index: usize,
    sampler: &mut S,
    reference: NaiveDate,
) -> Result<Program, GenerationError> {
    let id = program_id(index);

    let therapeutic_area = *sampler.pick(&THERAPEUTIC_AREAS);
    let phase = *sampler.pick(&PHASES);
    let indication = *sampler.pick(indications(therapeutic_area));

    let study_count = sampler.between(MIN_STUDIES, MAX_STUDIES);
    let studies = (0..study_count as usize)
        .map(|j| generate_study(&id, j, phase, &mut *sampler, reference))
        .collect::<Result<Vec<Study>, _>>()?;

    let milestone_count = sampler.between(MIN_OVERALL_MILESTONES, MAX_OVERALL_MILESTONES);
    let overall_milestones = generate_milestones(milestone_count, &mut *sampler, reference, None)?;

    let start_date = shift_months(reference, -months(sampler.below(MAX_START_MONTHS_AGO)))?;
    let last_updated = days_before(reference, sampler.below(MAX_DAYS_SINCE_UPDATE))?;

    let target = sampler.pick(&DESCRIPTION_TARGETS);
    let mechanism = *sampler.pick(&MECHANISMS);
    let first_name = sampler.pick(&LEAD_FIRST_NAMES);
    let surname = sampler.pick(&LEAD_SURNAMES);

    let key_metrics = KeyMetrics::compute(&studies, &overall_milestones);

    tracing::debug!(
        program = %id,
        area = %therapeutic_area,
        phase = %phase,
        studies = studies.len(),
        milestones = overall_milestones.len(),
        "generated program"
    );

    Ok(Program {
        name: format!("{}-{:04}", therapeutic_area.name_prefix(), index + 1),
        code: id.clone(),
        id,
        description: format!("Novel therapeutic candidate for {indication} targeting {target}"),
        therapeutic_area,
        phase,
        indication: indication.to_string(),
        mechanism: mechanism.to_string(),
        project_lead: format!("{first_name} {surname}"),
        start_date,
        last_updated,
        studies,
        overall_milestones,
        key_metrics,
    })
}
