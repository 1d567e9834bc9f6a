//! Golden regression for seed 12345
//!
//! Any change to draw order, catalog order or calendar arithmetic shows up here.

use chrono::NaiveDate;
use pipeline_mockgen::{Generator, GeneratorConfig};
use pipeline_model::{DevelopmentPhase, MilestoneStatus, Program, StudyStatus, TherapeuticArea};
use pretty_assertions::assert_eq;

const FIRST_PROGRAM_FIXTURE: &str =
    include_str!("fixtures/seed_12345_2025-01-15_first_program.json");

fn reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn config(count: usize) -> GeneratorConfig {
    GeneratorConfig::new()
        .with_seed(12345)
        .with_count(count)
        .with_reference_date(reference())
}

#[test]
fn first_program_matches_fixture() {
    let programs = Generator::new(config(1)).generate().unwrap();
    assert_eq!(programs.len(), 1);

    let actual = serde_json::to_value(&programs[0]).unwrap();
    let expected: serde_json::Value = serde_json::from_str(FIRST_PROGRAM_FIXTURE).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn first_program_scalar_fields() {
    let programs = Generator::new(config(1)).generate().unwrap();
    let p = &programs[0];

    assert_eq!(p.id, "PRG001");
    assert_eq!(p.code, "PRG001");
    assert_eq!(p.name, "INF-0001");
    // 0.4131... * 6 -> index 2
    assert_eq!(p.therapeutic_area, TherapeuticArea::InfectiousDiseases);
    assert_eq!(p.phase, DevelopmentPhase::Discovery);
    assert_eq!(p.indication, "Hepatitis C");
    assert_eq!(p.mechanism, "Monoclonal Antibody");
    assert_eq!(p.project_lead, "Dr. Michael Martinez");
    assert_eq!(p.start_date.to_string(), "2023-10-15");
    assert_eq!(p.last_updated.to_string(), "2025-01-14");
    assert_eq!(p.studies.len(), 2);
    assert_eq!(p.overall_milestones.len(), 4);

    let first_study = &p.studies[0];
    assert_eq!(first_study.target_enrollment, 182);
    assert_eq!(first_study.current_enrollment, 37);
    assert_eq!(first_study.status, StudyStatus::Recruiting);
    assert_eq!(first_study.sites, 38);
    assert_eq!(first_study.milestones[1].status, MilestoneStatus::Completed);
    assert_eq!(
        first_study.milestones[1].actual_date,
        NaiveDate::from_ymd_opt(2024, 4, 15)
    );

    assert_eq!(p.key_metrics.total_enrollment, 208);
    assert_eq!(p.key_metrics.active_studies, 2);
    assert_eq!(p.key_metrics.completed_milestones, 0);
    assert_eq!(p.key_metrics.total_milestones, 4);
}

/// Draws a program consumes: 11 scalar fields, one per overall milestone,
/// and per study 9 scalar fields plus one per study milestone
fn draws_for(program: &Program) -> u64 {
    let studies: usize = program.studies.iter().map(|s| 9 + s.milestones.len()).sum();
    (11 + program.overall_milestones.len() + studies) as u64
}

#[test]
fn stream_positions_after_each_program() {
    let generator = Generator::new(config(3));
    let mut programs = generator.programs();
    let mut positions = Vec::new();
    let mut expected = Vec::new();
    while let Some(program) = programs.next() {
        let program = program.unwrap();
        positions.push(programs.stream().draws());
        expected.push(expected.last().copied().unwrap_or(0) + draws_for(&program));
    }
    assert_eq!(positions, expected);
    // Cross-checked against an independently instrumented run of the same
    // stream (seed 12345, reference 2025-01-15). PRG001 takes
    // 11 + 4 + (9 + 5) + (9 + 6) = 44 draws.
    assert_eq!(positions, vec![44, 104, 147]);
}

#[test]
fn fifty_program_portfolio_summary() {
    let programs = Generator::new(config(50)).generate().unwrap();
    assert_eq!(programs.len(), 50);

    let summary: Vec<(&str, &str, DevelopmentPhase, usize, usize)> = programs
        .iter()
        .take(5)
        .map(|p| {
            (
                p.id.as_str(),
                p.name.as_str(),
                p.phase,
                p.studies.len(),
                p.overall_milestones.len(),
            )
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            ("PRG001", "INF-0001", DevelopmentPhase::Discovery, 2, 4),
            ("PRG002", "IMM-0002", DevelopmentPhase::PhaseII, 3, 6),
            ("PRG003", "MET-0003", DevelopmentPhase::PhaseI, 2, 5),
            ("PRG004", "RAR-0004", DevelopmentPhase::Preclinical, 2, 4),
            ("PRG005", "IMM-0005", DevelopmentPhase::PhaseI, 1, 6),
        ]
    );

    let last = &programs[49];
    assert_eq!(last.id, "PRG050");
    assert_eq!(last.name, "RES-0050");
    assert_eq!(last.indication, "COPD");
    assert_eq!(last.project_lead, "Dr. Sarah Martinez");

    let studies: usize = programs.iter().map(|p| p.studies.len()).sum();
    let study_milestones: usize = programs
        .iter()
        .flat_map(|p| &p.studies)
        .map(|s| s.milestones.len())
        .sum();
    assert_eq!(studies, 152);
    assert_eq!(study_milestones, 762);
}

#[test]
fn month_end_reference_rolls_over() {
    let config = config(1).with_reference_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap());
    let programs = Generator::new(config).generate().unwrap();
    let p = &programs[0];

    assert_eq!(p.start_date.to_string(), "2022-10-31");
    assert_eq!(p.last_updated.to_string(), "2024-01-30");
    assert_eq!(p.studies[1].start_date.to_string(), "2023-05-31");
    assert_eq!(p.studies[1].expected_completion_date.to_string(), "2024-12-01");

    let targets: Vec<String> = p
        .overall_milestones
        .iter()
        .map(|m| m.target_date.to_string())
        .collect();
    assert_eq!(targets, vec!["2023-01-31", "2023-05-01", "2023-07-31", "2023-10-31"]);
}
