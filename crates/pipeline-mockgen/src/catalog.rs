//! Ordered catalogs the generator draws from
//!
//! Catalog order is part of the output contract: a draw maps onto an index,
//! so reordering any list changes every generated record.

use pipeline_model::{DevelopmentPhase, MilestoneStatus, StudyStatus, TherapeuticArea};

/// Areas a generated program can belong to (`Other` is never drawn)
pub const THERAPEUTIC_AREAS: [TherapeuticArea; 6] = [
    TherapeuticArea::Cardiology,
    TherapeuticArea::Immunology,
    TherapeuticArea::InfectiousDiseases,
    TherapeuticArea::RareDiseases,
    TherapeuticArea::MetabolicDisorders,
    TherapeuticArea::Respiratory,
];

/// Phases a generated program can be in (`Post-Marketing` is never drawn)
pub const PHASES: [DevelopmentPhase; 5] = [
    DevelopmentPhase::Discovery,
    DevelopmentPhase::Preclinical,
    DevelopmentPhase::PhaseI,
    DevelopmentPhase::PhaseII,
    DevelopmentPhase::Approved,
];

/// Indications per area; catalog sizes differ, so the draw range does too
#[must_use]
pub const fn indications(area: TherapeuticArea) -> &'static [&'static str] {
    match area {
        TherapeuticArea::Cardiology => &[
            "Heart Failure",
            "Atrial Fibrillation",
            "Hypertension",
            "Coronary Artery Disease",
        ],
        TherapeuticArea::Immunology => &[
            "Rheumatoid Arthritis",
            "Lupus",
            "Psoriasis",
            "Crohn's Disease",
            "Ulcerative Colitis",
        ],
        TherapeuticArea::InfectiousDiseases => &[
            "HIV",
            "Hepatitis C",
            "Tuberculosis",
            "Influenza",
            "COVID-19",
        ],
        TherapeuticArea::RareDiseases => &[
            "Duchenne Muscular Dystrophy",
            "Cystic Fibrosis",
            "Sickle Cell Disease",
            "Hemophilia",
        ],
        TherapeuticArea::MetabolicDisorders => {
            &["Type 2 Diabetes", "Obesity", "NASH", "Hyperlipidemia"]
        }
        TherapeuticArea::Respiratory => &[
            "Asthma",
            "COPD",
            "Pulmonary Fibrosis",
            "Pulmonary Hypertension",
        ],
        TherapeuticArea::Other => &["General Condition"],
    }
}

/// Milestone names, selected by `index mod 8` rather than drawn
pub const MILESTONE_TYPES: [&str; 8] = [
    "Protocol Finalization",
    "First Patient Enrolled",
    "Half Enrollment Complete",
    "Full Enrollment",
    "Database Lock",
    "Interim Analysis",
    "Final Results",
    "Regulatory Submission",
];

/// Milestone status draw order
pub const MILESTONE_STATUSES: [MilestoneStatus; 4] = [
    MilestoneStatus::Completed,
    MilestoneStatus::InProgress,
    MilestoneStatus::NotStarted,
    MilestoneStatus::Delayed,
];

/// Study designs
pub const STUDY_TYPES: [&str; 4] = [
    "Randomized Controlled Trial",
    "Open-Label Extension",
    "Safety Study",
    "Biomarker Study",
];

/// Study status draw order
pub const STUDY_STATUSES: [StudyStatus; 5] = StudyStatus::ALL;

/// Surnames for principal investigators, prefixed with `Dr. `
pub const INVESTIGATOR_SURNAMES: [&str; 5] = ["Smith", "Johnson", "Williams", "Brown", "Jones"];

/// What a program's candidate is described as targeting
pub const DESCRIPTION_TARGETS: [&str; 5] = [
    "protein kinase inhibition",
    "receptor antagonism",
    "enzyme modulation",
    "gene therapy",
    "antibody-drug conjugate",
];

/// Modalities of action
pub const MECHANISMS: [&str; 5] = [
    "Small Molecule",
    "Monoclonal Antibody",
    "Biologic",
    "Gene Therapy",
    "Cell Therapy",
];

/// Project lead first names, titled
pub const LEAD_FIRST_NAMES: [&str; 5] = [
    "Dr. Sarah",
    "Dr. Michael",
    "Dr. Jennifer",
    "Dr. David",
    "Dr. Emily",
];

/// Project lead surnames
pub const LEAD_SURNAMES: [&str; 5] = ["Anderson", "Taylor", "Martinez", "Garcia", "Rodriguez"];
