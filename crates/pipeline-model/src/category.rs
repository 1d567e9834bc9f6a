//! Closed categorical values
//!
//! Each category is a closed enumeration with:
//! - an explicit ordered `ALL` catalog
//! - a human label used for display, search and JSON
//! - case-insensitive parsing from that label

use crate::error::ParseLabelError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Development phase of a program (and of its studies)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DevelopmentPhase {
    /// Target identification and lead discovery
    Discovery,
    /// Animal and laboratory work before first-in-human
    Preclinical,
    /// First-in-human safety
    #[serde(rename = "Phase I")]
    PhaseI,
    /// Efficacy and dose ranging
    #[serde(rename = "Phase II")]
    PhaseII,
    /// Marketing authorization granted
    Approved,
    /// Post-approval surveillance
    #[serde(rename = "Post-Marketing")]
    PostMarketing,
}

impl DevelopmentPhase {
    /// Every phase, in pipeline order
    pub const ALL: [Self; 6] = [
        Self::Discovery,
        Self::Preclinical,
        Self::PhaseI,
        Self::PhaseII,
        Self::Approved,
        Self::PostMarketing,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Discovery => "Discovery",
            Self::Preclinical => "Preclinical",
            Self::PhaseI => "Phase I",
            Self::PhaseII => "Phase II",
            Self::Approved => "Approved",
            Self::PostMarketing => "Post-Marketing",
        }
    }

    /// Check if the phase involves human subjects
    #[inline]
    #[must_use]
    pub fn is_clinical(self) -> bool {
        matches!(self, Self::PhaseI | Self::PhaseII)
    }
}

/// Therapeutic area a program belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TherapeuticArea {
    Cardiology,
    Immunology,
    #[serde(rename = "Infectious Diseases")]
    InfectiousDiseases,
    #[serde(rename = "Rare Diseases")]
    RareDiseases,
    #[serde(rename = "Metabolic Disorders")]
    MetabolicDisorders,
    Respiratory,
    Other,
}

impl TherapeuticArea {
    /// Every area, in catalog order
    pub const ALL: [Self; 7] = [
        Self::Cardiology,
        Self::Immunology,
        Self::InfectiousDiseases,
        Self::RareDiseases,
        Self::MetabolicDisorders,
        Self::Respiratory,
        Self::Other,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cardiology => "Cardiology",
            Self::Immunology => "Immunology",
            Self::InfectiousDiseases => "Infectious Diseases",
            Self::RareDiseases => "Rare Diseases",
            Self::MetabolicDisorders => "Metabolic Disorders",
            Self::Respiratory => "Respiratory",
            Self::Other => "Other",
        }
    }

    /// Three-letter prefix used in program names (`INF`, `CAR`, ...)
    #[must_use]
    pub fn name_prefix(self) -> String {
        self.label().chars().take(3).collect::<String>().to_uppercase()
    }
}

/// Lifecycle status of a clinical study
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StudyStatus {
    Planning,
    Recruiting,
    Active,
    Completed,
    Suspended,
}

impl StudyStatus {
    /// Every status, in catalog order
    pub const ALL: [Self; 5] = [
        Self::Planning,
        Self::Recruiting,
        Self::Active,
        Self::Completed,
        Self::Suspended,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::Recruiting => "Recruiting",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Suspended => "Suspended",
        }
    }

    /// Active or recruiting studies count as active in key metrics
    #[inline]
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Active | Self::Recruiting)
    }
}

/// Status of a milestone
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MilestoneStatus {
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Delayed,
}

impl MilestoneStatus {
    /// Every status, in display order
    pub const ALL: [Self; 4] = [
        Self::NotStarted,
        Self::InProgress,
        Self::Completed,
        Self::Delayed,
    ];

    /// Display label
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::NotStarted => "Not Started",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Delayed => "Delayed",
        }
    }
}

/// Find the variant whose label matches `input`, ignoring ASCII case
fn parse_label<T: Copy>(
    input: &str,
    all: &[T],
    label: fn(T) -> &'static str,
    kind: &'static str,
) -> Result<T, ParseLabelError> {
    let wanted = input.trim();
    all.iter()
        .copied()
        .find(|v| label(*v).eq_ignore_ascii_case(wanted))
        .ok_or_else(|| ParseLabelError::new(kind, input))
}

impl Display for DevelopmentPhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for DevelopmentPhase {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::label, "development phase")
    }
}

impl Display for TherapeuticArea {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for TherapeuticArea {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::label, "therapeutic area")
    }
}

impl Display for StudyStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for StudyStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::label, "study status")
    }
}

impl Display for MilestoneStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for MilestoneStatus {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_label(s, &Self::ALL, Self::label, "milestone status")
    }
}
