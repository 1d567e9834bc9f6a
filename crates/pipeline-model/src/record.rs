//! Program, study and milestone records
//!
//! Records serialize with camelCase field names and `YYYY-MM-DD` dates.

use crate::category::{DevelopmentPhase, MilestoneStatus, StudyStatus, TherapeuticArea};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A dated checkpoint attached to a program or a study
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// `milestone-{index}`, unique only within its parent
    pub id: String,
    pub name: String,
    pub description: String,
    pub target_date: NaiveDate,
    /// Present iff `status` is [`MilestoneStatus::Completed`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_date: Option<NaiveDate>,
    pub status: MilestoneStatus,
}

impl Milestone {
    /// Check if the milestone has been reached
    #[inline]
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == MilestoneStatus::Completed
    }
}

/// A clinical study belonging to a program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Study {
    /// `study-{programId}-{index}`
    pub id: String,
    pub name: String,
    pub study_type: String,
    pub phase: DevelopmentPhase,
    pub target_enrollment: u32,
    pub current_enrollment: u32,
    pub start_date: NaiveDate,
    pub expected_completion_date: NaiveDate,
    pub status: StudyStatus,
    pub sites: u32,
    pub principal_investigator: String,
    pub milestones: Vec<Milestone>,
}

impl Study {
    /// Enrollment progress as a whole percentage, rounded half up
    ///
    /// Returns 0 for a study with no enrollment target.
    #[must_use]
    pub fn enrollment_percent(&self) -> u32 {
        percent(
            u64::from(self.current_enrollment),
            u64::from(self.target_enrollment),
        )
    }
}

/// Aggregates derived from a program's studies and overall milestones
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetrics {
    pub total_enrollment: u32,
    pub completed_studies: u32,
    pub active_studies: u32,
    pub completed_milestones: u32,
    pub total_milestones: u32,
}

impl KeyMetrics {
    /// Compute metrics from already-built studies and milestones
    #[must_use]
    pub fn compute(studies: &[Study], overall_milestones: &[Milestone]) -> Self {
        Self {
            total_enrollment: studies.iter().map(|s| s.current_enrollment).sum(),
            completed_studies: count(studies.iter().filter(|s| s.status == StudyStatus::Completed)),
            active_studies: count(studies.iter().filter(|s| s.status.is_active())),
            completed_milestones: count(overall_milestones.iter().filter(|m| m.is_completed())),
            total_milestones: count(overall_milestones.iter()),
        }
    }
}

/// A drug-development program
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Program {
    /// `PRG###`, 1-based
    pub id: String,
    pub code: String,
    pub name: String,
    pub description: String,
    pub therapeutic_area: TherapeuticArea,
    pub phase: DevelopmentPhase,
    pub indication: String,
    pub mechanism: String,
    pub project_lead: String,
    pub start_date: NaiveDate,
    pub last_updated: NaiveDate,
    pub studies: Vec<Study>,
    pub overall_milestones: Vec<Milestone>,
    /// Derived; never recomputed by consumers
    pub key_metrics: KeyMetrics,
}

impl Program {
    /// Sum of enrollment targets across all studies
    #[must_use]
    pub fn target_enrollment(&self) -> u64 {
        self.studies.iter().map(|s| u64::from(s.target_enrollment)).sum()
    }

    /// Program-wide enrollment progress, 0 when there are no studies
    #[must_use]
    pub fn enrollment_percent(&self) -> u32 {
        if self.studies.is_empty() {
            return 0;
        }
        percent(
            u64::from(self.key_metrics.total_enrollment),
            self.target_enrollment(),
        )
    }

    /// Find a study by id
    #[must_use]
    pub fn study(&self, id: &str) -> Option<&Study> {
        self.studies.iter().find(|s| s.id == id)
    }
}

fn count<I: Iterator>(iter: I) -> u32 {
    u32::try_from(iter.count()).unwrap_or(u32::MAX)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn percent(part: u64, whole: u64) -> u32 {
    if whole == 0 {
        return 0;
    }
    ((part as f64 / whole as f64) * 100.0 + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn milestone(index: usize, status: MilestoneStatus) -> Milestone {
        let target = date(2024, 1, 15);
        Milestone {
            id: format!("milestone-{index}"),
            name: "Database Lock".to_string(),
            description: "Database Lock".to_string(),
            target_date: target,
            actual_date: (status == MilestoneStatus::Completed).then_some(target),
            status,
        }
    }

    fn study(current: u32, target: u32, status: StudyStatus) -> Study {
        Study {
            id: "study-PRG001-0".to_string(),
            name: "Study PRG001-001".to_string(),
            study_type: "Safety Study".to_string(),
            phase: DevelopmentPhase::PhaseI,
            target_enrollment: target,
            current_enrollment: current,
            start_date: date(2023, 6, 1),
            expected_completion_date: date(2025, 6, 1),
            status,
            sites: 12,
            principal_investigator: "Dr. Smith".to_string(),
            milestones: vec![milestone(0, MilestoneStatus::NotStarted)],
        }
    }

    #[test]
    fn key_metrics_aggregate_studies_and_milestones() {
        let studies = vec![
            study(10, 100, StudyStatus::Active),
            study(20, 100, StudyStatus::Recruiting),
            study(30, 100, StudyStatus::Completed),
            study(5, 100, StudyStatus::Planning),
        ];
        let milestones = vec![
            milestone(0, MilestoneStatus::Completed),
            milestone(1, MilestoneStatus::Delayed),
            milestone(2, MilestoneStatus::Completed),
        ];

        let metrics = KeyMetrics::compute(&studies, &milestones);
        assert_eq!(metrics.total_enrollment, 65);
        assert_eq!(metrics.completed_studies, 1);
        assert_eq!(metrics.active_studies, 2);
        assert_eq!(metrics.completed_milestones, 2);
        assert_eq!(metrics.total_milestones, 3);
    }

    #[test]
    fn study_enrollment_percent_rounds_half_up() {
        assert_eq!(study(1, 8, StudyStatus::Active).enrollment_percent(), 13);
        assert_eq!(study(37, 182, StudyStatus::Active).enrollment_percent(), 20);
        assert_eq!(study(0, 0, StudyStatus::Planning).enrollment_percent(), 0);
    }

    #[test]
    fn milestone_json_omits_missing_actual_date() {
        let pending = serde_json::to_value(milestone(0, MilestoneStatus::NotStarted)).unwrap();
        assert!(pending.get("actualDate").is_none());
        assert_eq!(pending["targetDate"], "2024-01-15");
        assert_eq!(pending["status"], "Not Started");

        let done = serde_json::to_value(milestone(1, MilestoneStatus::Completed)).unwrap();
        assert_eq!(done["actualDate"], "2024-01-15");
    }

    #[test]
    fn study_json_is_camel_case() {
        let value = serde_json::to_value(study(3, 50, StudyStatus::Suspended)).unwrap();
        assert_eq!(value["currentEnrollment"], 3);
        assert_eq!(value["expectedCompletionDate"], "2025-06-01");
        assert_eq!(value["principalInvestigator"], "Dr. Smith");
        assert_eq!(value["phase"], "Phase I");
    }
}
