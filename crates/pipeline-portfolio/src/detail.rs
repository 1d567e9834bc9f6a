//! Program detail view: tabs and milestone timelines

use crate::error::PortfolioError;
use pipeline_model::{KeyMetrics, Milestone, Program, Study};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Tabs of the detail view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DetailTab {
    /// Key metrics and program fields
    #[default]
    Overview,
    /// One card per study
    Studies,
    /// Program timeline followed by one timeline per study
    Milestones,
}

impl DetailTab {
    /// Every tab, in display order
    pub const ALL: [Self; 3] = [Self::Overview, Self::Studies, Self::Milestones];

    /// Lowercase key used on the command line
    #[inline]
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Studies => "studies",
            Self::Milestones => "milestones",
        }
    }
}

impl Display for DetailTab {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DetailTab {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.key().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PortfolioError::UnknownTab(s.to_string()))
    }
}

/// Milestones ordered by target date; ties keep their original order
#[must_use]
pub fn timeline(milestones: &[Milestone]) -> Vec<&Milestone> {
    let mut sorted: Vec<&Milestone> = milestones.iter().collect();
    sorted.sort_by_key(|m| m.target_date);
    sorted
}

/// Detail view of one program
#[derive(Debug, Clone, Copy)]
pub struct ProgramDetail<'a> {
    program: &'a Program,
    tab: DetailTab,
}

impl<'a> ProgramDetail<'a> {
    /// Open the detail view on a tab
    #[inline]
    #[must_use]
    pub fn new(program: &'a Program, tab: DetailTab) -> Self {
        Self { program, tab }
    }

    /// Program shown
    #[inline]
    #[must_use]
    pub fn program(&self) -> &'a Program {
        self.program
    }

    /// Active tab
    #[inline]
    #[must_use]
    pub fn tab(&self) -> DetailTab {
        self.tab
    }

    /// Switch tabs
    #[inline]
    pub fn select(&mut self, tab: DetailTab) {
        self.tab = tab;
    }

    /// Tab headings; the studies tab carries the study count
    #[must_use]
    pub fn tab_labels(&self) -> [(DetailTab, String); 3] {
        [
            (DetailTab::Overview, "Overview".to_string()),
            (
                DetailTab::Studies,
                format!("Studies ({})", self.program.studies.len()),
            ),
            (DetailTab::Milestones, "Milestones".to_string()),
        ]
    }

    /// Stored key metrics
    #[inline]
    #[must_use]
    pub fn key_metrics(&self) -> &'a KeyMetrics {
        &self.program.key_metrics
    }

    /// Program-level milestones in timeline order
    #[must_use]
    pub fn overall_timeline(&self) -> Vec<&'a Milestone> {
        timeline(&self.program.overall_milestones)
    }

    /// Each study paired with its milestones in timeline order
    #[must_use]
    pub fn study_timelines(&self) -> Vec<(&'a Study, Vec<&'a Milestone>)> {
        self.program
            .studies
            .iter()
            .map(|study| (study, timeline(&study.milestones)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pipeline_model::MilestoneStatus;

    fn milestone(id: &str, y: i32, m: u32) -> Milestone {
        Milestone {
            id: id.to_string(),
            name: id.to_string(),
            description: id.to_string(),
            target_date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
            actual_date: None,
            status: MilestoneStatus::NotStarted,
        }
    }

    #[test]
    fn timeline_sorts_by_target_date_stably() {
        let milestones = vec![
            milestone("c", 2025, 3),
            milestone("a", 2024, 1),
            milestone("b", 2025, 3),
        ];
        let ids: Vec<&str> = timeline(&milestones).iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c", "b"]);
    }

    #[test]
    fn tab_parsing() {
        assert_eq!("Studies".parse::<DetailTab>().unwrap(), DetailTab::Studies);
        assert_eq!(DetailTab::default(), DetailTab::Overview);
        assert!(matches!(
            "timeline".parse::<DetailTab>(),
            Err(PortfolioError::UnknownTab(_))
        ));
    }
}
