//! Error types for the portfolio layer

use pipeline_model::ParseLabelError;

/// Portfolio error
#[derive(Debug, thiserror::Error)]
pub enum PortfolioError {
    /// No program with this id
    #[error("program not found: {0}")]
    ProgramNotFound(String),

    /// Unknown detail tab name
    #[error("unknown tab: {0:?} (expected overview, studies or milestones)")]
    UnknownTab(String),

    /// Unknown editable field name
    #[error("field {0:?} is not editable (expected description, indication or mechanism)")]
    NotEditable(String),

    /// Unknown role name
    #[error("unknown role: {0:?} (expected view, edit or admin)")]
    UnknownRole(String),

    /// Category label did not parse
    #[error(transparent)]
    Label(#[from] ParseLabelError),

    /// JSON export failed
    #[error("export failed: {0}")]
    Export(#[from] serde_json::Error),
}

impl PortfolioError {
    /// Check if the error came from a lookup miss
    #[inline]
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ProgramNotFound(_))
    }
}
