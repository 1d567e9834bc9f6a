//! Transient edit overlay for the detail view
//!
//! An edit session works on a copy of one program. Saving hands the copy back
//! to the caller and logs it; nothing is written to the portfolio, and
//! cancelling simply drops the copy.

use crate::error::PortfolioError;
use pipeline_model::Program;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Role of the signed-in user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Read-only access
    #[default]
    View,
    /// May edit programs
    Edit,
    /// Full access
    Admin,
}

impl UserRole {
    /// Whether edit controls are offered; this is display logic, not access control
    #[inline]
    #[must_use]
    pub fn can_edit(self) -> bool {
        matches!(self, Self::Edit | Self::Admin)
    }

    /// Lowercase name
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::View => "view",
            Self::Edit => "edit",
            Self::Admin => "admin",
        }
    }
}

impl Display for UserRole {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "view" => Ok(Self::View),
            "edit" => Ok(Self::Edit),
            "admin" => Ok(Self::Admin),
            _ => Err(PortfolioError::UnknownRole(s.to_string())),
        }
    }
}

/// Signed-in user shown in the header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Display name
    pub name: String,
    /// Controls which actions are offered
    pub role: UserRole,
}

impl CurrentUser {
    /// Create new user
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>, role: UserRole) -> Self {
        Self {
            name: name.into(),
            role,
        }
    }

    /// Whether the detail view offers editing to this user
    #[inline]
    #[must_use]
    pub fn can_edit(&self) -> bool {
        self.role.can_edit()
    }
}

/// A single field change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum ProgramEdit {
    /// Replace the free-text description
    Description(String),
    /// Replace the target indication
    Indication(String),
    /// Replace the mechanism of action
    Mechanism(String),
}

impl ProgramEdit {
    /// Build an edit from a field name and value
    pub fn parse(field: &str, value: impl Into<String>) -> Result<Self, PortfolioError> {
        let value = value.into();
        match field.trim().to_ascii_lowercase().as_str() {
            "description" => Ok(Self::Description(value)),
            "indication" => Ok(Self::Indication(value)),
            "mechanism" => Ok(Self::Mechanism(value)),
            _ => Err(PortfolioError::NotEditable(field.to_string())),
        }
    }

    fn apply_to(self, program: &mut Program) {
        match self {
            Self::Description(v) => program.description = v,
            Self::Indication(v) => program.indication = v,
            Self::Mechanism(v) => program.mechanism = v,
        }
    }
}

/// Edit buffer over a copy of one program
#[derive(Debug, Clone)]
pub struct EditSession {
    original: Program,
    draft: Program,
}

impl EditSession {
    /// Start editing a copy of `program`
    #[must_use]
    pub fn begin(program: &Program) -> Self {
        tracing::debug!(program = %program.id, "Editing started");
        Self {
            original: program.clone(),
            draft: program.clone(),
        }
    }

    /// Apply one field change to the draft
    pub fn apply(&mut self, edit: ProgramEdit) {
        edit.apply_to(&mut self.draft);
    }

    /// Draft as currently edited
    #[inline]
    #[must_use]
    pub fn current(&self) -> &Program {
        &self.draft
    }

    /// Check if the draft differs from the program it was copied from
    #[inline]
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.draft != self.original
    }

    /// Finish editing; the draft is logged and returned but not persisted
    #[must_use]
    pub fn save(self) -> Program {
        tracing::info!(
            program = %self.draft.id,
            dirty = self.is_dirty(),
            "Saving program (not persisted)"
        );
        self.draft
    }

    /// Discard the draft
    pub fn cancel(self) {
        tracing::debug!(program = %self.original.id, "Editing cancelled");
    }
}
