//! Error types for the record model

/// A label did not name any variant of a closed category
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind}: {input:?}")]
pub struct ParseLabelError {
    /// Category that was being parsed
    pub kind: &'static str,
    /// Rejected input
    pub input: String,
}

impl ParseLabelError {
    /// Create new parse error
    #[inline]
    #[must_use]
    pub fn new(kind: &'static str, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
        }
    }
}
