//! Error types for data generation

use chrono::NaiveDate;

/// Generation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    /// A caller-supplied argument is outside its domain
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A date shift left the representable calendar range
    #[error("date out of range: {base} shifted by {amount} {unit}")]
    DateOutOfRange {
        /// Date being shifted
        base: NaiveDate,
        /// Signed shift
        amount: i64,
        /// `months` or `days`
        unit: &'static str,
    },
}

impl GenerationError {
    /// Create invalid argument error
    #[inline]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Check if the error was caused by caller input rather than calendar limits
    #[inline]
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument(_))
    }
}
