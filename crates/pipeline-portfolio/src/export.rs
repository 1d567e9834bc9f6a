//! JSON export

use crate::error::PortfolioError;
use pipeline_model::Program;

/// Serialize programs as compact JSON with camelCase fields
pub fn to_json(programs: &[Program]) -> Result<String, PortfolioError> {
    Ok(serde_json::to_string(programs)?)
}

/// Serialize programs as indented JSON with camelCase fields
pub fn to_json_pretty(programs: &[Program]) -> Result<String, PortfolioError> {
    Ok(serde_json::to_string_pretty(programs)?)
}

/// Parse programs previously exported with [`to_json`] or [`to_json_pretty`]
pub fn from_json(json: &str) -> Result<Vec<Program>, PortfolioError> {
    Ok(serde_json::from_str(json)?)
}
