//! Generator settings from a TOML file and command-line overrides
//!
//! ```toml
//! seed = 12345
//! count = 50
//! reference_date = "2025-01-15"
//! ```
//!
//! Every key is optional. Flags given on the command line win over the file.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::ArgMatches;
use pipeline_mockgen::GeneratorConfig;
use std::path::Path;

/// Read a generator config from a TOML file
pub(crate) fn load(path: &Path) -> Result<GeneratorConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: GeneratorConfig = toml::from_str(&text)
        .with_context(|| format!("failed to parse config {}", path.display()))?;
    tracing::debug!(path = %path.display(), ?config, "Loaded generator config");
    Ok(config)
}

/// Resolve the generator config: defaults, then `--config`, then flags
pub(crate) fn resolve(matches: &ArgMatches) -> Result<GeneratorConfig> {
    let mut config = match matches.get_one::<std::path::PathBuf>("config") {
        Some(path) => load(path)?,
        None => GeneratorConfig::default(),
    };

    if let Some(&seed) = matches.get_one::<u32>("seed") {
        config = config.with_seed(seed);
    }
    if let Some(&count) = matches.get_one::<usize>("count") {
        config = config.with_count(count);
    }
    if let Some(&date) = matches.get_one::<NaiveDate>("reference-date") {
        config = config.with_reference_date(date);
    }
    Ok(config)
}
