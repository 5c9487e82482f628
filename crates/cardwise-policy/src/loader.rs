//! Loading evaluation thresholds from TOML.

use std::path::Path;

use tracing::debug;

use cardwise_contracts::{
    error::{CardwiseError, CardwiseResult},
    thresholds::EvaluationThresholds,
};

use crate::config::PolicyConfig;

/// Parse `s` as a TOML policy and return its validated thresholds.
///
/// Returns `CardwiseError::ConfigError` if the TOML is malformed, carries
/// unknown keys, or describes inconsistent thresholds.
pub fn from_toml_str(s: &str) -> CardwiseResult<EvaluationThresholds> {
    let config: PolicyConfig = toml::from_str(s).map_err(|e| CardwiseError::ConfigError {
        reason: format!("failed to parse policy TOML: {}", e),
    })?;
    config.validate()?;

    debug!(
        auto_accept_income = config.thresholds.auto_accept_income,
        auto_decline_income = config.thresholds.auto_decline_income,
        minimum_age = config.thresholds.minimum_age,
        detailed_lookup_age = config.thresholds.detailed_lookup_age,
        "evaluation thresholds loaded"
    );

    Ok(config.thresholds)
}

/// Read the file at `path` and parse it as a TOML policy.
pub fn from_file(path: &Path) -> CardwiseResult<EvaluationThresholds> {
    let contents = std::fs::read_to_string(path).map_err(|e| CardwiseError::ConfigError {
        reason: format!("failed to read policy file '{}': {}", path.display(), e),
    })?;
    from_toml_str(&contents)
}
