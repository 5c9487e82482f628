//! Threshold configuration schema.
//!
//! A `PolicyConfig` is deserialized from TOML. Its `[thresholds]` table
//! overrides individual `EvaluationThresholds` fields; anything left out
//! keeps its production default.
//!
//! Example:
//! ```toml
//! [thresholds]
//! auto_accept_income = 120000
//! expired_license_key = "LAPSED"
//! ```

use serde::{Deserialize, Serialize};

use cardwise_contracts::{error::CardwiseResult, thresholds::EvaluationThresholds};

/// The top-level structure deserialized from a TOML policy file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyConfig {
    #[serde(default)]
    pub thresholds: EvaluationThresholds,
}

impl PolicyConfig {
    /// Reject threshold combinations the evaluator cannot apply coherently.
    pub fn validate(&self) -> CardwiseResult<()> {
        self.thresholds.validate()
    }
}
