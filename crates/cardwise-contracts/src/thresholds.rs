//! Numeric limits and sentinels used by the evaluator.
//!
//! The rule order is fixed in the evaluator; only the values it compares
//! against live here. Defaults reproduce the production rule set.

use serde::{Deserialize, Serialize};

use crate::error::{CardwiseError, CardwiseResult};

/// Cut-off values for each step of the decision pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EvaluationThresholds {
    /// Income at or above which an application is accepted outright.
    pub auto_accept_income: u64,

    /// Validated applications earning less than this are declined; the
    /// rest are referred.
    pub auto_decline_income: u64,

    /// Applicants younger than this are referred before any lookup.
    pub minimum_age: u32,

    /// Applicants at or above this age get a `Detailed` lookup.
    pub detailed_lookup_age: u32,

    /// Licence key value meaning the validator licence has lapsed.
    pub expired_license_key: String,
}

impl Default for EvaluationThresholds {
    fn default() -> Self {
        Self {
            auto_accept_income: 100_000,
            auto_decline_income: 20_000,
            minimum_age: 20,
            detailed_lookup_age: 30,
            expired_license_key: "EXPIRED".to_string(),
        }
    }
}

impl EvaluationThresholds {
    /// Reject combinations the evaluator cannot apply coherently.
    pub fn validate(&self) -> CardwiseResult<()> {
        if self.auto_decline_income > self.auto_accept_income {
            return Err(CardwiseError::ConfigError {
                reason: format!(
                    "auto_decline_income ({}) must not exceed auto_accept_income ({})",
                    self.auto_decline_income, self.auto_accept_income
                ),
            });
        }

        if self.detailed_lookup_age < self.minimum_age {
            return Err(CardwiseError::ConfigError {
                reason: format!(
                    "detailed_lookup_age ({}) must not be below minimum_age ({})",
                    self.detailed_lookup_age, self.minimum_age
                ),
            });
        }

        if self.expired_license_key.trim().is_empty() {
            return Err(CardwiseError::ConfigError {
                reason: "expired_license_key must not be empty".to_string(),
            });
        }

        Ok(())
    }
}
