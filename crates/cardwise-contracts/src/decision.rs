//! The evaluator's output type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The single outcome produced for one evaluated application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CreditCardApplicationDecision {
    /// Approved without review.
    AutoAccepted,

    /// Declined without review.
    AutoDeclined,

    /// Needs a person to look at it.
    ReferredToHuman,

    /// Needs a person to look at it because the fraud check flagged it.
    ReferredToHumanFraudRisk,
}

impl CreditCardApplicationDecision {
    /// True for both referral variants.
    pub fn is_referral(self) -> bool {
        matches!(
            self,
            CreditCardApplicationDecision::ReferredToHuman
                | CreditCardApplicationDecision::ReferredToHumanFraudRisk
        )
    }
}

impl fmt::Display for CreditCardApplicationDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CreditCardApplicationDecision::AutoAccepted => "auto-accepted",
            CreditCardApplicationDecision::AutoDeclined => "auto-declined",
            CreditCardApplicationDecision::ReferredToHuman => "referred-to-human",
            CreditCardApplicationDecision::ReferredToHumanFraudRisk => {
                "referred-to-human (fraud risk)"
            }
        };
        f.write_str(label)
    }
}
