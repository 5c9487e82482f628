//! Deny-list fraud checker.

use std::collections::HashSet;

use tracing::debug;

use cardwise_contracts::application::CreditCardApplication;
use cardwise_core::traits::FraudChecker;

/// Flags applications whose frequent flyer number is on a known-bad list.
///
/// Applications without a number are never flagged.
#[derive(Debug, Clone, Default)]
pub struct DenyListFraudChecker {
    numbers: HashSet<String>,
}

impl DenyListFraudChecker {
    pub fn new<I, S>(numbers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            numbers: numbers.into_iter().map(Into::into).collect(),
        }
    }
}

impl FraudChecker for DenyListFraudChecker {
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool {
        let flagged = application
            .frequent_flyer_number()
            .is_some_and(|number| self.numbers.contains(number));
        debug!(flagged, "deny-list fraud check");
        flagged
    }
}
