//! Fraud pre-screen scenario.
//!
//! A deny-listed number is referred as a fraud risk even when its income
//! would otherwise be accepted outright. A clean number runs the normal
//! pipeline.

use cardwise_contracts::{
    application::CreditCardApplication,
    decision::CreditCardApplicationDecision::{AutoDeclined, ReferredToHumanFraudRisk},
    error::CardwiseResult,
};
use cardwise_core::evaluator::CreditCardApplicationEvaluator;

use crate::{
    fraud::DenyListFraudChecker,
    validators::{InMemoryValidator, NumberMatcher},
};

use super::ScenarioOutcome;

const KNOWN_BAD_NUMBERS: &[&str] = &["ff-666", "ff-13013"];

pub fn run_scenario() -> CardwiseResult<ScenarioOutcome> {
    let evaluator = CreditCardApplicationEvaluator::with_fraud_checker(
        Box::new(InMemoryValidator::new(NumberMatcher::StartsWith("ff-".to_string()))),
        Box::new(DenyListFraudChecker::new(KNOWN_BAD_NUMBERS.iter().copied())),
    );

    let applications = [
        CreditCardApplication::new(250_000, 45).with_frequent_flyer_number("ff-666"),
        CreditCardApplication::new(19_999, 42).with_frequent_flyer_number("ff-100"),
    ];

    let decisions = applications
        .iter()
        .map(|application| evaluator.evaluate(application))
        .collect::<CardwiseResult<Vec<_>>>()?;

    Ok(ScenarioOutcome {
        name: "fraud-screen".to_string(),
        description: "Deny-listed numbers are referred as fraud risks before any other rule"
            .to_string(),
        decisions,
        expected: vec![ReferredToHumanFraudRisk, AutoDeclined],
        lookup_count: evaluator.lookup_count(),
    })
}
