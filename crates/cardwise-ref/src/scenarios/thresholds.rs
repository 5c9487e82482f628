//! Thresholds loaded from TOML.

use cardwise_contracts::{
    application::CreditCardApplication,
    decision::CreditCardApplicationDecision::{AutoAccepted, AutoDeclined, ReferredToHuman},
    error::CardwiseResult,
};
use cardwise_core::evaluator::CreditCardApplicationEvaluator;

use crate::validators::{InMemoryValidator, NumberMatcher};

use super::ScenarioOutcome;

/// A stricter deployment: lower accept bar, older minimum age, renamed sentinel.
const REGIONAL_POLICY: &str = r#"
[thresholds]
auto_accept_income = 80000
auto_decline_income = 25000
minimum_age = 21
expired_license_key = "LAPSED"
"#;

pub fn run_scenario() -> CardwiseResult<ScenarioOutcome> {
    let thresholds = cardwise_policy::from_toml_str(REGIONAL_POLICY)?;

    // "EXPIRED" is not the sentinel under this policy.
    let validator = InMemoryValidator::new(NumberMatcher::Any).with_license_key("EXPIRED");
    let evaluator =
        CreditCardApplicationEvaluator::new(Box::new(validator)).with_thresholds(thresholds)?;

    let applications = [
        CreditCardApplication::new(90_000, 35),
        CreditCardApplication::new(22_000, 20),
        CreditCardApplication::new(22_000, 35).with_frequent_flyer_number("ff-7"),
    ];

    let decisions = applications
        .iter()
        .map(|application| evaluator.evaluate(application))
        .collect::<CardwiseResult<Vec<_>>>()?;

    Ok(ScenarioOutcome {
        name: "custom-thresholds".to_string(),
        description: "Thresholds loaded from TOML move every income and age gate".to_string(),
        decisions,
        expected: vec![AutoAccepted, ReferredToHuman, AutoDeclined],
        lookup_count: evaluator.lookup_count(),
    })
}
