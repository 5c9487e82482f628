//! Scenarios driven by validator behaviour.

use cardwise_contracts::{
    application::CreditCardApplication,
    decision::CreditCardApplicationDecision::{self, AutoAccepted, AutoDeclined, ReferredToHuman},
    error::CardwiseResult,
};
use cardwise_core::{evaluator::CreditCardApplicationEvaluator, traits::FrequentFlyerNumberValidator};

use crate::validators::{
    InMemoryValidator, LicenseSource, NumberMatcher, ScriptedAnswer, ScriptedValidator,
};

use super::ScenarioOutcome;

/// Stand-in for a key read from a vendor-supplied constants file.
fn vendor_license_key() -> String {
    "EXPIRED".to_string()
}

fn low_income_application() -> CreditCardApplication {
    CreditCardApplication::new(19_999, 42).with_frequent_flyer_number("y")
}

fn evaluate_all(
    name: &str,
    description: &str,
    validator: Box<dyn FrequentFlyerNumberValidator>,
    applications: &[CreditCardApplication],
    expected: Vec<CreditCardApplicationDecision>,
) -> CardwiseResult<ScenarioOutcome> {
    let evaluator = CreditCardApplicationEvaluator::new(validator);
    let decisions = applications
        .iter()
        .map(|application| evaluator.evaluate(application))
        .collect::<CardwiseResult<Vec<_>>>()?;

    Ok(ScenarioOutcome {
        name: name.to_string(),
        description: description.to_string(),
        decisions,
        expected,
        lookup_count: evaluator.lookup_count(),
    })
}

pub fn high_income() -> CardwiseResult<ScenarioOutcome> {
    evaluate_all(
        "high-income",
        "Income at the accept threshold is accepted without a lookup",
        Box::new(InMemoryValidator::new(NumberMatcher::Any)),
        &[CreditCardApplication::new(100_000, 0)],
        vec![AutoAccepted],
    )
}

pub fn young_applicant() -> CardwiseResult<ScenarioOutcome> {
    evaluate_all(
        "young-applicant",
        "A 19-year-old is referred before the validator is consulted",
        Box::new(InMemoryValidator::new(NumberMatcher::Any)),
        &[CreditCardApplication::new(0, 19)],
        vec![ReferredToHuman],
    )
}

/// The same low-income application against each way of matching numbers.
pub fn low_income_matchers() -> CardwiseResult<ScenarioOutcome> {
    let matchers = [
        NumberMatcher::Exactly("y".to_string()),
        NumberMatcher::Any,
        NumberMatcher::StartsWith("y".to_string()),
        NumberMatcher::InRange {
            low: "a".to_string(),
            high: "z".to_string(),
        },
        NumberMatcher::OneOf(vec!["x".to_string(), "y".to_string(), "z".to_string()]),
        NumberMatcher::ContainsLowercase,
    ];

    let mut decisions = Vec::with_capacity(matchers.len());
    let mut lookup_count = 0;
    for matcher in matchers.iter().cloned() {
        let evaluator = CreditCardApplicationEvaluator::new(Box::new(InMemoryValidator::new(matcher)));
        decisions.push(evaluator.evaluate(&low_income_application())?);
        lookup_count += evaluator.lookup_count();
    }

    Ok(ScenarioOutcome {
        name: "low-income-matchers".to_string(),
        description: "A validated low-income applicant is declined under every matcher".to_string(),
        expected: vec![AutoDeclined; matchers.len()],
        decisions,
        lookup_count,
    })
}

pub fn invalid_number() -> CardwiseResult<ScenarioOutcome> {
    evaluate_all(
        "invalid-number",
        "An unrecognised frequent flyer number is referred",
        Box::new(InMemoryValidator::new(NumberMatcher::Exactly("ff-001".to_string()))),
        &[CreditCardApplication::new(99_000, 42).with_frequent_flyer_number("q-123")],
        vec![ReferredToHuman],
    )
}

pub fn expired_licence() -> CardwiseResult<ScenarioOutcome> {
    let validator = InMemoryValidator::new(NumberMatcher::Any)
        .with_license(LicenseSource::Deferred(Box::new(vendor_license_key)));

    evaluate_all(
        "expired-licence",
        "An expired vendor licence refers the application without a lookup",
        Box::new(validator),
        &[CreditCardApplication::new(19_999, 42)],
        vec![ReferredToHuman],
    )
}

pub fn flaky_vendor() -> CardwiseResult<ScenarioOutcome> {
    evaluate_all(
        "flaky-vendor",
        "A vendor alternating invalid/valid yields a referral then a decline",
        Box::new(ScriptedValidator::alternating()),
        &[low_income_application(), low_income_application()],
        vec![ReferredToHuman, AutoDeclined],
    )
}

pub fn vendor_outage() -> CardwiseResult<ScenarioOutcome> {
    evaluate_all(
        "vendor-outage",
        "A failed lookup is referred instead of surfacing an error",
        Box::new(ScriptedValidator::new(vec![ScriptedAnswer::Unavailable])),
        &[low_income_application()],
        vec![ReferredToHuman],
    )
}
