//! End-to-end evaluation scenarios.
//!
//! Each scenario wires the real evaluator to reference collaborators, runs
//! one or more applications through it, and reports what it decided next to
//! what it should have decided.

use serde::Serialize;

use cardwise_contracts::{decision::CreditCardApplicationDecision, error::CardwiseResult};

pub mod fraud_screen;
pub mod thresholds;
pub mod validation;

/// The result of running one scenario.
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub name: String,
    pub description: String,
    pub decisions: Vec<CreditCardApplicationDecision>,
    pub expected: Vec<CreditCardApplicationDecision>,
    /// The evaluator's lookup counter after the last application.
    pub lookup_count: u64,
}

impl ScenarioOutcome {
    pub fn passed(&self) -> bool {
        self.decisions == self.expected
    }

    /// How many applications ended up with a person, fraud risks included.
    pub fn referrals(&self) -> usize {
        self.decisions.iter().filter(|d| d.is_referral()).count()
    }
}

/// Signature shared by every scenario runner.
pub type ScenarioFn = fn() -> CardwiseResult<ScenarioOutcome>;

/// Every scenario, keyed by the name the demo accepts on its command line.
pub const ALL: &[(&str, ScenarioFn)] = &[
    ("high-income", validation::high_income),
    ("young-applicant", validation::young_applicant),
    ("low-income-matchers", validation::low_income_matchers),
    ("invalid-number", validation::invalid_number),
    ("expired-licence", validation::expired_licence),
    ("flaky-vendor", validation::flaky_vendor),
    ("vendor-outage", validation::vendor_outage),
    ("fraud-screen", fraud_screen::run_scenario),
    ("custom-thresholds", thresholds::run_scenario),
];

/// Run every scenario in order, stopping at the first configuration error.
pub fn run_all() -> CardwiseResult<Vec<ScenarioOutcome>> {
    ALL.iter().map(|(_, run)| run()).collect()
}

/// Run the scenario registered under `name`, if there is one.
pub fn run_named(name: &str) -> Option<CardwiseResult<ScenarioOutcome>> {
    ALL.iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, run)| run())
}
