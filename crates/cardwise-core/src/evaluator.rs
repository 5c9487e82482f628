//! The credit card application evaluator.
//!
//! Every call to `evaluate()` runs the same fixed pipeline, and the first
//! step that reaches a verdict wins:
//!
//!   Fraud → High income → Age → [set mode] → Licence → Lookup → Income band
//!
//! The validator is only touched from the mode step onwards. Applications
//! resolved by the fraud, income or age gates never reach it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{debug, info, warn};

use cardwise_contracts::{
    application::CreditCardApplication,
    decision::CreditCardApplicationDecision,
    error::CardwiseResult,
    thresholds::EvaluationThresholds,
    validation::ValidationMode,
};

use crate::traits::{FraudChecker, FrequentFlyerNumberValidator};

/// Classifies credit card applications.
///
/// Owns its validator (and optional fraud checker) for its whole lifetime.
/// `lookup_count` is the only state carried between calls; it is bumped by
/// the validator's lookup hook, not by the evaluator itself.
///
/// The validator's mode is written on every call that reaches the mode step.
/// Sharing one evaluator between threads keeps the counter exact, but lets
/// concurrent calls overwrite each other's mode before their lookups run.
pub struct CreditCardApplicationEvaluator {
    validator: Box<dyn FrequentFlyerNumberValidator>,
    fraud_checker: Option<Box<dyn FraudChecker>>,
    thresholds: EvaluationThresholds,
    lookup_count: Arc<AtomicU64>,
}

impl CreditCardApplicationEvaluator {
    /// Create an evaluator without a fraud pre-screen.
    ///
    /// Subscribes to the validator's lookup notifications.
    pub fn new(validator: Box<dyn FrequentFlyerNumberValidator>) -> Self {
        let lookup_count = Arc::new(AtomicU64::new(0));

        let counter = Arc::clone(&lookup_count);
        validator.subscribe_lookups(Arc::new(move || {
            counter.fetch_add(1, Ordering::Relaxed);
        }));

        Self {
            validator,
            fraud_checker: None,
            thresholds: EvaluationThresholds::default(),
            lookup_count,
        }
    }

    /// Create an evaluator that runs `fraud_checker` before anything else.
    pub fn with_fraud_checker(
        validator: Box<dyn FrequentFlyerNumberValidator>,
        fraud_checker: Box<dyn FraudChecker>,
    ) -> Self {
        Self {
            fraud_checker: Some(fraud_checker),
            ..Self::new(validator)
        }
    }

    /// Replace the default thresholds.
    ///
    /// Returns `ConfigError` for thresholds that fail
    /// `EvaluationThresholds::validate`, leaving nothing half-configured.
    pub fn with_thresholds(mut self, thresholds: EvaluationThresholds) -> CardwiseResult<Self> {
        thresholds.validate()?;
        self.thresholds = thresholds;
        Ok(self)
    }

    pub fn thresholds(&self) -> &EvaluationThresholds {
        &self.thresholds
    }

    /// Number of lookups the validator has reported since construction.
    pub fn lookup_count(&self) -> u64 {
        self.lookup_count.load(Ordering::Relaxed)
    }

    /// Decide one application.
    ///
    /// # Pipeline
    ///
    /// 1. Fraud checker (if configured) flags the application → `ReferredToHumanFraudRisk`
    /// 2. Income ≥ `auto_accept_income` → `AutoAccepted`
    /// 3. Age < `minimum_age` → `ReferredToHuman`
    /// 4. Set validator mode (`Detailed` from `detailed_lookup_age`, else `Quick`),
    ///    then read the licence key; the expired sentinel → `ReferredToHuman`
    /// 5. Look up the frequent flyer number; invalid or failed → `ReferredToHuman`
    /// 6. Income < `auto_decline_income` → `AutoDeclined`, otherwise `ReferredToHuman`
    ///
    /// # Errors
    ///
    /// Only a failure to read the validator's service information is returned
    /// as `Err`. A failed lookup is a referral, never an error.
    pub fn evaluate(
        &self,
        application: &CreditCardApplication,
    ) -> CardwiseResult<CreditCardApplicationDecision> {
        let decision = self.decide(application)?;

        info!(
            income = application.gross_annual_income,
            age = application.age,
            decision = %decision,
            lookup_count = self.lookup_count(),
            "application evaluated"
        );

        Ok(decision)
    }

    fn decide(
        &self,
        application: &CreditCardApplication,
    ) -> CardwiseResult<CreditCardApplicationDecision> {
        let t = &self.thresholds;

        debug!(
            income = application.gross_annual_income,
            age = application.age,
            has_frequent_flyer_number = application.frequent_flyer_number.is_some(),
            fraud_screen = self.fraud_checker.is_some(),
            "evaluating application"
        );

        // ── Step 1: Fraud gate ───────────────────────────────────────────────
        if let Some(fraud_checker) = &self.fraud_checker {
            if fraud_checker.is_fraud_risk(application) {
                warn!(age = application.age, "application flagged as fraud risk");
                return Ok(CreditCardApplicationDecision::ReferredToHumanFraudRisk);
            }
        }

        // ── Step 2: High income ──────────────────────────────────────────────
        if application.gross_annual_income >= t.auto_accept_income {
            debug!(threshold = t.auto_accept_income, "high income, accepting");
            return Ok(CreditCardApplicationDecision::AutoAccepted);
        }

        // ── Step 3: Young applicant ──────────────────────────────────────────
        if application.age < t.minimum_age {
            debug!(minimum_age = t.minimum_age, "applicant below minimum age, referring");
            return Ok(CreditCardApplicationDecision::ReferredToHuman);
        }

        // ── Step 4: Mode and licence ─────────────────────────────────────────
        let mode = self.lookup_mode(application.age);
        self.validator.set_mode(mode);

        let license_key = self.validator.license_key()?;
        if license_key == t.expired_license_key {
            warn!(mode = %mode, "validator licence expired, referring without lookup");
            return Ok(CreditCardApplicationDecision::ReferredToHuman);
        }

        // ── Step 5: Frequent flyer lookup ────────────────────────────────────
        match self.validator.is_valid(application.frequent_flyer_number()) {
            Ok(true) => {
                debug!(mode = %mode, "frequent flyer number valid");
            }
            Ok(false) => {
                debug!(mode = %mode, "frequent flyer number invalid, referring");
                return Ok(CreditCardApplicationDecision::ReferredToHuman);
            }
            Err(err) => {
                warn!(mode = %mode, error = %err, "frequent flyer lookup failed, referring");
                return Ok(CreditCardApplicationDecision::ReferredToHuman);
            }
        }

        // ── Step 6: Income band ──────────────────────────────────────────────
        if application.gross_annual_income < t.auto_decline_income {
            Ok(CreditCardApplicationDecision::AutoDeclined)
        } else {
            Ok(CreditCardApplicationDecision::ReferredToHuman)
        }
    }

    fn lookup_mode(&self, age: u32) -> ValidationMode {
        if age >= self.thresholds.detailed_lookup_age {
            ValidationMode::Detailed
        } else {
            ValidationMode::Quick
        }
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────
