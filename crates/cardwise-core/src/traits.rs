//! Collaborator traits consumed by the evaluator.
//!
//! - `FrequentFlyerNumberValidator`: external vendor service (unreliable)
//! - `FraudChecker`: optional pre-screen with a yes/no verdict
//!
//! Both are implemented outside the evaluator. The evaluator only decides
//! when to call them and how to interpret what they return.

use std::sync::Arc;

use cardwise_contracts::{
    application::CreditCardApplication,
    error::CardwiseResult,
    validation::{ServiceInformation, ValidationMode},
};

/// Callback a validator fires each time it actually performs a lookup.
pub type LookupHook = Arc<dyn Fn() + Send + Sync>;

/// The external frequent flyer number validation service.
///
/// Methods take `&self`: a validator is shared behind the evaluator and
/// manages its own interior state (current mode, registered hooks).
pub trait FrequentFlyerNumberValidator: Send + Sync {
    /// Set the lookup strategy for subsequent calls to `is_valid()`.
    fn set_mode(&self, mode: ValidationMode);

    /// Read the validator's service metadata, including its licence.
    ///
    /// An `Err` here is a configuration fault; the evaluator propagates it.
    fn service_information(&self) -> CardwiseResult<ServiceInformation>;

    /// Flat accessor for `service_information().license.key`.
    fn license_key(&self) -> CardwiseResult<String> {
        Ok(self.service_information()?.license.key)
    }

    /// Check whether `frequent_flyer_number` is valid.
    ///
    /// The number is forwarded exactly as the applicant supplied it, so
    /// implementations see `None` for "not supplied". May fail.
    fn is_valid(&self, frequent_flyer_number: Option<&str>) -> CardwiseResult<bool>;

    /// Register a hook fired once per lookup actually performed.
    ///
    /// A lookup that ends in an error still counts as performed if the
    /// implementation reached the vendor.
    fn subscribe_lookups(&self, hook: LookupHook);
}

/// Pre-screen that flags an application as a likely fraud attempt.
pub trait FraudChecker: Send + Sync {
    fn is_fraud_risk(&self, application: &CreditCardApplication) -> bool;
}
