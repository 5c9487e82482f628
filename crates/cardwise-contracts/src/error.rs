//! Error types for the cardwise evaluation pipeline.
//!
//! Fallible collaborator calls and configuration loading return
//! `CardwiseResult<T>`. Only some variants ever reach a caller of
//! `evaluate()`; lookup failures are absorbed into a referral.

use thiserror::Error;

/// The unified error type for the cardwise crates.
#[derive(Debug, Error)]
pub enum CardwiseError {
    /// The validator could not complete a frequent flyer number lookup.
    ///
    /// The evaluator never returns this variant; it converts it into a
    /// `ReferredToHuman` decision.
    #[error("frequent flyer lookup failed: {reason}")]
    LookupFailed { reason: String },

    /// The validator's service information (and therefore its licence key)
    /// could not be read.
    ///
    /// This is a configuration fault and propagates out of `evaluate()`.
    #[error("validator licence unavailable: {reason}")]
    LicenseUnavailable { reason: String },

    /// A thresholds value is missing, malformed or inconsistent.
    #[error("configuration error: {reason}")]
    ConfigError { reason: String },
}

/// Convenience alias used throughout the cardwise crates.
pub type CardwiseResult<T> = Result<T, CardwiseError>;
