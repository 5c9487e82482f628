//! # cardwise-contracts
//!
//! Shared types and error contracts for the cardwise application evaluator.
//!
//! Every crate in the workspace imports from here. No decision logic lives in
//! this crate, only data definitions and error types.

pub mod application;
pub mod decision;
pub mod error;
pub mod thresholds;
pub mod validation;

pub use application::CreditCardApplication;
pub use decision::CreditCardApplicationDecision;
pub use error::{CardwiseError, CardwiseResult};
pub use thresholds::EvaluationThresholds;
pub use validation::{LicenseInfo, ServiceInformation, ValidationMode};
