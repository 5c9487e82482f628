//! # cardwise-core
//!
//! The credit card application evaluator.
//!
//! This crate provides:
//! - The two collaborator traits (`FrequentFlyerNumberValidator`, `FraudChecker`)
//! - The `CreditCardApplicationEvaluator` that runs the fixed decision pipeline
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cardwise_core::CreditCardApplicationEvaluator;
//!
//! let evaluator = CreditCardApplicationEvaluator::new(Box::new(validator));
//! let decision = evaluator.evaluate(&application)?;
//! ```

pub mod evaluator;
pub mod traits;

pub use evaluator::CreditCardApplicationEvaluator;
pub use traits::{FraudChecker, FrequentFlyerNumberValidator, LookupHook};
