//! # cardwise-ref
//!
//! Reference collaborators for the cardwise evaluator.
//!
//! The production frequent flyer validator and fraud service live outside
//! this workspace. This crate provides in-memory stand-ins with the same
//! contracts, plus a set of scenarios that exercise every evaluator path:
//!
//! 1. **Validators**: number matchers, fixed/deferred/unavailable licences,
//!    and a scripted validator for flaky vendor behaviour.
//! 2. **Fraud**: a deny-list fraud checker.
//! 3. **Scenarios**: end-to-end evaluations with their expected decisions.
//!
//! All data is hardcoded and fictional. No external calls are made.

pub mod fraud;
pub mod scenarios;
pub mod validators;

pub use fraud::DenyListFraudChecker;
pub use validators::{InMemoryValidator, LicenseSource, NumberMatcher, ScriptedAnswer, ScriptedValidator};
