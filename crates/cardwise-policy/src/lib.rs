//! # cardwise-policy
//!
//! TOML-driven thresholds for the cardwise evaluator.
//!
//! The order of the decision pipeline is fixed in `cardwise-core`. This crate
//! only lets a deployment move the numbers it compares against.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//!
//! let thresholds = cardwise_policy::from_file(Path::new("policies/default.toml"))?;
//! let evaluator = CreditCardApplicationEvaluator::new(validator).with_thresholds(thresholds)?;
//! ```

pub mod config;
pub mod loader;

pub use config::PolicyConfig;
pub use loader::{from_file, from_toml_str};

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use cardwise_contracts::{error::CardwiseError, thresholds::EvaluationThresholds};

    use crate::from_toml_str;

    fn expect_config_error(toml: &str, needle: &str) {
        match from_toml_str(toml) {
            Err(CardwiseError::ConfigError { reason }) => {
                assert!(reason.contains(needle), "expected '{needle}' in: {reason}");
            }
            other => panic!("expected ConfigError, got {:?}", other),
        }
    }

    #[test]
    fn test_shipped_policy_matches_defaults() {
        let shipped = include_str!("../../../policies/default.toml");
        assert_eq!(from_toml_str(shipped).unwrap(), EvaluationThresholds::default());
    }

    #[test]
    fn test_empty_document_keeps_defaults() {
        let thresholds = from_toml_str("").unwrap();
        assert_eq!(thresholds, EvaluationThresholds::default());
    }

    #[test]
    fn test_partial_table_overrides_only_named_fields() {
        let toml = r#"
            [thresholds]
            auto_accept_income = 120000
            expired_license_key = "LAPSED"
        "#;

        let thresholds = from_toml_str(toml).unwrap();

        assert_eq!(thresholds.auto_accept_income, 120_000);
        assert_eq!(thresholds.expired_license_key, "LAPSED");
        assert_eq!(thresholds.auto_decline_income, 20_000);
        assert_eq!(thresholds.minimum_age, 20);
        assert_eq!(thresholds.detailed_lookup_age, 30);
    }

    #[test]
    fn test_decline_above_accept_is_rejected() {
        let toml = r#"
            [thresholds]
            auto_accept_income = 50000
            auto_decline_income = 60000
        "#;
        expect_config_error(toml, "auto_decline_income");
    }

    #[test]
    fn test_detailed_age_below_minimum_is_rejected() {
        let toml = r#"
            [thresholds]
            minimum_age = 25
            detailed_lookup_age = 21
        "#;
        expect_config_error(toml, "detailed_lookup_age");
    }

    #[test]
    fn test_blank_expired_key_is_rejected() {
        let toml = r#"
            [thresholds]
            expired_license_key = "  "
        "#;
        expect_config_error(toml, "expired_license_key");
    }

    /// A misspelled key must not silently fall back to its default.
    #[test]
    fn test_unknown_threshold_key_is_rejected() {
        let toml = r#"
            [thresholds]
            auto_accept_incme = 50000
        "#;
        expect_config_error(toml, "auto_accept_incme");
    }

    #[test]
    fn test_unknown_table_is_rejected() {
        let toml = r#"
            [rules]
            id = "not-a-thresholds-file"
        "#;
        expect_config_error(toml, "failed to parse policy TOML");
    }

    #[test]
    fn test_toml_parse_error() {
        expect_config_error("this is not valid toml ][[[", "failed to parse policy TOML");
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = crate::from_file(std::path::Path::new("/nonexistent/cardwise.toml"));
        assert!(matches!(result, Err(CardwiseError::ConfigError { .. })));
    }
}
