//! The credit card application record.

use serde::{Deserialize, Serialize};

/// One applicant, as submitted.
///
/// Every field defaults, so `CreditCardApplication::default()` (no income,
/// age 0, no frequent flyer number) is a valid input to the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditCardApplication {
    /// Gross annual income in whole currency units.
    #[serde(default)]
    pub gross_annual_income: u64,

    /// Applicant age in years.
    #[serde(default)]
    pub age: u32,

    /// Frequent flyer number, if the applicant supplied one.
    ///
    /// Passed to the validator exactly as stored: `None` stays `None` and
    /// `Some("")` stays an empty string.
    #[serde(default)]
    pub frequent_flyer_number: Option<String>,
}

impl CreditCardApplication {
    /// Build an application with the given income and age and no number.
    pub fn new(gross_annual_income: u64, age: u32) -> Self {
        Self {
            gross_annual_income,
            age,
            frequent_flyer_number: None,
        }
    }

    /// Attach a frequent flyer number.
    pub fn with_frequent_flyer_number(mut self, number: impl Into<String>) -> Self {
        self.frequent_flyer_number = Some(number.into());
        self
    }

    /// Borrow the frequent flyer number without substituting a default.
    pub fn frequent_flyer_number(&self) -> Option<&str> {
        self.frequent_flyer_number.as_deref()
    }
}
