//! Types shared with the external frequent flyer number validator.
//!
//! The validator itself lives outside this workspace; these are the values
//! that cross its boundary.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lookup strategy hint the evaluator sets on the validator before a lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValidationMode {
    Quick,
    Detailed,
}

impl fmt::Display for ValidationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationMode::Quick => f.write_str("quick"),
            ValidationMode::Detailed => f.write_str("detailed"),
        }
    }
}

/// Licence the validator vendor issued to this deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseInfo {
    pub key: String,
}

/// Metadata the validator exposes about itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceInformation {
    pub license: LicenseInfo,
}

impl ServiceInformation {
    /// Service information carrying only a licence key.
    pub fn with_license_key(key: impl Into<String>) -> Self {
        Self {
            license: LicenseInfo { key: key.into() },
        }
    }
}
