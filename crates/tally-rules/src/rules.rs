//! # Validation Rule Configuration

use serde::{Deserialize, Serialize};

use tally_core::MINIMUM_VOTING_AGE;

/// Rule set for a voter validator.
///
/// Every field is optional in configuration files; omitted fields take
/// their defaults.
///
/// ```yaml
/// minAge: 21
/// requiredFields: [id, age]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationRules {
    /// Minimum age a voter must meet or exceed. Any number is accepted and
    /// compared as-is: `20.5` admits 21 but not 20, and a negative minimum
    /// admits every numeric age.
    pub min_age: f64,
    /// Field names that must be present on the voter record. Presence is all
    /// that is checked; a `null` value still counts.
    pub required_fields: Vec<String>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_age: f64::from(MINIMUM_VOTING_AGE),
            required_fields: Vec::new(),
        }
    }
}

impl ValidationRules {
    /// Override the minimum age.
    pub fn with_min_age(mut self, min_age: impl Into<f64>) -> Self {
        self.min_age = min_age.into();
        self
    }

    /// Append a required field.
    pub fn require(mut self, field: impl Into<String>) -> Self {
        self.required_fields.push(field.into());
        self
    }
}
