//! # Voter Validator
//!
//! [`create_vote_validator`] turns a [`ValidationRules`] into a function
//! from voter record to [`ValidationOutcome`]. The same checks are available
//! on the named [`VoteValidator`] type for callers that want to store or
//! share a validator.
//!
//! Voter records are loosely typed (`serde_json::Value`) because the checks
//! themselves are about shape: whether the input is a record at all, and
//! which fields it carries.

use serde::{Serialize, Serializer};
use serde_json::Value;
use thiserror::Error;

use crate::rules::ValidationRules;

// ─── Outcome ─────────────────────────────────────────────────────────

/// Why a voter record failed validation.
///
/// The `Display` text is the reason string reported to callers.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoterRejection {
    /// The input is not a record.
    #[error("Invalid voter object")]
    InvalidVoterObject,

    /// A required field is absent.
    #[error("Missing field: {0}")]
    MissingField(String),

    /// `age` is missing, not a number, or below the minimum.
    #[error("Age requirement not met")]
    AgeRequirementNotMet,
}

/// Result of validating one voter record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    /// All checks passed.
    Valid,
    /// A check failed.
    Invalid(VoterRejection),
}

impl ValidationOutcome {
    /// Whether all checks passed.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Reason string for an invalid outcome; `None` when valid.
    pub fn reason(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::Invalid(rejection) => Some(rejection.to_string()),
        }
    }
}

/// Serializes as `{"valid": true}` or `{"valid": false, "reason": "..."}`.
impl Serialize for ValidationOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Report {
            valid: bool,
            #[serde(skip_serializing_if = "Option::is_none")]
            reason: Option<String>,
        }

        Report {
            valid: self.is_valid(),
            reason: self.reason(),
        }
        .serialize(serializer)
    }
}

// ─── Validator ───────────────────────────────────────────────────────

/// A voter check bound to a fixed rule set.
#[derive(Debug, Clone)]
pub struct VoteValidator {
    rules: ValidationRules,
}

impl VoteValidator {
    /// Bind a validator to `rules`.
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// The rules this validator enforces.
    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Validate a loosely-typed voter record.
    pub fn validate(&self, voter: &Value) -> ValidationOutcome {
        match self.check(voter) {
            Ok(()) => ValidationOutcome::Valid,
            Err(rejection) => {
                tracing::debug!(reason = %rejection, "voter failed validation");
                ValidationOutcome::Invalid(rejection)
            }
        }
    }

    /// Validate any serializable record by first converting it to JSON.
    ///
    /// A record that does not serialize is reported as an invalid voter
    /// object.
    pub fn validate_record<T: Serialize>(&self, voter: &T) -> ValidationOutcome {
        match serde_json::to_value(voter) {
            Ok(value) => self.validate(&value),
            Err(_) => ValidationOutcome::Invalid(VoterRejection::InvalidVoterObject),
        }
    }

    fn check(&self, voter: &Value) -> Result<(), VoterRejection> {
        let Value::Object(fields) = voter else {
            return Err(VoterRejection::InvalidVoterObject);
        };

        if let Some(missing) = self
            .rules
            .required_fields
            .iter()
            .find(|name| !fields.contains_key(name.as_str()))
        {
            return Err(VoterRejection::MissingField(missing.clone()));
        }

        match fields.get("age").and_then(Value::as_f64) {
            Some(age) if age >= self.rules.min_age => Ok(()),
            _ => Err(VoterRejection::AgeRequirementNotMet),
        }
    }
}

/// Build a validation function from `rules`.
///
/// The returned closure owns its rules; each call to this factory produces
/// an independent validator.
pub fn create_vote_validator(
    rules: ValidationRules,
) -> impl Fn(&Value) -> ValidationOutcome + Clone + Send + Sync {
    let validator = VoteValidator::new(rules);
    move |voter: &Value| validator.validate(voter)
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tally_core::Voter;

    fn strict() -> impl Fn(&Value) -> ValidationOutcome {
        create_vote_validator(ValidationRules::default().with_min_age(21).require("id").require("age"))
    }

    #[test]
    fn test_missing_field_reported_by_name() {
        let outcome = strict()(&json!({"id": "x"}));
        assert_eq!(outcome, ValidationOutcome::Invalid(VoterRejection::MissingField("age".into())));
        assert_eq!(outcome.reason().as_deref(), Some("Missing field: age"));
    }

    #[test]
    fn test_valid_voter_has_no_reason() {
        let outcome = strict()(&json!({"id": "x", "age": 25}));
        assert!(outcome.is_valid());
        assert_eq!(outcome.reason(), None);
    }

    #[test]
    fn test_non_records_rejected() {
        let validate = create_vote_validator(ValidationRules::default());
        for input in [Value::Null, json!(42), json!("voter"), json!(true), json!([1, 2])] {
            assert_eq!(
                validate(&input),
                ValidationOutcome::Invalid(VoterRejection::InvalidVoterObject)
            );
        }
    }

    #[test]
    fn test_first_missing_field_wins() {
        let validate = create_vote_validator(
            ValidationRules::default().require("id").require("name").require("region"),
        );
        let outcome = validate(&json!({"id": "x", "age": 30}));
        assert_eq!(outcome.reason().as_deref(), Some("Missing field: name"));
    }

    #[test]
    fn test_null_value_counts_as_present() {
        let validate = create_vote_validator(ValidationRules::default().require("name"));
        assert!(validate(&json!({"name": null, "age": 40})).is_valid());
    }

    #[test]
    fn test_field_checks_precede_age_check() {
        let outcome = strict()(&json!({"age": 5}));
        assert_eq!(outcome.reason().as_deref(), Some("Missing field: id"));
    }

    #[test]
    fn test_age_rules() {
        let validate = create_vote_validator(ValidationRules::default());
        assert!(validate(&json!({"age": 18})).is_valid());
        assert!(validate(&json!({"age": 18.0})).is_valid());
        for bad in [json!({"age": 17}), json!({"age": 17.9}), json!({"age": "30"}), json!({})] {
            assert_eq!(validate(&bad).reason().as_deref(), Some("Age requirement not met"));
        }
    }

    #[test]
    fn test_fractional_min_age_compared_directly() {
        let validate = create_vote_validator(ValidationRules::default().with_min_age(20.5));
        assert!(!validate(&json!({"age": 20})).is_valid());
        assert!(validate(&json!({"age": 20.5})).is_valid());
        assert!(validate(&json!({"age": 21})).is_valid());

        let anyone = create_vote_validator(ValidationRules::default().with_min_age(-1));
        assert!(anyone(&json!({"age": 0})).is_valid());
        assert!(!anyone(&json!({"age": "0"})).is_valid());
    }

    #[test]
    fn test_validators_are_independent() {
        let mut rules = ValidationRules::default().with_min_age(30);
        let senior = create_vote_validator(rules.clone());
        rules.min_age = 18.0;
        let adult = create_vote_validator(rules);
        let voter = json!({"age": 25});
        assert!(!senior(&voter).is_valid());
        assert!(adult(&voter).is_valid());
    }

    #[test]
    fn test_validate_typed_record() {
        let validator = VoteValidator::new(ValidationRules::default().require("name"));
        assert!(validator.validate_record(&Voter::new("V1", "Ann", 19)).is_valid());
        assert!(!validator.validate_record(&Voter::new("V2", "Bo", 12)).is_valid());
    }

    #[test]
    fn test_outcome_serialization() {
        assert_eq!(serde_json::to_value(ValidationOutcome::Valid).unwrap(), json!({"valid": true}));
        assert_eq!(
            serde_json::to_value(ValidationOutcome::Invalid(VoterRejection::AgeRequirementNotMet))
                .unwrap(),
            json!({"valid": false, "reason": "Age requirement not met"})
        );
    }
}
