//! # Validate Subcommand
//!
//! Screens a list of voter records against validation rules. Rules come
//! from an optional rules file; `--min-age` replaces its minimum age and
//! each `--require` appends a required field.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use tally_rules::{create_vote_validator, ValidationOutcome, ValidationRules};

/// Arguments for the `tally validate` subcommand.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// File holding a list of voter records (YAML or JSON).
    pub voters: PathBuf,

    /// Rules file (YAML or JSON) with `minAge` and `requiredFields`.
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Minimum voter age. Overrides the rules file.
    #[arg(long)]
    pub min_age: Option<f64>,

    /// Field that must be present on every record. Repeatable.
    #[arg(long = "require", value_name = "FIELD")]
    pub required_fields: Vec<String>,
}

/// Validation result for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    /// Position in the input list.
    pub index: usize,
    /// The record's validation outcome.
    #[serde(flatten)]
    pub outcome: ValidationOutcome,
}

/// Execute the validate subcommand. Returns exit code 1 if any record is
/// invalid.
pub fn run_validate(args: &ValidateArgs) -> Result<u8> {
    let rules = resolve_rules(args)?;
    let voters: Vec<Value> = crate::load_document(&args.voters)?;
    let outcomes = validate_all(rules, &voters);

    let invalid = outcomes.iter().filter(|o| !o.outcome.is_valid()).count();
    tracing::info!(records = outcomes.len(), invalid, "voter records checked");
    println!("{}", serde_json::to_string_pretty(&outcomes)?);
    Ok(if invalid == 0 { 0 } else { 1 })
}

/// Merge the rules file with command-line overrides.
pub fn resolve_rules(args: &ValidateArgs) -> Result<ValidationRules> {
    let mut rules = match &args.rules {
        Some(path) => crate::load_document(path)?,
        None => ValidationRules::default(),
    };
    if let Some(min_age) = args.min_age {
        rules = rules.with_min_age(min_age);
    }
    for field in &args.required_fields {
        rules = rules.require(field.as_str());
    }
    tracing::debug!(min_age = rules.min_age, required = ?rules.required_fields, "validation rules");
    Ok(rules)
}

/// Validate every record with one validator built from `rules`.
pub fn validate_all(rules: ValidationRules, voters: &[Value]) -> Vec<RecordOutcome> {
    let validate = create_vote_validator(rules);
    voters
        .iter()
        .enumerate()
        .map(|(index, voter)| RecordOutcome {
            index,
            outcome: validate(voter),
        })
        .collect()
}
