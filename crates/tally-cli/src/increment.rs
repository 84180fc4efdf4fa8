//! # Increment Subcommand
//!
//! Loads a tally file, adds one vote for a candidate, and prints the new
//! tally. The file is read loosely: a non-mapping document starts from an
//! empty tally, and entries that are not non-negative whole numbers are
//! dropped. The file on disk is left as it was.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde_json::Value;

use tally_core::{tally_pure, CandidateId, Tally};

/// Arguments for the `tally increment` subcommand.
#[derive(Args, Debug)]
pub struct IncrementArgs {
    /// Tally file (YAML or JSON mapping of candidate id to count).
    pub tally: PathBuf,

    /// Candidate receiving the vote.
    pub candidate: String,
}

/// Execute the increment subcommand.
pub fn run_increment(args: &IncrementArgs) -> Result<u8> {
    let document: Value = crate::load_document(&args.tally)?;
    let next = increment_document(&document, &CandidateId::new(args.candidate.as_str()));
    tracing::info!(candidate = %args.candidate, total = next.total(), "tally incremented");
    println!("{}", serde_json::to_string_pretty(&next)?);
    Ok(0)
}

/// Add one vote for `candidate_id` to a loosely-typed tally document.
pub fn increment_document(document: &Value, candidate_id: &CandidateId) -> Tally {
    let current = Tally::from_value(document);
    tally_pure(Some(&current), candidate_id)
}
