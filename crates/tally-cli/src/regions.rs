//! # Regions Subcommand
//!
//! Sums the votes of a region tree file. The tree is read loosely, so a
//! malformed node or sub-region counts as zero instead of failing the run.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use serde_json::Value;

use tally_core::count_votes_in_value;

/// Arguments for the `tally regions` subcommand.
#[derive(Args, Debug)]
pub struct RegionsArgs {
    /// Region tree file (YAML or JSON).
    pub tree: PathBuf,
}

/// Everything `tally regions` prints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionReport {
    /// Name of the root region, if it has one.
    pub region: Option<String>,
    /// Votes in the root and every nested region.
    pub total_votes: i64,
}

/// Execute the regions subcommand.
pub fn run_regions(args: &RegionsArgs) -> Result<u8> {
    let tree: Value = crate::load_document(&args.tree)?;
    let report = region_report(&tree);
    tracing::info!(total_votes = report.total_votes, "region tree counted");
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(0)
}

/// Summarize a loosely-typed region tree.
pub fn region_report(tree: &Value) -> RegionReport {
    RegionReport {
        region: tree.get("name").and_then(Value::as_str).map(str::to_string),
        total_votes: count_votes_in_value(tree),
    }
}
