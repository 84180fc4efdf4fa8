//! # Run Subcommand
//!
//! Plays a scenario file through an election session and prints a JSON
//! report.
//!
//! ## Scenario format
//!
//! ```yaml
//! candidates:
//!   - { id: C1, name: Alice, party: Blue }
//!   - { id: C2, name: Bob, party: Green }
//! voters:                     # arbitrary records; malformed ones are refused
//!   - { id: V1, name: Ann, age: 25 }
//! votes:
//!   - { voter: V1, candidate: C1 }
//! rules:                      # optional; screens voters before registration
//!   minAge: 21
//!   requiredFields: [id, age]
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use tally_core::Candidate;
use tally_election::{
    by_name, by_votes_ascending, by_votes_descending, create_election, ResultRow, VoteError,
    VoteReceipt,
};
use tally_rules::{ValidationRules, VoteValidator};

/// Arguments for the `tally run` subcommand.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Scenario file (YAML or JSON).
    pub scenario: PathBuf,

    /// Ordering of the printed standings.
    #[arg(long, default_value = "votes-desc")]
    pub order: RankingOrder,
}

/// Orderings available for printed standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RankingOrder {
    /// Most votes first.
    VotesDesc,
    /// Fewest votes first.
    VotesAsc,
    /// Alphabetical by candidate name.
    Name,
}

/// An election scenario loaded from disk.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    /// Ballot, in order.
    pub candidates: Vec<Candidate>,
    /// Voter records presented for registration, in order.
    #[serde(default)]
    pub voters: Vec<Value>,
    /// Ballots cast, in order.
    #[serde(default)]
    pub votes: Vec<BallotEntry>,
    /// Optional screening rules applied before registration.
    #[serde(default)]
    pub rules: Option<ValidationRules>,
}

/// One ballot in a scenario.
#[derive(Debug, Clone, Deserialize)]
pub struct BallotEntry {
    /// Voter id.
    pub voter: String,
    /// Candidate id.
    pub candidate: String,
}

/// A voter record that did not make it onto the roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedVoter {
    /// Position in the scenario's `voters` list.
    pub index: usize,
    /// The record's `id`, when it has a string one.
    pub id: Option<String>,
    /// Why the record was refused.
    pub reason: String,
}

/// A ballot that was not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VoteFailure {
    /// Voter id on the ballot.
    pub voter: String,
    /// Candidate id on the ballot.
    pub candidate: String,
    /// The vote error message.
    pub reason: String,
}

/// Everything `tally run` prints.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioReport {
    /// Standings in the requested order.
    pub results: Vec<ResultRow>,
    /// Leading candidate, if any votes were cast.
    pub winner: Option<ResultRow>,
    /// Ballots counted.
    pub total_votes: u64,
    /// Voters on the roll.
    pub registered: usize,
    /// Voter records refused at screening or registration.
    pub rejected_voters: Vec<RejectedVoter>,
    /// Ballots refused.
    pub vote_errors: Vec<VoteFailure>,
}

/// Execute the run subcommand.
pub fn run_scenario_file(args: &RunArgs) -> Result<u8> {
    let scenario: Scenario = crate::load_document(&args.scenario)?;
    let report = run_scenario(&scenario, args.order);
    tracing::info!(
        total_votes = report.total_votes,
        registered = report.registered,
        rejected = report.rejected_voters.len(),
        refused_ballots = report.vote_errors.len(),
        "scenario complete"
    );
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(0)
}

/// Play a scenario through a fresh session.
pub fn run_scenario(scenario: &Scenario, order: RankingOrder) -> ScenarioReport {
    let mut session = create_election(&scenario.candidates);
    let screen = scenario.rules.clone().map(VoteValidator::new);

    let mut rejected_voters = Vec::new();
    for (index, record) in scenario.voters.iter().enumerate() {
        let id = record.get("id").and_then(Value::as_str).map(str::to_string);
        if let Some(reason) = screen.as_ref().and_then(|v| v.validate(record).reason()) {
            rejected_voters.push(RejectedVoter { index, id, reason });
            continue;
        }
        if !session.register_voter_value(record) {
            rejected_voters.push(RejectedVoter {
                index,
                id,
                reason: "Registration refused".to_string(),
            });
        }
    }

    let vote_errors: Vec<VoteFailure> = scenario
        .votes
        .iter()
        .filter_map(|ballot| {
            session.cast_vote(
                &ballot.voter,
                &ballot.candidate,
                None::<fn(VoteReceipt) -> VoteFailure>,
                Some(|err: VoteError| VoteFailure {
                    voter: ballot.voter.clone(),
                    candidate: ballot.candidate.clone(),
                    reason: err.to_string(),
                }),
            )
        })
        .collect();

    let results = match order {
        RankingOrder::VotesDesc => session.results_by(by_votes_descending),
        RankingOrder::VotesAsc => session.results_by(by_votes_ascending),
        RankingOrder::Name => session.results_by(by_name),
    };

    ScenarioReport {
        results,
        winner: session.winner(),
        total_votes: session.total_votes(),
        registered: session.registered_count(),
        rejected_voters,
        vote_errors,
    }
}
