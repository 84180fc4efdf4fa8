//! # Result Rows and Ranking Orders
//!
//! A [`ResultRow`] is derived from a candidate and the current tally each
//! time results are requested. Nothing here is stored.
//!
//! The comparators below follow the standard three-way contract and are
//! meant for [`crate::ElectionSession::results_by`]. Sorting is stable, so
//! candidates that compare equal keep their ballot order.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use tally_core::{Candidate, CandidateId, Tally};

/// One candidate's standing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRow {
    /// Candidate id.
    pub id: CandidateId,
    /// Candidate name.
    pub name: String,
    /// Candidate party.
    pub party: String,
    /// Votes received so far.
    pub votes: u64,
}

impl ResultRow {
    /// Combine a candidate with its count from `tally` (zero if absent).
    pub fn from_tally(candidate: &Candidate, tally: &Tally) -> Self {
        Self {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
            party: candidate.party.clone(),
            votes: tally.get(candidate.id.as_str()),
        }
    }
}

/// Most votes first. The default ranking.
pub fn by_votes_descending(a: &ResultRow, b: &ResultRow) -> Ordering {
    b.votes.cmp(&a.votes)
}

/// Fewest votes first.
pub fn by_votes_ascending(a: &ResultRow, b: &ResultRow) -> Ordering {
    a.votes.cmp(&b.votes)
}

/// Alphabetical by candidate name.
pub fn by_name(a: &ResultRow, b: &ResultRow) -> Ordering {
    a.name.cmp(&b.name)
}
