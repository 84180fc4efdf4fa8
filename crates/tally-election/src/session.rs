//! # Election Session
//!
//! Encapsulated state for a single election.
//!
//! ## State
//!
//! ```text
//! candidates  fixed at creation, copied from the caller
//! tally       replaced (never mutated) on each accepted vote
//! registered  grows monotonically; a voter id enters at most once
//! voted       grows monotonically; subset of registered
//! ```
//!
//! ## Vote Checks
//!
//! `cast_vote` checks, in order: the voter is registered, the voter has not
//! voted, the candidate exists. State changes only after all three pass, and
//! before the success callback runs.
//!
//! Mutating operations take `&mut self`. A host that shares a session
//! between threads serializes access with a mutex around the whole session.

use std::cmp::Ordering;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use tally_core::{tally_pure, Candidate, CandidateId, Tally, Voter, VoterId, MINIMUM_VOTING_AGE};

use crate::error::VoteError;
use crate::ranking::{by_votes_descending, ResultRow};

// ─── Receipt ─────────────────────────────────────────────────────────

/// Passed to the success callback once a vote has been recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoteReceipt {
    /// Voter who cast the ballot.
    pub voter_id: VoterId,
    /// Candidate who received it.
    pub candidate_id: CandidateId,
}

// ─── Session ─────────────────────────────────────────────────────────

/// One election's runtime state.
#[derive(Debug, Clone)]
pub struct ElectionSession {
    candidates: Vec<Candidate>,
    tally: Tally,
    registered: HashSet<VoterId>,
    voted: HashSet<VoterId>,
}

/// Open a session over a copy of `candidates`.
///
/// Duplicate candidate ids are accepted as given.
pub fn create_election(candidates: &[Candidate]) -> ElectionSession {
    ElectionSession::new(candidates.to_vec())
}

impl ElectionSession {
    /// Open a session that takes ownership of its candidate list.
    pub fn new(candidates: Vec<Candidate>) -> Self {
        let tally = Tally::seeded(candidates.iter().map(|c| &c.id));
        tracing::debug!(candidates = candidates.len(), "election session opened");
        Self {
            candidates,
            tally,
            registered: HashSet::new(),
            voted: HashSet::new(),
        }
    }

    // ── Registration ─────────────────────────────────────────────────

    /// Register a voter. Returns `false` without changing state if the voter
    /// is under age or the id is already registered.
    pub fn register_voter(&mut self, voter: &Voter) -> bool {
        if !voter.is_of_voting_age() {
            tracing::debug!(voter_id = %voter.id, age = voter.age, "registration refused: under age");
            return false;
        }
        self.admit(voter.id.clone())
    }

    /// Register a voter from a loosely-typed record.
    ///
    /// The record must be an object whose `id` is a string and whose `age` is
    /// a number of at least 18. Anything else returns `false` without
    /// changing state.
    pub fn register_voter_value(&mut self, voter: &Value) -> bool {
        let Value::Object(fields) = voter else {
            tracing::debug!("registration refused: not a record");
            return false;
        };
        let Some(id) = fields.get("id").and_then(Value::as_str) else {
            tracing::debug!("registration refused: id is not a string");
            return false;
        };
        let Some(age) = fields.get("age").and_then(Value::as_f64) else {
            tracing::debug!(voter_id = id, "registration refused: age is not a number");
            return false;
        };
        if age < f64::from(MINIMUM_VOTING_AGE) {
            tracing::debug!(voter_id = id, age, "registration refused: under age");
            return false;
        }
        self.admit(VoterId::new(id))
    }

    fn admit(&mut self, voter_id: VoterId) -> bool {
        if self.registered.contains(&voter_id) {
            tracing::debug!(voter_id = %voter_id, "registration refused: already registered");
            return false;
        }
        tracing::debug!(voter_id = %voter_id, "voter registered");
        self.registered.insert(voter_id)
    }

    // ── Voting ───────────────────────────────────────────────────────

    /// Record a vote, reporting the outcome as a `Result`.
    pub fn try_cast_vote(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
    ) -> Result<VoteReceipt, VoteError> {
        if !self.registered.contains(voter_id) {
            return Err(VoteError::NotRegistered {
                voter_id: VoterId::new(voter_id),
            });
        }
        if self.voted.contains(voter_id) {
            return Err(VoteError::AlreadyVoted {
                voter_id: VoterId::new(voter_id),
            });
        }
        let Some(candidate) = self.candidates.iter().find(|c| c.id.as_str() == candidate_id) else {
            return Err(VoteError::CandidateNotFound {
                candidate_id: CandidateId::new(candidate_id),
            });
        };

        let receipt = VoteReceipt {
            voter_id: VoterId::new(voter_id),
            candidate_id: candidate.id.clone(),
        };
        self.tally = tally_pure(Some(&self.tally), &receipt.candidate_id);
        self.voted.insert(receipt.voter_id.clone());
        tracing::debug!(
            voter_id = %receipt.voter_id,
            candidate_id = %receipt.candidate_id,
            "vote recorded"
        );
        Ok(receipt)
    }

    /// Record a vote and report the outcome through callbacks.
    ///
    /// Exactly one of the callbacks is invoked, and its return value is
    /// returned. When the callback for the outcome was not supplied, nothing
    /// is invoked and `None` is returned. State is already updated when
    /// `on_success` runs.
    pub fn cast_vote<R, S, E>(
        &mut self,
        voter_id: &str,
        candidate_id: &str,
        on_success: Option<S>,
        on_error: Option<E>,
    ) -> Option<R>
    where
        S: FnOnce(VoteReceipt) -> R,
        E: FnOnce(VoteError) -> R,
    {
        match self.try_cast_vote(voter_id, candidate_id) {
            Ok(receipt) => on_success.map(|f| f(receipt)),
            Err(err) => {
                tracing::debug!(voter_id, candidate_id, reason = %err, "vote refused");
                on_error.map(|f| f(err))
            }
        }
    }

    // ── Results ──────────────────────────────────────────────────────

    /// Standings, most votes first. Ties keep ballot order.
    pub fn results(&self) -> Vec<ResultRow> {
        self.results_by(by_votes_descending)
    }

    /// Standings sorted with a caller-supplied three-way comparator.
    ///
    /// Rows are built fresh from the candidate list and the tally, so the
    /// sort never touches session state.
    pub fn results_by<F>(&self, compare: F) -> Vec<ResultRow>
    where
        F: FnMut(&ResultRow, &ResultRow) -> Ordering,
    {
        let mut rows: Vec<ResultRow> = self
            .candidates
            .iter()
            .map(|c| ResultRow::from_tally(c, &self.tally))
            .collect();
        rows.sort_by(compare);
        rows
    }

    /// The leading candidate under the default ranking.
    ///
    /// `None` when there are no candidates or no votes have been cast. On a
    /// tie the candidate listed first at creation wins.
    pub fn winner(&self) -> Option<ResultRow> {
        self.results().into_iter().next().filter(|row| row.votes > 0)
    }

    // ── Accessors ────────────────────────────────────────────────────

    /// Candidates in ballot order.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Current tally.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Whether the voter id is registered.
    pub fn is_registered(&self, voter_id: &str) -> bool {
        self.registered.contains(voter_id)
    }

    /// Whether the voter id has cast a ballot.
    pub fn has_voted(&self, voter_id: &str) -> bool {
        self.voted.contains(voter_id)
    }

    /// Number of registered voters.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Number of voters who have voted.
    pub fn voted_count(&self) -> usize {
        self.voted.len()
    }

    /// Total votes in the tally.
    pub fn total_votes(&self) -> u64 {
        self.tally.total()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────
