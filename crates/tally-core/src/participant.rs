//! # Candidates and Voters
//!
//! The two record types an election is built from. Candidates are fixed for
//! the life of a session; voters are presented one at a time for
//! registration.

use serde::{Deserialize, Serialize};

use crate::identity::{CandidateId, VoterId};

/// Minimum age for voter registration, and the default `minAge` of the
/// validator factory.
pub const MINIMUM_VOTING_AGE: u32 = 18;

/// A candidate standing in an election.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Identity key.
    pub id: CandidateId,
    /// Display name.
    pub name: String,
    /// Party affiliation.
    pub party: String,
}

impl Candidate {
    /// Build a candidate record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, party: impl Into<String>) -> Self {
        Self {
            id: CandidateId::new(id),
            name: name.into(),
            party: party.into(),
        }
    }
}

/// A person presenting for voter registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    /// Identity key.
    pub id: VoterId,
    /// Display name.
    pub name: String,
    /// Age in whole years.
    pub age: u32,
}

impl Voter {
    /// Build a voter record.
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: VoterId::new(id),
            name: name.into(),
            age,
        }
    }

    /// Whether the voter meets the registration age.
    pub fn is_of_voting_age(&self) -> bool {
        self.age >= MINIMUM_VOTING_AGE
    }
}
