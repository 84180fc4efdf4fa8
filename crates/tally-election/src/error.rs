//! # Vote Errors
//!
//! Reasons a ballot is refused. The `Display` text of each variant is the
//! exact message handed to a caller's error callback.

use thiserror::Error;

use tally_core::{CandidateId, VoterId};

/// Why a vote was not recorded.
///
/// Checks run in declaration order: registration, then prior vote, then
/// candidate existence. The first failing check wins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VoteError {
    /// The voter id is not on the registration roll.
    #[error("Voter not registered")]
    NotRegistered {
        /// The rejected voter.
        voter_id: VoterId,
    },

    /// The voter has already cast a ballot in this session.
    #[error("Already voted")]
    AlreadyVoted {
        /// The rejected voter.
        voter_id: VoterId,
    },

    /// No candidate with this id stands in the election.
    #[error("Candidate not found")]
    CandidateNotFound {
        /// The unknown candidate id.
        candidate_id: CandidateId,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_callback_contract() {
        let voter_id = VoterId::new("V1");
        assert_eq!(
            VoteError::NotRegistered { voter_id: voter_id.clone() }.to_string(),
            "Voter not registered"
        );
        assert_eq!(VoteError::AlreadyVoted { voter_id }.to_string(), "Already voted");
        assert_eq!(
            VoteError::CandidateNotFound { candidate_id: CandidateId::new("C9") }.to_string(),
            "Candidate not found"
        );
    }
}
