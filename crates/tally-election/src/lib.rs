//! # tally-election: Election Session
//!
//! An [`ElectionSession`] owns one election's runtime state: the fixed
//! candidate list, the current tally, the roll of registered voters, and the
//! set of voters who have already cast a ballot.
//!
//! ## Lifecycle
//!
//! ```text
//! create_election(candidates)
//!     │
//!     ├──▶ register_voter(voter)          → bool
//!     ├──▶ cast_vote(voter, candidate)    → on_success / on_error
//!     ├──▶ results() / results_by(cmp)    → Vec<ResultRow>
//!     └──▶ winner()                       → Option<ResultRow>
//! ```
//!
//! ## Invariants
//!
//! - A voter appears in the voted set only if they are registered.
//! - The sum of the tally equals the number of voters who have voted.
//! - Tally keys are the candidate ids given at creation; none are added or
//!   removed afterwards.
//!
//! Every accepted vote replaces the tally with the output of
//! [`tally_core::tally_pure`].

pub mod error;
pub mod ranking;
pub mod session;

pub use error::VoteError;
pub use ranking::{by_name, by_votes_ascending, by_votes_descending, ResultRow};
pub use session::{create_election, ElectionSession, VoteReceipt};
