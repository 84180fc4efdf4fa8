//! # tally-core: Foundational Types for the Election Tally Stack
//!
//! This crate is the leaf of the workspace. It defines the identifiers and
//! records every other crate speaks in, plus the two pure computations that
//! need no session state: the tally update and the region vote count.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for identifiers.** `CandidateId` and `VoterId` are
//!    distinct types. A voter id cannot be passed where a candidate id is
//!    expected.
//!
//! 2. **One increment rule.** All tally changes flow through [`tally_pure`].
//!    The election session composes it rather than mutating counts in place.
//!
//! 3. **Total functions over loose input.** Region trees and tallies read from
//!    files arrive as `serde_json::Value`. The dynamic entry points never fail;
//!    malformed parts count as zero or empty.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `tally-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod identity;
pub mod participant;
pub mod region;
pub mod tally;

// Re-export primary types for ergonomic imports.
pub use identity::{CandidateId, VoterId};
pub use participant::{Candidate, Voter, MINIMUM_VOTING_AGE};
pub use region::{count_votes_in_regions, count_votes_in_value, RegionNode};
pub use tally::{tally_pure, Tally};
