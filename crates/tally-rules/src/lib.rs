//! # tally-rules: Voter Validation Rules
//!
//! Builds reusable voter checks from declarative configuration.
//!
//! ## Architecture
//!
//! - **Rules** (`rules.rs`): `ValidationRules`, the serde-loadable rule set
//!   (`minAge`, `requiredFields`).
//!
//! - **Validator** (`validator.rs`): `VoteValidator` and the
//!   `create_vote_validator` factory. A validator owns a copy of its rules,
//!   so it is unaffected by anything the caller does with the original.
//!
//! ## Check Order
//!
//! 1. The voter must be a record (JSON object).
//! 2. Each required field must be present, in the order listed.
//! 3. `age` must be a number of at least `minAge`.
//!
//! The first failing check determines the reason.

pub mod rules;
pub mod validator;

pub use rules::ValidationRules;
pub use validator::{create_vote_validator, ValidationOutcome, VoteValidator, VoterRejection};
