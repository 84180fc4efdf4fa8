//! # Tally: Immutable Vote Counts
//!
//! A `Tally` maps candidate ids to vote counts. It is never incremented in
//! place: [`tally_pure`] borrows the current tally and returns a fresh one,
//! so a caller holding the old value can re-read it afterwards and see
//! exactly what it saw before.
//!
//! The election session keeps one `Tally` and replaces it with the result
//! of `tally_pure` on every accepted vote. That keeps the increment rule in
//! this one function.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::identity::CandidateId;

/// Mapping from candidate id to accumulated vote count.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tally(BTreeMap<CandidateId, u64>);

impl Tally {
    /// An empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// A tally with every given candidate mapped to zero.
    pub fn seeded<'a>(ids: impl IntoIterator<Item = &'a CandidateId>) -> Self {
        Self(ids.into_iter().map(|id| (id.clone(), 0)).collect())
    }

    /// Build a tally from loosely-typed JSON.
    ///
    /// Anything other than an object yields an empty tally. Entries whose
    /// value is not a non-negative whole number are dropped.
    pub fn from_value(value: &Value) -> Self {
        let Value::Object(fields) = value else {
            return Self::new();
        };
        Self(
            fields
                .iter()
                .filter_map(|(id, count)| whole_count(count).map(|n| (CandidateId::new(id.as_str()), n)))
                .collect(),
        )
    }

    /// Count for a candidate; zero when the candidate has no entry.
    pub fn get(&self, candidate_id: &str) -> u64 {
        self.0.get(candidate_id).copied().unwrap_or(0)
    }

    /// Whether the candidate has an entry (including a zero entry).
    pub fn contains(&self, candidate_id: &str) -> bool {
        self.0.contains_key(candidate_id)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.0.values().fold(0u64, |acc, n| acc.saturating_add(*n))
    }

    /// Number of candidate entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tally has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in candidate-id order.
    pub fn iter(&self) -> impl Iterator<Item = (&CandidateId, u64)> {
        self.0.iter().map(|(id, n)| (id, *n))
    }

    /// Shorthand for `tally_pure(Some(self), candidate_id)`.
    pub fn incremented(&self, candidate_id: &CandidateId) -> Self {
        tally_pure(Some(self), candidate_id)
    }
}

impl FromIterator<(CandidateId, u64)> for Tally {
    fn from_iter<I: IntoIterator<Item = (CandidateId, u64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Return a new tally with one vote added for `candidate_id`.
///
/// An absent `current` is treated as an empty tally. Every other entry is
/// carried over unchanged. The input is only borrowed and is never modified.
pub fn tally_pure(current: Option<&Tally>, candidate_id: &CandidateId) -> Tally {
    let mut next = current.cloned().unwrap_or_default();
    let count = next.0.entry(candidate_id.clone()).or_insert(0);
    *count = count.saturating_add(1);
    next
}

/// Interpret a JSON number as a vote count.
///
/// Non-negative integers are accepted as-is; floats are accepted only when
/// they hold a whole, in-range value (`3.0` counts, `2.5` and `-1` do not).
fn whole_count(value: &Value) -> Option<u64> {
    value.as_u64().or_else(|| {
        value
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f < u64::MAX as f64)
            .map(|f| f as u64)
    })
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_tally() -> impl Strategy<Value = Tally> {
        prop::collection::btree_map("[a-e]", 0u64..1_000, 0..5)
            .prop_map(|m| m.into_iter().map(|(k, v)| (CandidateId::new(k), v)).collect())
    }

    proptest! {
        /// The input tally is identical before and after the update.
        #[test]
        fn input_is_never_modified(tally in arb_tally(), id in "[a-g]") {
            let snapshot = tally.clone();
            let _ = tally_pure(Some(&tally), &CandidateId::new(id));
            prop_assert_eq!(tally, snapshot);
        }

        /// Exactly one vote is added, to exactly the named candidate.
        #[test]
        fn adds_exactly_one_vote(tally in arb_tally(), id in "[a-g]") {
            let target = CandidateId::new(id);
            let next = tally_pure(Some(&tally), &target);
            prop_assert_eq!(next.total(), tally.total() + 1);
            prop_assert_eq!(next.get(target.as_str()), tally.get(target.as_str()) + 1);
            for (other, n) in tally.iter().filter(|(k, _)| **k != target) {
                prop_assert_eq!(next.get(other.as_str()), n);
            }
        }
    }
}
