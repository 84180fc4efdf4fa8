//! # Region Vote Aggregation
//!
//! Sums the votes of a region and all of its nested sub-regions.
//!
//! Two entry points share the same rule:
//!
//! - [`count_votes_in_regions`] walks a typed [`RegionNode`] tree.
//! - [`count_votes_in_value`] walks an arbitrary JSON value as loaded from a
//!   file. Non-objects count as zero, a missing or non-numeric `votes` counts
//!   as zero, and a missing or non-array `subRegions` counts as empty. A
//!   malformed sub-region contributes zero without affecting its siblings.
//!
//! Region counts are signed: a negative `votes` (a correction entry, say) is
//! summed like any other number. Totals saturate at the `i64` bounds.
//!
//! Both traverse with an explicit work stack, so a deep tree cannot exhaust
//! the call stack. Owned trees cannot contain cycles.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One administrative unit in a region tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionNode {
    /// Region name.
    #[serde(default)]
    pub name: String,
    /// Votes recorded directly in this region.
    #[serde(default)]
    pub votes: i64,
    /// Nested regions, in order.
    #[serde(default)]
    pub sub_regions: Vec<RegionNode>,
}

impl RegionNode {
    /// A leaf region.
    pub fn new(name: impl Into<String>, votes: i64) -> Self {
        Self {
            name: name.into(),
            votes,
            sub_regions: Vec::new(),
        }
    }

    /// Append a sub-region.
    pub fn with_sub_region(mut self, sub_region: RegionNode) -> Self {
        self.sub_regions.push(sub_region);
        self
    }

    /// Total votes in this region and everything beneath it.
    pub fn total_votes(&self) -> i64 {
        count_votes_in_regions(Some(self))
    }
}

/// Sum votes across a region tree. An absent tree counts as zero.
pub fn count_votes_in_regions(tree: Option<&RegionNode>) -> i64 {
    let mut total = 0i64;
    let mut pending: Vec<&RegionNode> = tree.into_iter().collect();
    while let Some(node) = pending.pop() {
        total = total.saturating_add(node.votes);
        pending.extend(node.sub_regions.iter());
    }
    total
}

/// Sum votes across a loosely-typed region tree. Never fails.
pub fn count_votes_in_value(tree: &Value) -> i64 {
    let mut total = 0i64;
    let mut pending = vec![tree];
    while let Some(node) = pending.pop() {
        let Value::Object(fields) = node else {
            continue;
        };
        let own = fields.get("votes").and_then(region_votes).unwrap_or(0);
        total = total.saturating_add(own);
        if let Some(Value::Array(children)) = fields.get("subRegions") {
            pending.extend(children.iter());
        }
    }
    total
}

/// Interpret a region's `votes` field.
///
/// Any integer counts, negatives included; integers past `i64::MAX` clamp to
/// it. A float counts only when it holds a whole value (`4.0` is 4). A
/// fractional float such as `1.5` is not a vote count and reads as zero,
/// the same as a non-number.
fn region_votes(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    if value.as_u64().is_some() {
        return Some(i64::MAX);
    }
    value
        .as_f64()
        .filter(|f| f.is_finite() && f.fract() == 0.0)
        .map(|f| f as i64)
}
