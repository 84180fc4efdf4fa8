//! # Identifier Newtypes
//!
//! Candidates and voters are both keyed by free-form strings. Wrapping them
//! keeps the two namespaces apart: a `VoterId` never lands in a tally and a
//! `CandidateId` never lands in a voter roll.
//!
//! Both types implement `Borrow<str>`, so sets and maps keyed by them can be
//! queried with a plain `&str`.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Identifier of a candidate on the ballot.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(String);

/// Identifier of a voter.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(String);

impl CandidateId {
    /// Wrap a raw candidate identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl VoterId {
    /// Wrap a raw voter identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Access the inner string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CandidateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::fmt::Display for VoterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CandidateId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CandidateId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for VoterId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for VoterId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for CandidateId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VoterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for CandidateId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for VoterId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_is_raw_id() {
        assert_eq!(CandidateId::new("C1").to_string(), "C1");
        assert_eq!(VoterId::from("V1").to_string(), "V1");
    }

    #[test]
    fn test_set_lookup_by_str() {
        let mut roll = HashSet::new();
        roll.insert(VoterId::new("V1"));
        assert!(roll.contains("V1"));
        assert!(!roll.contains("V2"));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let json = serde_json::to_string(&CandidateId::new("C7")).unwrap();
        assert_eq!(json, "\"C7\"");
        let parsed: VoterId = serde_json::from_str("\"V9\"").unwrap();
        assert_eq!(parsed.as_str(), "V9");
    }
}
