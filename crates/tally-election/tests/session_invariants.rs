//! # Session Invariant Tests
//!
//! Drives an `ElectionSession` through random sequences of registrations
//! and votes and checks the session invariants after every call:
//!
//! - the tally sums to the number of voters who have voted,
//! - every voter who has voted is registered,
//! - tally keys stay exactly the candidate ids given at creation.

use proptest::prelude::*;

use tally_core::{Candidate, Voter};
use tally_election::{create_election, ElectionSession, VoteError, VoteReceipt};

#[derive(Debug, Clone)]
enum Op {
    Register { voter: u8, age: u32 },
    Vote { voter: u8, candidate: u8 },
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..6, 10u32..40).prop_map(|(voter, age)| Op::Register { voter, age }),
        (0u8..6, 0u8..4).prop_map(|(voter, candidate)| Op::Vote { voter, candidate }),
    ]
}

fn ballot() -> Vec<Candidate> {
    vec![
        Candidate::new("C0", "Ada", "North"),
        Candidate::new("C1", "Ben", "South"),
        Candidate::new("C2", "Cy", "East"),
    ]
}

fn apply(session: &mut ElectionSession, op: &Op) {
    match op {
        Op::Register { voter, age } => {
            session.register_voter(&Voter::new(format!("V{voter}"), "voter", *age));
        }
        Op::Vote { voter, candidate } => {
            // C3 does not exist, so some votes exercise the unknown-candidate path.
            session.cast_vote(
                &format!("V{voter}"),
                &format!("C{candidate}"),
                None::<fn(VoteReceipt)>,
                None::<fn(VoteError)>,
            );
        }
    }
}

proptest! {
    #[test]
    fn tally_sum_equals_voted_count(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut session = create_election(&ballot());
        for op in &ops {
            apply(&mut session, op);
            prop_assert_eq!(session.total_votes(), session.voted_count() as u64);
            prop_assert!(session.voted_count() <= session.registered_count());
        }
    }

    #[test]
    fn voters_who_voted_are_registered(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut session = create_election(&ballot());
        for op in &ops {
            apply(&mut session, op);
        }
        for n in 0..6 {
            let id = format!("V{n}");
            if session.has_voted(&id) {
                prop_assert!(session.is_registered(&id));
            }
        }
    }

    #[test]
    fn tally_keys_are_fixed(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut session = create_election(&ballot());
        for op in &ops {
            apply(&mut session, op);
        }
        let keys: Vec<String> = session.tally().iter().map(|(id, _)| id.to_string()).collect();
        prop_assert_eq!(keys, vec!["C0", "C1", "C2"]);
    }

    #[test]
    fn winner_has_the_maximum_count(ops in prop::collection::vec(arb_op(), 0..60)) {
        let mut session = create_election(&ballot());
        for op in &ops {
            apply(&mut session, op);
        }
        let max = session.results().iter().map(|r| r.votes).max().unwrap_or(0);
        match session.winner() {
            Some(winner) => {
                prop_assert_eq!(winner.votes, max);
            }
            None => {
                prop_assert_eq!(max, 0);
            }
        }
    }
}

fn describe(receipt: VoteReceipt) -> String {
    format!("{}->{}", receipt.voter_id, receipt.candidate_id)
}

#[test]
fn test_walkthrough_two_candidates() {
    let mut session = create_election(&[
        Candidate::new("C1", "Alice", "Blue"),
        Candidate::new("C2", "Bob", "Green"),
    ]);
    assert!(session.register_voter(&Voter::new("V1", "Ann", 25)));

    let first = session.cast_vote("V1", "C1", Some(describe), Some(|e: VoteError| e.to_string()));
    assert_eq!(first.as_deref(), Some("V1->C1"));

    let second = session.cast_vote("V1", "C2", Some(describe), Some(|e: VoteError| e.to_string()));
    assert_eq!(second.as_deref(), Some("Already voted"));

    let results = session.results();
    assert_eq!(results[0].id.as_str(), "C1");
    assert_eq!(results[0].votes, 1);
    assert_eq!(results[1].votes, 0);
    assert_eq!(session.winner().map(|w| w.name), Some("Alice".to_string()));
}
