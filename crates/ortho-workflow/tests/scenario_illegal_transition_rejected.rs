//! Exhaustive check of the transition table: every (from, to) pair is either
//! in the allowed set or rejected with a `TransitionError` naming the pair.

use ortho_schemas::OrderStatus;
use ortho_workflow::{allowed_transitions, check_transition, is_terminal};

#[test]
fn every_pair_agrees_with_the_table() {
    for from in OrderStatus::ALL {
        for to in OrderStatus::ALL {
            let expected_legal = allowed_transitions(from).contains(&to);
            match check_transition(from, to) {
                Ok(()) => assert!(expected_legal, "{from} -> {to} accepted but not in table"),
                Err(e) => {
                    assert!(!expected_legal, "{from} -> {to} rejected but in table");
                    assert_eq!(e.from, from);
                    assert_eq!(e.to, to);
                }
            }
        }
    }
}

#[test]
fn only_refunded_is_terminal() {
    for status in OrderStatus::ALL {
        assert_eq!(is_terminal(status), status == OrderStatus::Refunded, "{status}");
    }
}

#[test]
fn table_never_allows_self_transition() {
    for status in OrderStatus::ALL {
        assert!(!allowed_transitions(status).contains(&status), "{status}");
    }
}
