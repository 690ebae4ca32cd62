//! Integration tests for the sequence check surface.
//!
//! These exercise the documented failure messages through the public API,
//! including the exact diagnostics for first-difference, ordering and
//! multiplicity violations.

use attest::{check_that_opt_seq, check_that_seq};
use std::panic;

fn failure_message<F: FnOnce() + panic::UnwindSafe>(check: F) -> String {
    let outcome = panic::catch_unwind(check).expect_err("check should have failed");
    outcome
        .downcast_ref::<String>()
        .cloned()
        .or_else(|| outcome.downcast_ref::<&str>().map(|s| s.to_string()))
        .expect("panic payload should be a message")
}

#[test]
fn contains_exactly_reports_first_difference_index() {
    let actual = [1, 2, 3, 4, 5, 666];
    let message = failure_message(|| {
        check_that_seq(&actual).contains_exactly(&[666, 3, 1, 2, 4, 5][..]);
    });

    assert!(message.contains("first difference is at index #0"), "{message}");
    assert!(message.contains("(found 1, expected 666)"), "{message}");
    assert!(message.contains("[1, 2, 3, 4, 5, 666] (6 items)"), "{message}");
}

#[test]
fn contains_in_that_order_reports_late_duplicate() {
    let actual = ["un", "dos", "un", "tres"];
    let message = failure_message(|| {
        check_that_seq(&actual)
            .contains(&["un", "dos", "tres"])
            .in_that_order();
    });

    assert!(message.contains("item \"un\" appears too late at index 2"), "{message}");
}

#[test]
fn contains_once_reports_redundant_item() {
    let actual = ["un", "dos", "tres", "tres"];
    let message = failure_message(|| {
        check_that_seq(&actual)
            .contains(&["un", "dos", "tres"])
            .once();
    });

    assert!(message.contains("item \"tres\" at index 3 is redundant"), "{message}");
}

#[test]
fn contains_reports_only_the_missing_subset() {
    let actual = ["un", "dos"];
    let message = failure_message(|| {
        check_that_seq(&actual).contains(&["un", "dos", "tres"]);
    });

    assert!(message.contains("not found: [\"tres\"] (1 item)"), "{message}");
    assert!(
        message.contains("contain [\"un\", \"dos\", \"tres\"] (3 items)"),
        "{message}"
    );
}

#[test]
fn null_and_empty_sequences_produce_different_messages() {
    let empty: [i32; 0] = [];

    let on_null = failure_message(|| {
        check_that_opt_seq::<i32>(None).contains(&[1]);
    });
    let on_empty = failure_message(|| {
        check_that_seq(&empty).contains(&[1]);
    });

    assert_ne!(on_null, on_empty);
    assert!(on_null.contains("the checked sequence is null"), "{on_null}");
    assert!(!on_empty.contains("[null]"), "{on_empty}");
    assert!(on_empty.contains("[] (0 item)"), "{on_empty}");
}

#[test]
fn contains_exactly_with_null_expectation_renders_null() {
    let message = failure_message(|| {
        check_that_seq(&[1, 2]).contains_exactly(None);
    });

    assert!(message.contains("contain exactly [null] (0 item)"), "{message}");
    assert!(message.contains("the checked sequence is not null"), "{message}");
}

#[test]
fn contains_exactly_reports_missing_and_extra_items() {
    let shorter = failure_message(|| {
        check_that_seq(&[1, 2]).contains_exactly(&[1, 2, 3, 4][..]);
    });
    assert!(shorter.contains("first difference is at index #2"), "{shorter}");
    assert!(shorter.contains("[3, 4] (2 items) missing"), "{shorter}");

    let longer = failure_message(|| {
        check_that_seq(&[1, 2, 3, 4]).contains_exactly(&[1, 2][..]);
    });
    assert!(longer.contains("first difference is at index #2"), "{longer}");
    assert!(longer.contains("[3, 4] (2 items) extra"), "{longer}");
}

#[test]
fn large_sequences_are_truncated_in_messages() {
    let actual: Vec<usize> = (0..50).collect();
    let message = failure_message(|| {
        check_that_seq(&actual).contains(&[999]);
    });

    assert!(message.contains(", ...] (50 items)"), "{message}");
}

#[test]
fn passing_chains_do_not_panic() {
    let values = vec![10, 20, 30, 40];
    check_that_seq(&values)
        .contains(&[20, 40])
        .in_that_order()
        .once()
        .and()
        .not()
        .is_empty()
        .and()
        .has_size(4)
        .and()
        .is_only_made_of(&[10, 20, 30, 40]);
}
