//! Fluent checks over sequences.
//!
//! This module provides the builder types for checking ordered collections:
//! - `check_that_seq()` - Entry point for a slice under test
//! - `check_that_opt_seq()` - Entry point when the sequence itself may be absent
//! - `SequenceCheck` - Chainable checks (presence, exact order, size)
//! - `ContainsLink` - Follow-up qualifiers after a `contains` check
//!
//! An absent (`None`) sequence is a distinct case from an empty one: every
//! check reports it with an explicit "is null" diagnostic.

use super::builder::{enforce, CheckResult};
use crate::engine;
use crate::engine::{Divergence, Misplacement};
use crate::render;
use std::fmt::Debug;

/// Create a check on a sequence.
///
/// # Example
///
/// ```rust
/// use attest::check_that_seq;
///
/// let values = vec![1, 2, 3];
/// check_that_seq(&values).contains(&[3, 1]).and().has_size(3);
/// ```
pub fn check_that_seq<T: PartialEq + Debug>(seq: &[T]) -> SequenceCheck<'_, T> {
    SequenceCheck {
        seq: Some(seq),
        negated: false,
    }
}

/// Create a check on a sequence that may be absent.
///
/// Use this when the value under test is an `Option` and "no sequence at
/// all" must stay distinguishable from "an empty sequence".
///
/// # Example
///
/// ```rust
/// use attest::check_that_opt_seq;
///
/// let missing: Option<&[i32]> = None;
/// check_that_opt_seq(missing).is_null();
/// ```
pub fn check_that_opt_seq<T: PartialEq + Debug>(seq: Option<&[T]>) -> SequenceCheck<'_, T> {
    SequenceCheck {
        seq,
        negated: false,
    }
}

/// Chainable checks on a sequence.
///
/// Each check evaluates immediately and panics on failure. Use the
/// `evaluate_*` methods for non-panicking evaluation.
#[derive(Debug, Clone)]
pub struct SequenceCheck<'a, T> {
    seq: Option<&'a [T]>,
    negated: bool,
}

impl<'a, T: PartialEq + Debug> SequenceCheck<'a, T> {
    /// Invert the pass/fail interpretation of the next check.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Readability link between chained checks. Does nothing.
    pub fn and(self) -> Self {
        self
    }

    /// Run a custom predicate through the standard negation and failure
    /// pipeline; the predicate sees `None` for an absent sequence.
    ///
    /// This is the extension point for authoring new sequence checks.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::check_that_seq;
    ///
    /// check_that_seq(&[2, 4, 6]).satisfies("all values to be even", |seq| {
    ///     seq.is_some_and(|items| items.iter().all(|n| n % 2 == 0))
    /// });
    /// ```
    pub fn satisfies(
        mut self,
        description: &str,
        predicate: impl FnOnce(Option<&[T]>) -> bool,
    ) -> Self {
        let result = if predicate(self.seq) {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(description, "the predicate returned false")
        };
        self.verify(result);
        self
    }

    // =========================================================================
    // Shape checks
    // =========================================================================

    /// Check the sequence is absent.
    pub fn is_null(mut self) -> Self {
        let result = self.evaluate_null();
        self.verify(result);
        self
    }

    /// Check the sequence is present and empty.
    ///
    /// An absent sequence fails with its own diagnostic, different from the
    /// non-empty one.
    pub fn is_empty(mut self) -> Self {
        let result = self.evaluate_empty();
        self.verify(result);
        self
    }

    /// Check the sequence is present and holds exactly `size` elements.
    pub fn has_size(mut self, size: usize) -> Self {
        let result = self.evaluate_size(size);
        self.verify(result);
        self
    }

    // =========================================================================
    // Presence and order checks
    // =========================================================================

    /// Check every expected value occurs somewhere in the sequence,
    /// regardless of order or multiplicity.
    ///
    /// Returns a [`ContainsLink`] for the order and multiplicity follow-ups
    /// `in_that_order()` and `once()`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::check_that_seq;
    ///
    /// let words = vec!["un", "dos", "tres"];
    /// check_that_seq(&words).contains(&["un", "tres"]).in_that_order();
    /// ```
    pub fn contains<'e>(mut self, expected: &'e [T]) -> ContainsLink<'a, 'e, T> {
        let result = self.evaluate_contains(expected);
        self.verify(result);
        ContainsLink {
            seq: self.seq.unwrap_or(&[]),
            expected,
        }
    }

    /// Check the sequence holds exactly the expected values, same order,
    /// same length.
    ///
    /// Accepts `None` as the expected side; the failure then renders the
    /// expectation as `[null] (0 item)` instead of faulting.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::check_that_seq;
    ///
    /// check_that_seq(&[1, 2, 3]).contains_exactly(&[1, 2, 3][..]);
    /// ```
    pub fn contains_exactly<'e>(mut self, expected: impl Into<Option<&'e [T]>>) -> Self
    where
        T: 'e,
    {
        let result = self.evaluate_contains_exactly(expected.into());
        self.verify(result);
        self
    }

    /// Check every element of the sequence matches one of the expected
    /// values (the sequence introduces nothing of its own).
    pub fn is_only_made_of(mut self, expected: &[T]) -> Self {
        let result = self.evaluate_only_made_of(expected);
        self.verify(result);
        self
    }

    // =========================================================================
    // Non-panicking evaluation
    // =========================================================================

    /// Evaluate the null check without panicking.
    pub fn evaluate_null(&self) -> CheckResult {
        let description = "sequence to be null";
        match self.seq {
            None => CheckResult::pass(description),
            Some(_) => CheckResult::fail(description, "the checked sequence is not null"),
        }
    }

    /// Evaluate the emptiness check without panicking.
    pub fn evaluate_empty(&self) -> CheckResult {
        let description = "sequence to be empty";
        match self.seq {
            None => CheckResult::fail(description, "the checked sequence is null"),
            Some(items) if items.is_empty() => CheckResult::pass(description),
            Some(items) => CheckResult::fail(
                description,
                format!("the checked sequence holds {}", render::count(items.len())),
            ),
        }
    }

    /// Evaluate the size check without panicking.
    pub fn evaluate_size(&self, size: usize) -> CheckResult {
        let description = format!("sequence of {}", render::count(size));
        match self.seq {
            None => CheckResult::fail(description, "the checked sequence is null"),
            Some(items) if items.len() == size => CheckResult::pass(description),
            Some(items) => CheckResult::fail(
                description,
                format!("the checked sequence holds {}", render::count(items.len())),
            ),
        }
    }

    /// Evaluate the composition check without panicking.
    pub fn evaluate_only_made_of(&self, expected: &[T]) -> CheckResult {
        let description = format!(
            "sequence to be only made of {}",
            render::sequence(Some(expected))
        );
        match self.seq {
            None => CheckResult::fail(description, "the checked sequence is null"),
            Some(items) => {
                let unexpected = engine::unexpected_values(items, expected);
                if unexpected.is_empty() {
                    CheckResult::pass(description)
                } else {
                    CheckResult::fail(
                        description,
                        format!("unexpected: {}", render::sequence(Some(&unexpected[..]))),
                    )
                }
            }
        }
    }

    /// Evaluate the presence check without panicking.
    pub fn evaluate_contains(&self, expected: &[T]) -> CheckResult {
        let description = format!("sequence to contain {}", render::sequence(Some(expected)));
        match self.seq {
            None => CheckResult::fail(description, "the checked sequence is null"),
            Some(items) => {
                let missing = engine::missing_values(items, expected);
                if missing.is_empty() {
                    CheckResult::pass(description)
                } else {
                    CheckResult::fail(
                        description,
                        format!("not found: {}", render::sequence(Some(&missing[..]))),
                    )
                }
            }
        }
    }

    /// Evaluate the exact-order check without panicking.
    pub fn evaluate_contains_exactly(&self, expected: Option<&[T]>) -> CheckResult {
        let description = format!("sequence to contain exactly {}", render::sequence(expected));
        let (items, expected) = match (self.seq, expected) {
            (None, None) => return CheckResult::pass(description),
            (None, Some(_)) => {
                return CheckResult::fail(description, "the checked sequence is null")
            }
            (Some(_), None) => {
                return CheckResult::fail(description, "the checked sequence is not null")
            }
            (Some(items), Some(expected)) => (items, expected),
        };

        let divergence = match engine::first_divergence(items, expected) {
            None => return CheckResult::pass(description),
            Some(divergence) => divergence,
        };

        let reason = match divergence {
            Divergence::ValueMismatch { index } => format!(
                "first difference is at index #{} (found {}, expected {})",
                index,
                render::value(&items[index]),
                render::value(&expected[index])
            ),
            Divergence::MissingItems { index } => format!(
                "first difference is at index #{}: {} missing",
                index,
                render::sequence(Some(&expected[index..]))
            ),
            Divergence::ExtraItems { index } => format!(
                "first difference is at index #{}: {} extra",
                index,
                render::sequence(Some(&items[index..]))
            ),
        };
        CheckResult::fail(description, reason)
    }

    // =========================================================================
    // Internal helpers
    // =========================================================================

    fn verify(&mut self, result: CheckResult) {
        let checked = render::sequence(self.seq);
        enforce(&mut self.negated, result, || {
            format!("  checked: {}\n", checked)
        });
    }
}

/// Follow-up qualifiers after a successful `contains` check.
///
/// The qualifiers refine the same expectation: `in_that_order()` demands
/// the expected values occur at non-decreasing positions, `once()` demands
/// no expected value is matched more often than the expectation names it.
#[derive(Debug, Clone)]
pub struct ContainsLink<'a, 'e, T> {
    seq: &'a [T],
    expected: &'e [T],
}

impl<'a, 'e, T: PartialEq + Debug> ContainsLink<'a, 'e, T> {
    /// Return to the sequence check for further, unrelated checks.
    pub fn and(self) -> SequenceCheck<'a, T> {
        SequenceCheck {
            seq: Some(self.seq),
            negated: false,
        }
    }

    /// Check the expected values occur in the sequence in the demanded
    /// order (panics when an element appears too early or too late).
    pub fn in_that_order(self) -> Self {
        let result = self.evaluate_in_that_order();
        let mut negated = false;
        let checked = render::sequence(Some(self.seq));
        enforce(&mut negated, result, || format!("  checked: {}\n", checked));
        self
    }

    /// Check no expected value is matched more often than the expectation
    /// names it (panics at the first redundant element).
    pub fn once(self) -> Self {
        let result = self.evaluate_once();
        let mut negated = false;
        let checked = render::sequence(Some(self.seq));
        enforce(&mut negated, result, || format!("  checked: {}\n", checked));
        self
    }

    /// Evaluate the order qualifier without panicking.
    pub fn evaluate_in_that_order(&self) -> CheckResult {
        let description = format!(
            "sequence to contain {} in that order",
            render::sequence(Some(self.expected))
        );
        match engine::first_misplaced(self.seq, self.expected) {
            None => CheckResult::pass(description),
            Some(misplaced) => {
                let item = render::value(&self.seq[misplaced.index]);
                let reason = match misplaced.kind {
                    Misplacement::TooEarly => {
                        format!("item {} appears too early at index {}", item, misplaced.index)
                    }
                    Misplacement::TooLate => {
                        format!("item {} appears too late at index {}", item, misplaced.index)
                    }
                };
                CheckResult::fail(description, reason)
            }
        }
    }

    /// Evaluate the multiplicity qualifier without panicking.
    pub fn evaluate_once(&self) -> CheckResult {
        let description = format!(
            "sequence to contain {} once",
            render::sequence(Some(self.expected))
        );
        match engine::first_redundant(self.seq, self.expected) {
            None => CheckResult::pass(description),
            Some(index) => CheckResult::fail(
                description,
                format!(
                    "item {} at index {} is redundant",
                    render::value(&self.seq[index]),
                    index
                ),
            ),
        }
    }
}
