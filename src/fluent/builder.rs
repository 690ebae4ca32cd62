//! Fluent check builder for single values.
//!
//! This module provides the core types for making checks on a value:
//! - `check_that()` - Entry point wrapping a value under test
//! - `ValueCheck` - Chainable checks on that value
//! - `CheckResult` / `CheckError` - The outcome currency shared by every check
//!
//! Checks evaluate immediately and panic on failure; every panicking check
//! has an `evaluate_*` counterpart that returns a [`CheckResult`] instead.

use crate::negation;
use crate::render;
use std::fmt::Debug;

/// Result of evaluating a check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Whether the check passed.
    pub passed: bool,
    /// Description of what was checked, phrased to follow "expected".
    pub description: String,
    /// Failure reason if the check failed.
    pub reason: Option<String>,
}

impl CheckResult {
    /// Create a passing check result.
    ///
    /// Public so that third-party check methods can report through the same
    /// machinery as the built-in ones.
    pub fn pass(description: impl Into<String>) -> Self {
        Self {
            passed: true,
            description: description.into(),
            reason: None,
        }
    }

    /// Create a failing check result.
    pub fn fail(description: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            passed: false,
            description: description.into(),
            reason: Some(reason.into()),
        }
    }

    /// Convert into a `Result`, for callers that prefer `?` over panics.
    pub fn into_result(self) -> Result<(), CheckError> {
        if self.passed {
            Ok(())
        } else {
            let reason = self.reason.unwrap_or_else(|| "unknown reason".to_string());
            Err(CheckError(format!("expected {}: {}", self.description, reason)))
        }
    }
}

/// A failed check, carrying its fully rendered explanation.
#[derive(Debug, thiserror::Error)]
#[error("check failed: {0}")]
pub struct CheckError(pub String);

/// Apply negation and the panic policy to a check result.
///
/// The `negated` flag is consumed: `.not()` inverts exactly one check.
/// [`crate::ForcedNegation`] additionally inverts every check on the
/// current thread while active.
pub(crate) fn enforce(negated: &mut bool, result: CheckResult, context: impl FnOnce() -> String) {
    let negate = std::mem::replace(negated, false) ^ negation::forced();
    if result.passed != negate {
        return;
    }

    if negate {
        panic!(
            "assertion failed: expected not {}\n\n  reason: the check passed but was negated\n{}",
            result.description,
            context()
        );
    }

    let reason = result.reason.as_deref().unwrap_or("unknown reason");
    panic!(
        "assertion failed: expected {}\n\n  reason: {}\n{}",
        result.description,
        reason,
        context()
    );
}

/// Create a check on a single value.
///
/// This is the entry point of the fluent API for scalars. See
/// [`crate::check_that_seq`] for sequences and [`crate::check_that_str`]
/// for strings.
///
/// # Example
///
/// ```rust
/// use attest::check_that;
///
/// check_that(2 + 2).is_equal_to(4).and().is_greater_than(3);
/// check_that("on").not().is_equal_to("off");
/// ```
pub fn check_that<T: Debug>(value: T) -> ValueCheck<T> {
    ValueCheck {
        value,
        negated: false,
    }
}

/// Chainable checks on a single value.
///
/// Each check evaluates immediately, panics on failure and returns `self`
/// so further checks can follow.
#[derive(Debug, Clone)]
pub struct ValueCheck<T> {
    value: T,
    negated: bool,
}

impl<T: Debug> ValueCheck<T> {
    /// Invert the pass/fail interpretation of the next check.
    pub fn not(mut self) -> Self {
        self.negated = !self.negated;
        self
    }

    /// Readability link between chained checks. Does nothing.
    pub fn and(self) -> Self {
        self
    }

    /// The value under test.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Run a custom predicate through the standard negation and failure
    /// pipeline.
    ///
    /// This is the extension point for authoring new checks: a third-party
    /// check method wraps `satisfies` and gets `.not()` support and the
    /// common message format for free.
    ///
    /// # Example
    ///
    /// ```rust
    /// use attest::check_that;
    ///
    /// check_that(8).satisfies("value to be even", |n| n % 2 == 0);
    /// ```
    pub fn satisfies(mut self, description: &str, predicate: impl FnOnce(&T) -> bool) -> Self {
        let result = if predicate(&self.value) {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(description, "the predicate returned false")
        };
        self.verify(result);
        self
    }

    fn verify(&mut self, result: CheckResult) {
        let value = render::value(&self.value);
        enforce(&mut self.negated, result, || format!("  checked: {}\n", value));
    }
}

impl<T: PartialEq + Debug> ValueCheck<T> {
    /// Check the value equals `other` (panics on mismatch).
    pub fn is_equal_to(mut self, other: T) -> Self {
        let result = self.evaluate_equal_to(&other);
        self.verify(result);
        self
    }

    /// Check the value differs from `other` (panics on equality).
    pub fn is_not_equal_to(mut self, other: T) -> Self {
        let result = self.evaluate_not_equal_to(&other);
        self.verify(result);
        self
    }

    /// Check the value equals one of `allowed`.
    pub fn is_one_of(mut self, allowed: &[T]) -> Self {
        let result = self.evaluate_one_of(allowed);
        self.verify(result);
        self
    }

    /// Evaluate equality without panicking.
    pub fn evaluate_equal_to(&self, other: &T) -> CheckResult {
        let description = format!("value equal to {}", render::value(other));
        if self.value == *other {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(
                description,
                format!("the checked value is {}", render::value(&self.value)),
            )
        }
    }

    /// Evaluate inequality without panicking.
    pub fn evaluate_not_equal_to(&self, other: &T) -> CheckResult {
        let description = format!("value different from {}", render::value(other));
        if self.value != *other {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(description, "both values are equal")
        }
    }

    /// Evaluate membership in `allowed` without panicking.
    pub fn evaluate_one_of(&self, allowed: &[T]) -> CheckResult {
        let description = format!("value to be one of {}", render::sequence(Some(allowed)));
        if allowed.iter().any(|candidate| *candidate == self.value) {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(description, "no candidate matched")
        }
    }
}

impl<T: PartialOrd + Debug> ValueCheck<T> {
    /// Check the value is strictly greater than `other`.
    pub fn is_greater_than(mut self, other: T) -> Self {
        let result = self.evaluate_greater_than(&other);
        self.verify(result);
        self
    }

    /// Check the value is strictly less than `other`.
    pub fn is_less_than(mut self, other: T) -> Self {
        let result = self.evaluate_less_than(&other);
        self.verify(result);
        self
    }

    /// Evaluate the strict ordering check without panicking.
    pub fn evaluate_greater_than(&self, other: &T) -> CheckResult {
        let description = format!("value greater than {}", render::value(other));
        if self.value > *other {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(
                description,
                format!("the checked value is {}", render::value(&self.value)),
            )
        }
    }

    /// Evaluate the strict ordering check without panicking.
    pub fn evaluate_less_than(&self, other: &T) -> CheckResult {
        let description = format!("value less than {}", render::value(other));
        if self.value < *other {
            CheckResult::pass(description)
        } else {
            CheckResult::fail(
                description,
                format!("the checked value is {}", render::value(&self.value)),
            )
        }
    }
}

impl ValueCheck<bool> {
    /// Check the value is `true`.
    pub fn is_true(self) -> Self {
        self.is_equal_to(true)
    }

    /// Check the value is `false`.
    pub fn is_false(self) -> Self {
        self.is_equal_to(false)
    }
}
