//! Scoped inversion of every check, for self-validation.
//!
//! While a [`ForcedNegation`] guard is alive, every check on the current
//! thread has its pass/fail interpretation flipped. This exists so the
//! library can validate its own failure paths without sprinkling
//! `should_panic` everywhere. It has no role in ordinary assertions.
//!
//! The toggle is thread-local rather than process-wide: the test runner
//! executes tests in parallel, and a global flag would invert checks in
//! unrelated tests.

use std::cell::Cell;

thread_local! {
    static FORCED: Cell<bool> = const { Cell::new(false) };
}

/// Whether forced negation is active on this thread.
pub(crate) fn forced() -> bool {
    FORCED.with(|flag| flag.get())
}

/// RAII guard that inverts the meaning of every check on this thread.
///
/// The previous state is restored when the guard is dropped, so scopes
/// nest safely.
///
/// # Example
///
/// ```rust
/// use attest::{check_that, ForcedNegation};
///
/// {
///     let _negated = ForcedNegation::scope();
///     check_that(1).is_equal_to(2); // does not panic: the failure is expected
/// }
/// check_that(1).is_equal_to(1); // back to normal
/// ```
pub struct ForcedNegation {
    previous: bool,
}

impl ForcedNegation {
    /// Activate forced negation until the returned guard is dropped.
    pub fn scope() -> Self {
        let previous = FORCED.with(|flag| flag.replace(true));
        Self { previous }
    }
}

impl Drop for ForcedNegation {
    fn drop(&mut self) {
        let previous = self.previous;
        FORCED.with(|flag| flag.set(previous));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forced_is_off_by_default() {
        assert!(!forced());
    }

    #[test]
    fn test_scope_restores_on_drop() {
        {
            let _guard = ForcedNegation::scope();
            assert!(forced());
        }
        assert!(!forced());
    }

    #[test]
    fn test_scopes_nest() {
        let _outer = ForcedNegation::scope();
        {
            let _inner = ForcedNegation::scope();
            assert!(forced());
        }
        assert!(forced());
    }
}
