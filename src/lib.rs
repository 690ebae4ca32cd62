//! # attest
//!
//! A fluent assertion library with precise enumerable diff messages.
//!
//! Checks wrap a value under test and evaluate immediately, panicking with
//! a deterministic, fully rendered message on failure, which makes them
//! usable directly inside Rust's native `#[test]` framework. Checks chain
//! with `.and()` and invert with `.not()`.
//!
//! ## Quick Start
//!
//! ```rust
//! use attest::{check_that, check_that_seq, check_that_str};
//!
//! check_that(2 + 2).is_equal_to(4).and().is_greater_than(3);
//!
//! let words = vec!["un", "dos", "tres"];
//! check_that_seq(&words)
//!     .contains(&["un", "tres"])
//!     .in_that_order()
//!     .and()
//!     .has_size(3);
//!
//! check_that_str("Success: 42 items").matches(r"\d+ items");
//! ```
//!
//! ## Sequence diagnostics
//!
//! The sequence checks pinpoint the first divergence instead of dumping
//! both collections: `contains_exactly` names the first differing index,
//! `contains(...).in_that_order()` names the element that appears too
//! early or too late, and `contains(...).once()` names the first redundant
//! element. A `None` sequence is reported distinctly from an empty one.
//!
//! ## Non-panicking evaluation
//!
//! Every check has an `evaluate_*` counterpart returning a
//! [`CheckResult`], convertible to `Result<(), CheckError>`:
//!
//! ```rust
//! use attest::check_that;
//!
//! let result = check_that(1).evaluate_equal_to(&2);
//! assert!(!result.passed);
//! ```

pub mod engine;
pub mod fluent;
pub mod negation;
pub mod render;

// Core types
pub use fluent::{check_that, CheckError, CheckResult, ValueCheck};

// Sequence checks
pub use fluent::{check_that_opt_seq, check_that_seq, ContainsLink, SequenceCheck};

// String checks
pub use fluent::{check_that_str, StringCheck};

// Self-validation toggle
pub use negation::ForcedNegation;
