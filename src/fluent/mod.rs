//! Fluent check API.
//!
//! This module provides a chainable API for making checks on values under
//! test. Checks evaluate immediately (panic on failure) and return the
//! builder, so several checks can be chained with `.and()`; `.not()`
//! inverts the next check. Non-destructive evaluation is available through
//! the `evaluate_*` methods.
//!
//! # Example
//!
//! ```rust
//! use attest::{check_that, check_that_seq};
//!
//! check_that(2 + 2).is_equal_to(4);
//!
//! let words = vec!["un", "dos", "tres"];
//! check_that_seq(&words)
//!     .contains(&["un", "tres"])
//!     .in_that_order()
//!     .and()
//!     .has_size(3);
//! ```

mod builder;
mod sequence;
mod string;

pub use builder::{check_that, CheckError, CheckResult, ValueCheck};
pub use sequence::{check_that_opt_seq, check_that_seq, ContainsLink, SequenceCheck};
pub use string::{check_that_str, StringCheck};
