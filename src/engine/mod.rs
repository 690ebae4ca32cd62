//! The enumerable comparison engine.
//!
//! Pure functions that compare an actual sequence against expected values
//! and report the first point of divergence. All of them are single-pass or
//! two-pass linear scans requiring only `T: PartialEq`; no hashing, no
//! sorting, no auxiliary structures.
//!
//! The fluent layer in [`crate::fluent`] turns these reports into rendered
//! failure messages.

mod exact;
mod multiplicity;
mod order;
mod presence;

pub use exact::{first_divergence, Divergence};
pub use multiplicity::first_redundant;
pub use order::{first_misplaced, Misplaced, Misplacement};
pub use presence::{missing_values, unexpected_values};
