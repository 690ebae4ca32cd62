//! Rendering of checked and expected values for failure messages.
//!
//! All failure text flows through here so that messages stay deterministic:
//! the same inputs always produce the same rendered string.

use std::fmt::Debug;

/// Maximum number of elements rendered before a sequence is truncated.
pub const MAX_RENDERED_ITEMS: usize = 20;

/// Render a single value via its `Debug` representation.
pub fn value<T: Debug>(v: &T) -> String {
    format!("{:?}", v)
}

/// Render a sequence as `[a, b, c] (3 items)`.
///
/// `None` renders as `[null] (0 item)`, which keeps a missing sequence
/// visually distinct from an empty one (`[] (0 item)` still differs in the
/// bracket content). Sequences longer than [`MAX_RENDERED_ITEMS`] are
/// truncated with `...` while the reported count stays exact.
pub fn sequence<T: Debug>(seq: Option<&[T]>) -> String {
    let items = match seq {
        None => return "[null] (0 item)".to_string(),
        Some(items) => items,
    };

    let rendered: Vec<String> = items
        .iter()
        .take(MAX_RENDERED_ITEMS)
        .map(|item| format!("{:?}", item))
        .collect();

    let body = if items.len() > MAX_RENDERED_ITEMS {
        format!("{}, ...", rendered.join(", "))
    } else {
        rendered.join(", ")
    };

    format!("[{}] ({})", body, count(items.len()))
}

/// Singular/plural item count: `0 item`, `1 item`, `2 items`.
pub fn count(n: usize) -> String {
    if n <= 1 {
        format!("{} item", n)
    } else {
        format!("{} items", n)
    }
}
