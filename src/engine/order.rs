//! Subsequence-order checking: do the expected values occur in the actual
//! sequence in the order the expected sequence demands?

/// How an element violates the expected order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Misplacement {
    /// The element occurs before an expected value that is still owed.
    TooEarly,
    /// The element occurs again after the cursor has moved past its value.
    TooLate,
}

/// An order violation, located in the actual sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Misplaced {
    /// Index of the offending element in the actual sequence.
    pub index: usize,
    pub kind: Misplacement,
}

/// Scan `actual` and report the first element that breaks the order given
/// by `expected`.
///
/// A cursor walks the expected sequence. Elements equal to the value under
/// the cursor are consumed in place, so immediate repeats are allowed.
/// An element matching a later expected value moves the cursor forward,
/// unless a value it skips over is still owed and present later in the
/// actual sequence; that element is reported [`Misplacement::TooEarly`].
/// An element matching only a value the cursor has already passed is
/// reported [`Misplacement::TooLate`]. Elements matching no expected value
/// are ignored; presence is a separate check.
///
/// Duplicate actual values are thereby consumed left-to-right in the order
/// the expected sequence demands them.
pub fn first_misplaced<T: PartialEq>(actual: &[T], expected: &[T]) -> Option<Misplaced> {
    if expected.is_empty() {
        return None;
    }

    let mut cursor = 0usize;
    // whether expected[cursor] has been matched at least once
    let mut consumed = false;

    for (index, item) in actual.iter().enumerate() {
        if *item == expected[cursor] {
            consumed = true;
            continue;
        }

        match expected[cursor + 1..].iter().position(|value| value == item) {
            Some(offset) => {
                let target = cursor + 1 + offset;
                let first_owed = if consumed { cursor + 1 } else { cursor };
                let skipped_but_owed = expected[first_owed..target].iter().any(|owed| {
                    actual[index + 1..].iter().any(|later| later == owed)
                });
                if skipped_but_owed {
                    return Some(Misplaced {
                        index,
                        kind: Misplacement::TooEarly,
                    });
                }
                cursor = target;
                consumed = true;
            }
            None => {
                if expected[..cursor].iter().any(|value| value == item) {
                    return Some(Misplaced {
                        index,
                        kind: Misplacement::TooLate,
                    });
                }
                // not an expected value at all; ignore
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_order_passes() {
        assert_eq!(first_misplaced(&["un", "dos", "tres"], &["un", "dos", "tres"]), None);
    }

    #[test]
    fn test_subsequence_with_noise_passes() {
        // "x" and "y" are not expected values and are skipped over
        assert_eq!(first_misplaced(&["a", "x", "b", "y", "c"], &["a", "b", "c"]), None);
    }

    #[test]
    fn test_repeated_current_value_passes() {
        assert_eq!(first_misplaced(&["un", "un", "dos"], &["un", "dos"]), None);
    }

    #[test]
    fn test_duplicate_reappearing_late() {
        // the second "un" shows up after "dos" although "un" precedes "dos"
        let actual = ["un", "dos", "un", "tres"];
        let expected = ["un", "dos", "tres"];
        assert_eq!(
            first_misplaced(&actual, &expected),
            Some(Misplaced {
                index: 2,
                kind: Misplacement::TooLate,
            })
        );
    }

    #[test]
    fn test_value_jumping_the_queue_is_too_early() {
        // "dos" arrives while "un" is still owed and present later
        let actual = ["dos", "un", "dos", "tres"];
        let expected = ["un", "dos", "tres"];
        assert_eq!(
            first_misplaced(&actual, &expected),
            Some(Misplaced {
                index: 0,
                kind: Misplacement::TooEarly,
            })
        );
    }

    #[test]
    fn test_skipping_a_value_absent_later_passes() {
        // "b" is skipped but never occurs in actual, so "c" may advance
        assert_eq!(first_misplaced(&["a", "c"], &["a", "b", "c"]), None);
    }

    #[test]
    fn test_expected_duplicates_consumed_in_order() {
        // expected demands "un" twice; a second "un" after "dos" satisfies
        // nothing and is late only if "un" is fully behind the cursor
        assert_eq!(first_misplaced(&["un", "un", "dos"], &["un", "un", "dos"]), None);
        assert_eq!(
            first_misplaced(&["un", "dos", "un"], &["un", "un", "dos"]),
            Some(Misplaced {
                index: 1,
                kind: Misplacement::TooEarly,
            })
        );
    }

    #[test]
    fn test_empty_expected_passes() {
        let none: [i32; 0] = [];
        assert_eq!(first_misplaced(&[1, 2, 3], &none), None);
    }

    #[test]
    fn test_empty_actual_passes() {
        let none: [i32; 0] = [];
        assert_eq!(first_misplaced(&none, &[1, 2]), None);
    }
}
