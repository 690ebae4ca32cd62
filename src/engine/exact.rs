//! Exact-order comparison: lockstep walk of two sequences.

/// The first point at which two sequences stop agreeing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Divergence {
    /// Both sequences have an element at this index but the values differ.
    ValueMismatch { index: usize },
    /// The actual sequence ends at this index while more values were expected.
    MissingItems { index: usize },
    /// The actual sequence continues at this index past the expected values.
    ExtraItems { index: usize },
}

impl Divergence {
    /// Zero-based index of the first divergence.
    pub fn index(&self) -> usize {
        match *self {
            Divergence::ValueMismatch { index }
            | Divergence::MissingItems { index }
            | Divergence::ExtraItems { index } => index,
        }
    }
}

/// Compare two sequences element-wise and report the first divergence.
///
/// Returns `None` when the sequences have equal length and equal elements
/// at every index. Length differences are only reported after every shared
/// index has matched, so the reported index is always the true first
/// difference.
pub fn first_divergence<T: PartialEq>(actual: &[T], expected: &[T]) -> Option<Divergence> {
    let shared = actual.len().min(expected.len());
    for index in 0..shared {
        if actual[index] != expected[index] {
            return Some(Divergence::ValueMismatch { index });
        }
    }

    if actual.len() < expected.len() {
        Some(Divergence::MissingItems { index: actual.len() })
    } else if actual.len() > expected.len() {
        Some(Divergence::ExtraItems { index: expected.len() })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_sequences_have_no_divergence() {
        assert_eq!(first_divergence(&[1, 2, 3], &[1, 2, 3]), None);
    }

    #[test]
    fn test_empty_sequences_match() {
        let empty: [i32; 0] = [];
        assert_eq!(first_divergence(&empty, &empty), None);
    }

    #[test]
    fn test_mismatch_at_first_index() {
        let actual = [1, 2, 3, 4, 5, 666];
        let expected = [666, 3, 1, 2, 4, 5];
        assert_eq!(
            first_divergence(&actual, &expected),
            Some(Divergence::ValueMismatch { index: 0 })
        );
    }

    #[test]
    fn test_mismatch_at_middle_index() {
        assert_eq!(
            first_divergence(&["a", "b", "x"], &["a", "b", "c"]),
            Some(Divergence::ValueMismatch { index: 2 })
        );
    }

    #[test]
    fn test_actual_shorter_reports_missing() {
        assert_eq!(
            first_divergence(&[1, 2], &[1, 2, 3, 4]),
            Some(Divergence::MissingItems { index: 2 })
        );
    }

    #[test]
    fn test_actual_longer_reports_extra() {
        assert_eq!(
            first_divergence(&[1, 2, 3, 4], &[1, 2]),
            Some(Divergence::ExtraItems { index: 2 })
        );
    }

    #[test]
    fn test_value_mismatch_wins_over_length() {
        // index 1 differs before the length difference at index 2
        assert_eq!(
            first_divergence(&[1, 9], &[1, 2, 3]),
            Some(Divergence::ValueMismatch { index: 1 })
        );
    }
}
