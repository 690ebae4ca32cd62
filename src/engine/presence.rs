//! Presence checks: which expected values are absent, which actual values
//! are unexpected.

/// Return the expected values not found anywhere in `actual`.
///
/// Duplicates in `expected` collapse to a single entry, so the report lists
/// each missing value once, in the order `expected` names them.
pub fn missing_values<'e, T: PartialEq>(actual: &[T], expected: &'e [T]) -> Vec<&'e T> {
    let mut missing: Vec<&'e T> = Vec::new();
    for value in expected {
        let found = actual.iter().any(|item| item == value);
        if !found && !missing.iter().any(|seen| *seen == value) {
            missing.push(value);
        }
    }
    missing
}

/// Return the actual values that match none of the expected values.
///
/// The dual of [`missing_values`], used for "only made of" checks.
/// Duplicates in `actual` collapse to a single entry.
pub fn unexpected_values<'a, T: PartialEq>(actual: &'a [T], expected: &[T]) -> Vec<&'a T> {
    let mut unexpected: Vec<&'a T> = Vec::new();
    for item in actual {
        let allowed = expected.iter().any(|value| value == item);
        if !allowed && !unexpected.iter().any(|seen| *seen == item) {
            unexpected.push(item);
        }
    }
    unexpected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_present() {
        let actual = ["un", "dos", "tres"];
        let expected = ["dos", "un"];
        assert!(missing_values(&actual, &expected).is_empty());
    }

    #[test]
    fn test_missing_subset_reported() {
        let actual = ["un", "dos"];
        let expected = ["un", "dos", "tres", "cuatro"];
        assert_eq!(missing_values(&actual, &expected), vec![&"tres", &"cuatro"]);
    }

    #[test]
    fn test_duplicate_expected_collapses() {
        let actual = ["un"];
        let expected = ["tres", "tres", "tres"];
        assert_eq!(missing_values(&actual, &expected), vec![&"tres"]);
    }

    #[test]
    fn test_empty_expected_never_missing() {
        let actual = [1, 2];
        let expected: [i32; 0] = [];
        assert!(missing_values(&actual, &expected).is_empty());
    }

    #[test]
    fn test_unexpected_values() {
        let actual = [1, 2, 3, 2, 9];
        let expected = [1, 2];
        assert_eq!(unexpected_values(&actual, &expected), vec![&3, &9]);
    }

    #[test]
    fn test_unexpected_none_when_subset() {
        let actual = [1, 1, 2];
        let expected = [2, 1];
        assert!(unexpected_values(&actual, &expected).is_empty());
    }
}
