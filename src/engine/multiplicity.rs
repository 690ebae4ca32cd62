//! Multiplicity checking: each expected value may be matched only as many
//! times as the expected sequence names it.

/// Index of the first actual element matching an expected value whose
/// occurrence budget is already spent.
///
/// Every expected value starts with a budget equal to its multiplicity in
/// `expected`. Walking `actual`, each matching element consumes one unit;
/// an element matching an exhausted value is redundant. Elements matching
/// no expected value are ignored; presence is a separate check.
pub fn first_redundant<T: PartialEq>(actual: &[T], expected: &[T]) -> Option<usize> {
    let mut budgets: Vec<(&T, usize)> = Vec::new();
    for value in expected {
        match budgets.iter_mut().find(|(seen, _)| *seen == value) {
            Some((_, budget)) => *budget += 1,
            None => budgets.push((value, 1)),
        }
    }

    for (index, item) in actual.iter().enumerate() {
        if let Some((_, budget)) = budgets.iter_mut().find(|(seen, _)| *seen == item) {
            if *budget == 0 {
                return Some(index);
            }
            *budget -= 1;
        }
    }

    None
}
