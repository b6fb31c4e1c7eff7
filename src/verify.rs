use std::fmt;

/// First reason a sorted output was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Violation {
    LengthMismatch { original: usize, sorted: usize },
    /// `sorted[index - 1] > sorted[index]`.
    OutOfOrder { index: usize },
    /// `original[index]` has no unused equal value left in the sorted output.
    Unmatched { index: usize },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::LengthMismatch { original, sorted } => write!(
                f,
                "length mismatch, original has {original} elements, sorted has {sorted}"
            ),
            Violation::OutOfOrder { index } => {
                write!(f, "elements at {} and {index} are out of order", index - 1)
            }
            Violation::Unmatched { index } => {
                write!(f, "original element at {index} is missing from the sorted output")
            }
        }
    }
}

/// Checks that `sorted` is non-decreasing and holds exactly the values of `original`.
///
/// Values are matched one by one against unused positions of `sorted`, so equal values may end
/// up in any order. This is `O(N^2)` and does not sort anything itself.
pub fn check<T: Ord>(original: &[T], sorted: &[T]) -> Result<(), Violation> {
    if original.len() != sorted.len() {
        return Err(Violation::LengthMismatch {
            original: original.len(),
            sorted: sorted.len(),
        });
    }

    if let Some(index) = (1..sorted.len()).find(|&i| sorted[i - 1] > sorted[i]) {
        return Err(Violation::OutOfOrder { index });
    }

    let mut used = vec![false; sorted.len()];
    for (index, val) in original.iter().enumerate() {
        let slot = sorted
            .iter()
            .zip(used.iter())
            .position(|(candidate, &taken)| !taken && candidate == val);

        match slot {
            Some(pos) => used[pos] = true,
            None => return Err(Violation::Unmatched { index }),
        }
    }

    Ok(())
}

/// `true` if `sorted` is a sorted permutation of `original`. Empty input is valid.
pub fn verify<T: Ord>(original: &[T], sorted: &[T]) -> bool {
    check(original, sorted).is_ok()
}
