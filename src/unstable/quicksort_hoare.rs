use crate::counters::RunCounters;

sort_impl!("quicksort_hoare");

/// Sorts `v` in place with quicksort, using the middle element of each sub-range as pivot.
///
/// Sub-ranges are kept on an explicit stack instead of the call stack. The smaller side is always
/// processed first, which bounds the stack to `O(log(N))` entries even for inputs that make the
/// pivot choice degenerate. The order in which disjoint sub-ranges are processed has no effect on
/// the comparison and swap counts.
pub fn sort<T: Ord>(v: &mut [T], counters: &mut RunCounters) {
    let len = v.len();
    if len < 2 {
        return;
    }

    let mut pending = vec![(0, len - 1)];

    while let Some((left, right)) = pending.pop() {
        let (i, j) = partition(v, left, right, counters);

        // `j` may end up one before `left`, which is -1 for the first element.
        let lower = (left as isize) < j;
        let upper = i < right;

        let lower_range = (left, j.max(0) as usize);
        let upper_range = (i, right);

        match (lower, upper) {
            (true, true) => {
                // Pushed last, popped first.
                if lower_range.1 - lower_range.0 < upper_range.1 - upper_range.0 {
                    pending.push(upper_range);
                    pending.push(lower_range);
                } else {
                    pending.push(lower_range);
                    pending.push(upper_range);
                }
            }
            (true, false) => pending.push(lower_range),
            (false, true) => pending.push(upper_range),
            (false, false) => {}
        }
    }
}

/// Hoare partition of `v[left..=right]` around the value at the middle index.
///
/// Returns the crossing cursors `(i, j)` with `j < i`: everything in `left..=j` is at most the
/// pivot value and everything in `i..=right` is at least the pivot value.
///
/// The pivot value is fixed once on entry. Rather than copying it out, the element holding it is
/// followed through exchanges, so `T` does not need to be `Clone`.
fn partition<T: Ord>(
    v: &mut [T],
    left: usize,
    right: usize,
    counters: &mut RunCounters,
) -> (usize, isize) {
    let mut pivot = left + (right - left) / 2;
    let mut i = left;
    let mut j = right;

    loop {
        // Both scans are bounded: on the first pass by the pivot element itself, afterwards by
        // the pair exchanged in the previous pass.
        while counters.is_less(&v[i], &v[pivot]) {
            i += 1;
        }
        while counters.is_less(&v[pivot], &v[j]) {
            j -= 1;
        }

        if i > j {
            return (i, j as isize);
        }

        counters.exchange(v, i, j);
        if pivot == i {
            pivot = j;
        } else if pivot == j {
            pivot = i;
        }

        i += 1;
        if j == 0 {
            // Only possible for `left == 0`, the cursors have crossed.
            return (i, -1);
        }
        j -= 1;

        if i > j {
            return (i, j as isize);
        }
    }
}
