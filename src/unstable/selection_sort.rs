use crate::counters::RunCounters;

sort_impl!("selection_sort");

/// With `skip_self_swap` the exchange is left out when the minimum is already in place. Without
/// it every position costs exactly one counted exchange.
const SKIP_SELF_SWAP: bool = cfg!(feature = "skip_self_swap");

/// Sorts `v` in place by repeatedly selecting the minimum of the unsorted suffix.
///
/// Always performs `len * (len - 1) / 2` comparisons, independent of the input order.
pub fn sort<T: Ord>(v: &mut [T], counters: &mut RunCounters) {
    let len = v.len();
    if len < 2 {
        return;
    }

    for i in 0..len - 1 {
        let mut min_pos = i;
        for j in (i + 1)..len {
            if counters.is_less(&v[j], &v[min_pos]) {
                min_pos = j;
            }
        }

        if SKIP_SELF_SWAP && min_pos == i {
            continue;
        }

        counters.exchange(v, i, min_pos);
    }
}
