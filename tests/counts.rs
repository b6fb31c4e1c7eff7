use sort_tally_rs::counters::RunCounters;
use sort_tally_rs::patterns::{self, Variant};
use sort_tally_rs::unstable::{quicksort_hoare, selection_sort};

fn counted(sort: fn(&mut [i64], &mut RunCounters), v: &mut [i64]) -> RunCounters {
    let mut counters = RunCounters::new();
    sort(v, &mut counters);
    counters
}

#[test]
fn counters_start_at_zero_and_reset() {
    let mut counters = RunCounters::new();
    assert_eq!(counters, RunCounters::default());

    let mut v = [2, 1];
    assert!(counters.is_less(&v[1], &v[0]));
    counters.exchange(&mut v, 0, 1);
    counters.exchange(&mut v, 1, 1);

    assert_eq!(v, [1, 2]);
    assert_eq!(counters.comparisons, 1);
    assert_eq!(counters.swaps, 2);

    counters.reset();
    assert_eq!(counters, RunCounters::default());
}

#[test]
fn compare_does_not_overflow() {
    let mut counters = RunCounters::new();

    assert!(counters.is_less(&i64::MIN, &i64::MAX));
    assert!(!counters.is_less(&i64::MAX, &i64::MIN));
    assert_eq!(counters.comparisons, 2);
}

#[test]
fn selection_sort_descending_five() {
    let mut v = [5, 4, 3, 2, 1];
    let counters = counted(selection_sort::sort, &mut v);

    assert_eq!(v, [1, 2, 3, 4, 5]);
    assert_eq!(counters.comparisons, 10);

    #[cfg(not(feature = "skip_self_swap"))]
    assert_eq!(counters.swaps, 4);

    #[cfg(feature = "skip_self_swap")]
    assert_eq!(counters.swaps, 2);
}

#[test]
fn selection_sort_comparisons_are_quadratic() {
    let mut rng = patterns::seeded_rng(7);
    for variant in Variant::ALL {
        for n in [0_u64, 1, 2, 3, 10, 64, 257] {
            let mut v = patterns::generate(&mut rng, variant, n as i64).unwrap();
            let counters = counted(selection_sort::sort, &mut v);

            assert_eq!(counters.comparisons, n * n.saturating_sub(1) / 2);
        }
    }
}

#[test]
#[cfg(not(feature = "skip_self_swap"))]
fn selection_sort_swaps_once_per_position() {
    let mut v: Vec<i64> = (0..50).collect();
    let counters = counted(selection_sort::sort, &mut v);

    assert_eq!(counters.swaps, 49);
}

#[test]
fn tiny_inputs_do_not_swap() {
    for sort in [selection_sort::sort::<i64>, quicksort_hoare::sort::<i64>] {
        let empty = counted(sort, &mut []);
        assert_eq!(empty, RunCounters::default());

        let single = counted(sort, &mut [9]);
        assert_eq!(single.swaps, 0);
        assert_eq!(single.comparisons, 0);
    }
}

#[test]
fn quicksort_known_counts() {
    let cases: [(&[i64], u64, u64); 6] = [
        (&[5, 4, 3, 2, 1], 12, 5),
        (&[1, 2, 3, 4, 5], 12, 3),
        (&[2, 1], 2, 1),
        (&[1, 2], 3, 1),
        (&[3, 3, 3], 4, 2),
        (&[7, 7], 2, 1),
    ];

    for (input, comparisons, swaps) in cases {
        let mut v = input.to_vec();
        let counters = counted(quicksort_hoare::sort, &mut v);

        let mut expected = input.to_vec();
        expected.sort();
        assert_eq!(v, expected);
        assert_eq!(counters.comparisons, comparisons, "comparisons for {input:?}");
        assert_eq!(counters.swaps, swaps, "swaps for {input:?}");
    }
}

#[test]
fn quicksort_terminates_on_large_descending_input() {
    let mut v: Vec<i64> = (0..200_000).rev().collect();
    let counters = counted(quicksort_hoare::sort, &mut v);

    assert!(v.windows(2).all(|w| w[0] <= w[1]));
    assert!(counters.comparisons > 0);
}

#[test]
fn quicksort_handles_sawtooth_input() {
    let mut v: Vec<i64> = (0..5_000).map(|i| i % 97).collect();
    let original = v.clone();
    counted(quicksort_hoare::sort, &mut v);

    assert!(sort_tally_rs::verify::verify(&original, &v));
}
