// O(N^2) scan for the minimum, one exchange per position.
pub mod selection_sort;

// Recursive-style quicksort with middle pivot and Hoare partition.
pub mod quicksort_hoare;
