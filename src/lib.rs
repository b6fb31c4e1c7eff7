use crate::counters::RunCounters;

pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T], counters: &mut RunCounters)
    where
        T: Ord;
}

/// Implements [`Sort`] as `SortImpl` for the module-level `sort` function.
macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl $crate::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            fn sort<T>(arr: &mut [T], counters: &mut $crate::counters::RunCounters)
            where
                T: Ord,
            {
                sort(arr, counters);
            }
        }
    };
}

pub mod bench;
pub mod counters;
pub mod error;
pub mod input;
pub mod patterns;
pub mod report;
pub mod unstable;
pub mod verify;

pub use error::BenchError;
