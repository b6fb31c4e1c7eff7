//! Generic test suite shared by every [`Sort`](sort_tally_rs::Sort) implementation.


// Used by `instantiate_sort_tests!` in the test crates that expand it.
#[doc(hidden)]
pub use paste;
