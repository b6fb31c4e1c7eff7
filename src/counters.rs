use std::cmp::Ordering;

/// Comparison and swap tallies for a single sort run.
///
/// Every comparison and exchange a sort performs has to go through [`RunCounters::compare`] and
/// [`RunCounters::exchange`], that way the counts are exact. Create a fresh instance (or
/// [`reset`](RunCounters::reset)) before each run, runs must never share one.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunCounters {
    pub comparisons: u64,
    pub swaps: u64,
}

impl RunCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Orders `a` relative to `b`, the sign of `a - b` without the overflow.
    #[inline]
    pub fn compare<T: Ord>(&mut self, a: &T, b: &T) -> Ordering {
        self.comparisons += 1;
        a.cmp(b)
    }

    /// Shorthand for `compare(a, b) == Ordering::Less`, still counted as one comparison.
    #[inline]
    pub fn is_less<T: Ord>(&mut self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Swaps `v[a]` and `v[b]`. Counted even if `a == b`.
    #[inline]
    pub fn exchange<T>(&mut self, v: &mut [T], a: usize, b: usize) {
        self.swaps += 1;
        v.swap(a, b);
    }
}
