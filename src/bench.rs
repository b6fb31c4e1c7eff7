use std::fmt;

use rand::Rng;
use tracing::{debug, info, warn};

use crate::counters::RunCounters;
use crate::error::BenchError;
use crate::patterns::{self, Variant};
use crate::report::{Report, RunResult};
use crate::unstable::{quicksort_hoare, selection_sort};
use crate::verify;
use crate::Sort;

/// The sorts compared by the benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Selection,
    Quick,
}

impl Algorithm {
    /// All algorithms in report order.
    pub const ALL: [Algorithm; 2] = [Algorithm::Selection, Algorithm::Quick];

    /// Name of the backing [`Sort`] implementation.
    pub fn sort_name(self) -> String {
        match self {
            Algorithm::Selection => <selection_sort::SortImpl as Sort>::name(),
            Algorithm::Quick => <quicksort_hoare::SortImpl as Sort>::name(),
        }
    }

    pub fn sort<T: Ord>(self, v: &mut [T], counters: &mut RunCounters) {
        match self {
            Algorithm::Selection => <selection_sort::SortImpl as Sort>::sort(v, counters),
            Algorithm::Quick => <quicksort_hoare::SortImpl as Sort>::sort(v, counters),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Selection => f.write_str("Selection sort"),
            Algorithm::Quick => f.write_str("Quick sort"),
        }
    }
}

/// Runs the full benchmark for arrays of length `n`, seeding the generator with `seed`.
pub fn run_seeded(seed: u64, n: i64) -> Result<Report, BenchError> {
    info!(seed, n, "generating arrays");

    run(&mut patterns::seeded_rng(seed), n)
}

/// Generates one array per [`Variant`] from `rng`, then sorts a copy of each with every
/// [`Algorithm`] and verifies the outcome.
pub fn run<R: Rng + ?Sized>(rng: &mut R, n: i64) -> Result<Report, BenchError> {
    let mut originals = Vec::with_capacity(Variant::ALL.len());
    for variant in Variant::ALL {
        originals.push((variant, patterns::generate(rng, variant, n)?));
    }

    let mut report = Report::new();
    for algorithm in Algorithm::ALL {
        for (variant, original) in &originals {
            report.record(run_one(algorithm, *variant, original)?);
        }
    }

    Ok(report)
}

/// Sorts a copy of `original` with fresh counters and verifies it against `original`.
pub fn run_one(
    algorithm: Algorithm,
    variant: Variant,
    original: &[i64],
) -> Result<RunResult, BenchError> {
    let mut sorted = patterns::duplicate(original)?;
    let mut counters = RunCounters::new();

    algorithm.sort(&mut sorted, &mut counters);

    let verdict = verify::check(original, &sorted);
    if let Err(violation) = verdict {
        warn!(
            sort = %algorithm.sort_name(),
            %variant,
            %violation,
            "sorted output failed verification"
        );
    }

    debug!(
        sort = %algorithm.sort_name(),
        %variant,
        len = original.len(),
        comparisons = counters.comparisons,
        swaps = counters.swaps,
        "sort finished"
    );

    Ok(RunResult::new(variant, algorithm, counters, verdict.is_ok()))
}
