use std::fmt;

use crate::bench::Algorithm;
use crate::counters::RunCounters;
use crate::patterns::Variant;

const SEPARATOR_WIDTH: usize = 81;

/// Outcome of sorting one generated array with one algorithm.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunResult {
    variant: Variant,
    algorithm: Algorithm,
    comparisons: u64,
    swaps: u64,
    is_valid: bool,
}

impl RunResult {
    pub fn new(
        variant: Variant,
        algorithm: Algorithm,
        counters: RunCounters,
        is_valid: bool,
    ) -> Self {
        Self {
            variant,
            algorithm,
            comparisons: counters.comparisons,
            swaps: counters.swaps,
            is_valid,
        }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }
}

/// All results of one benchmark pass, rendered as the fixed-width table by [`fmt::Display`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Report {
    results: Vec<RunResult>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, result: RunResult) {
        self.results.push(result);
    }

    pub fn results(&self) -> &[RunResult] {
        &self.results
    }

    /// Results of `algorithm`, in the order they were recorded.
    pub fn results_for(&self, algorithm: Algorithm) -> impl Iterator<Item = &RunResult> + '_ {
        self.results
            .iter()
            .filter(move |result| result.algorithm == algorithm)
    }

    pub fn get(&self, algorithm: Algorithm, variant: Variant) -> Option<&RunResult> {
        self.results_for(algorithm)
            .find(|result| result.variant == variant)
    }

    pub fn all_valid(&self) -> bool {
        self.results.iter().all(RunResult::is_valid)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = "-".repeat(SEPARATOR_WIDTH);

        for algorithm in Algorithm::ALL {
            writeln!(f, "{algorithm} ")?;
            writeln!(f, "{separator}")?;
            for result in self.results_for(algorithm) {
                let index = result.variant.index();
                writeln!(
                    f,
                    "| {index}) Array №{index} | {:>8} comparisons | {:>6} swaps | {:>1} - sorting result |",
                    result.comparisons,
                    result.swaps,
                    u8::from(result.is_valid),
                )?;
            }
            writeln!(f, "{separator}")?;
        }

        Ok(())
    }
}
