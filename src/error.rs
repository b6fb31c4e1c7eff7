use thiserror::Error;

/// Errors that abort a benchmark run.
///
/// A failed verification is not an error, it is reported in the results.
#[derive(Debug, Error)]
pub enum BenchError {
    #[error("unable to read parameter n: {0}")]
    InputParse(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("failed to allocate an array of {len} elements")]
    AllocationFailure { len: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
