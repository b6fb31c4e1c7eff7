use std::io;
use std::process::ExitCode;

use sort_tally_rs::{bench, input, patterns, BenchError};

fn run() -> Result<(), BenchError> {
    let n = input::read_len(io::stdin().lock())?;
    let report = bench::run_seeded(patterns::random_init_seed(), n)?;

    print!("{report}");

    Ok(())
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the table.
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error occurred: {err}");
            ExitCode::FAILURE
        }
    }
}
