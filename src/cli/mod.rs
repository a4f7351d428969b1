//! CLI module
//!
//! Parses arguments, configures the worker pool, and drives per-file
//! verification. Each named file is processed independently and
//! completely before the next begins; the first failure halts the run.

mod args;

pub use args::Cli;

use crate::observability::Logger;
use crate::verify::{self, FileReport, VerifyError, VerifyResult};

/// Parse arguments and run verification over every named file.
pub fn run() -> VerifyResult<()> {
    let cli = Cli::parse_args();
    execute(&cli)
}

/// Run verification for an already-parsed argument set.
pub fn execute(cli: &Cli) -> VerifyResult<()> {
    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .map_err(|e| {
                VerifyError::config(format!(
                    "cannot configure {} worker threads: {}",
                    threads, e
                ))
            })?;
    }

    let mut run = FileReport::default();
    for path in &cli.files {
        let report = verify::verify_file(path)?;
        run.records += report.records;
        run.payload_bytes += report.payload_bytes;
    }

    Logger::info(
        "RUN_COMPLETE",
        &[
            ("files", cli.files.len().to_string().as_str()),
            ("payload_bytes", run.payload_bytes.to_string().as_str()),
            ("records", run.records.to_string().as_str()),
        ],
    );
    Ok(())
}
