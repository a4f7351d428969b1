//! intact CLI entry point
//!
//! This is a minimal entrypoint that:
//! 1. Parses CLI arguments (via cli::run)
//! 2. Drives per-file verification (via cli::run)
//! 3. Emits the fatal diagnostic through the structured logger
//! 4. Exits with the status ERRORS.md assigns to the failure
//!
//! All logic is delegated to the CLI module.

use intact::cli;
use intact::observability::Logger;

fn main() {
    if let Err(e) = cli::run() {
        let diagnostic = e.to_string();
        Logger::fatal("RUN_ABORTED", &[("error", diagnostic.as_str())]);
        std::process::exit(e.exit_code());
    }
}
