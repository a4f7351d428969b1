//! CLI argument definitions using clap
//!
//! Usage:
//! - intact <FILE>...
//! - intact --threads 4 <FILE>...

use clap::Parser;
use std::path::PathBuf;

/// intact - A strict, parallel CRC32 integrity checker for
/// record-structured binary files
#[derive(Parser, Debug)]
#[command(name = "intact")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Container files to verify, each processed completely before the next
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Worker threads for checksum computation (defaults to all cores)
    #[arg(long)]
    pub threads: Option<usize>,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
