//! Per-record verification loop
//!
//! Per ERRORS.md zero-tolerance policy:
//! - One verdict line per record; a mismatch halts the entire run.
//! - Later records (and later files) are not examined after a failure.
//!
//! The loop is single-threaded and strictly sequential; only sub-block
//! hashing inside the checksum engine runs concurrently.

use std::path::Path;

use crate::checksum::compute_crc32;
use crate::observability::{Logger, Severity};

use super::errors::{VerifyError, VerifyResult};
use super::reader::RecordReader;

/// Counts accumulated over one verified container file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileReport {
    /// Records verified
    pub records: u64,
    /// Payload bytes checksummed
    pub payload_bytes: u64,
}

/// Verifies every record in one container file.
///
/// Emits one announcement line, one verdict line per record, and one
/// completion line, all on stdout.
///
/// # Errors
///
/// - `INTACT_FILE_OPEN_FAILED` if the file cannot be opened
/// - `INTACT_TRUNCATED_RECORD` on any structural read failure
/// - `INTACT_CHECKSUM_MISMATCH` on the first record whose computed CRC32
///   differs from its stored reference
pub fn verify_file(path: &Path) -> VerifyResult<FileReport> {
    let path_display = path.display().to_string();
    Logger::info("FILE_CHECK_START", &[("path", path_display.as_str())]);

    let mut reader = RecordReader::open(path)?;
    let mut report = FileReport::default();

    while let Some(record) = reader.read_next()? {
        let computed = compute_crc32(&record.payload, 0);
        let stored_hex = format!("{:08x}", record.stored_crc32);
        let dims = record.num_dims().to_string();
        let size = human_bytes(record.payload_len());

        if computed != record.stored_crc32 {
            // The verdict stream is stdout even for the failing record; the
            // fatal diagnostic itself goes to stderr when the run exits.
            Logger::verdict(
                Severity::Error,
                "RECORD_CORRUPT",
                &[
                    ("computed", format!("{:08x}", computed).as_str()),
                    ("crc32", stored_hex.as_str()),
                    ("dims", dims.as_str()),
                    ("size", size.as_str()),
                    ("tag", record.tag.as_str()),
                ],
            );
            return Err(VerifyError::checksum_mismatch(
                path,
                &record.tag,
                record.stored_crc32,
                computed,
            ));
        }

        Logger::info(
            "RECORD_OK",
            &[
                ("crc32", stored_hex.as_str()),
                ("dims", dims.as_str()),
                ("size", size.as_str()),
                ("tag", record.tag.as_str()),
            ],
        );
        report.records += 1;
        report.payload_bytes += record.payload_len();
    }

    Logger::info(
        "FILE_CHECK_COMPLETE",
        &[
            ("path", path_display.as_str()),
            ("records", report.records.to_string().as_str()),
            ("payload_bytes", report.payload_bytes.to_string().as_str()),
        ],
    );
    Ok(report)
}

/// Renders a byte count in decimal units for verdict lines.
fn human_bytes(n: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];
    if n < 1000 {
        return format!("{} B", n);
    }
    let mut value = n as f64;
    let mut unit = 0;
    value /= 1000.0;
    while value >= 1000.0 && unit < UNITS.len() - 1 {
        value /= 1000.0;
        unit += 1;
    }
    format!("{:.2} {}", value, UNITS[unit])
}
