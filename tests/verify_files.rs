//! End-to-end container verification tests
//!
//! Scenarios:
//! - A container of valid records verifies completely.
//! - A corrupted payload halts the run at the failing record; records
//!   after it are never examined.
//! - A truncated final record is a structural error, not a verification
//!   attempt against a short buffer.
//! - A missing file fails with the open error, distinct from corruption.

use intact::checksum::compute_crc32;
use intact::cli::{self, Cli};
use intact::verify::{verify_file, Record};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn pseudo_random_bytes(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut data = vec![0u8; len];
    rng.fill_bytes(&mut data);
    data
}

fn checked_record(tag: &str, payload: Vec<u8>) -> Record {
    let crc = compute_crc32(&payload, 0);
    Record::new(tag, crc, vec![(0, 8), (0, 8)], payload)
}

fn write_container(dir: &TempDir, name: &str, records: &[Record]) -> PathBuf {
    let path = dir.path().join(name);
    let mut bytes = Vec::new();
    for record in records {
        bytes.extend_from_slice(&record.encode());
    }
    fs::write(&path, bytes).unwrap();
    path
}

// =============================================================================
// Passing containers
// =============================================================================

#[test]
fn test_valid_container_verifies_completely() {
    let dir = TempDir::new().unwrap();
    let records = vec![
        checked_record("alpha", pseudo_random_bytes(4096, 1)),
        checked_record("beta", pseudo_random_bytes(100_000, 2)),
        checked_record("gamma", vec![]),
    ];
    let path = write_container(&dir, "valid.bin", &records);

    let report = verify_file(&path).unwrap();
    assert_eq!(report.records, 3);
    assert_eq!(report.payload_bytes, 4096 + 100_000);
}

#[test]
fn test_ten_megabyte_payload_verifies() {
    let dir = TempDir::new().unwrap();
    let payload = pseudo_random_bytes(10 * 1024 * 1024, 3);
    let records = vec![checked_record("bulk", payload)];
    let path = write_container(&dir, "bulk.bin", &records);

    let report = verify_file(&path).unwrap();
    assert_eq!(report.records, 1);
    assert_eq!(report.payload_bytes, 10 * 1024 * 1024);
}

// =============================================================================
// Mismatch halts the run
// =============================================================================

#[test]
fn test_flipped_byte_halts_at_failing_record() {
    let dir = TempDir::new().unwrap();

    let good = checked_record("a", pseudo_random_bytes(10 * 1024 * 1024, 4));
    let mut bad = checked_record("b", pseudo_random_bytes(65_536, 5));
    bad.payload[0] ^= 0x01;
    // Record C is structurally invalid: if verification ever got past B,
    // this would surface as a truncation error instead of a mismatch.
    let mut never_reached = checked_record("c", vec![6; 1024]).encode();
    never_reached.truncate(never_reached.len() - 100);

    let path = dir.path().join("mixed.bin");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&good.encode());
    bytes.extend_from_slice(&bad.encode());
    bytes.extend_from_slice(&never_reached);
    fs::write(&path, bytes).unwrap();

    let err = verify_file(&path).unwrap_err();
    assert_eq!(err.code().code(), "INTACT_CHECKSUM_MISMATCH");
    assert_eq!(err.exit_code(), 2);
    assert!(err.message().contains("'b'"));
}

#[test]
fn test_corrupted_stored_checksum_detected() {
    let dir = TempDir::new().unwrap();
    let mut record = checked_record("tampered", pseudo_random_bytes(2048, 6));
    record.stored_crc32 ^= 0xFFFF_FFFF;
    let path = write_container(&dir, "tampered.bin", std::slice::from_ref(&record));

    let err = verify_file(&path).unwrap_err();
    assert_eq!(err.code().code(), "INTACT_CHECKSUM_MISMATCH");
}

// =============================================================================
// Structural errors
// =============================================================================

#[test]
fn test_truncated_payload_is_structural_not_mismatch() {
    let dir = TempDir::new().unwrap();
    let record = checked_record("cut", pseudo_random_bytes(5000, 7));
    let path = write_container(&dir, "cut.bin", std::slice::from_ref(&record));

    // Remove the last 10 bytes of the declared payload.
    let file = fs::OpenOptions::new().write(true).open(&path).unwrap();
    let len = file.metadata().unwrap().len();
    file.set_len(len - 10).unwrap();
    drop(file);

    let err = verify_file(&path).unwrap_err();
    assert_eq!(err.code().code(), "INTACT_TRUNCATED_RECORD");
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_truncation_after_valid_records_still_fatal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("tail.bin");
    let mut bytes = Vec::new();
    bytes.extend_from_slice(&checked_record("ok1", vec![1; 512]).encode());
    bytes.extend_from_slice(&checked_record("ok2", vec![2; 512]).encode());
    let mut last = checked_record("cut", vec![3; 512]).encode();
    last.truncate(last.len() - 10);
    bytes.extend_from_slice(&last);
    fs::write(&path, bytes).unwrap();

    let err = verify_file(&path).unwrap_err();
    assert_eq!(err.code().code(), "INTACT_TRUNCATED_RECORD");
}

#[test]
fn test_missing_file_is_open_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.bin");

    let err = verify_file(&path).unwrap_err();
    assert_eq!(err.code().code(), "INTACT_FILE_OPEN_FAILED");
    assert_eq!(err.exit_code(), 1);
}

// =============================================================================
// Multi-file runs through the CLI layer
// =============================================================================

#[test]
fn test_all_files_verified_in_sequence() {
    let dir = TempDir::new().unwrap();
    let first = write_container(
        &dir,
        "first.bin",
        &[checked_record("f1", vec![1; 1000])],
    );
    let second = write_container(
        &dir,
        "second.bin",
        &[checked_record("s1", vec![2; 1000])],
    );

    let cli = Cli {
        files: vec![first, second],
        threads: None,
    };
    assert!(cli::execute(&cli).is_ok());
}

#[test]
fn test_failure_in_first_file_stops_before_second() {
    let dir = TempDir::new().unwrap();
    let mut bad = checked_record("bad", vec![1; 1000]);
    bad.payload[500] ^= 0x80;
    let first = write_container(&dir, "first.bin", std::slice::from_ref(&bad));
    // The second file is missing; reaching it would change the error code.
    let second = dir.path().join("absent.bin");

    let cli = Cli {
        files: vec![first, second],
        threads: None,
    };
    let err = cli::execute(&cli).unwrap_err();
    assert_eq!(err.code().code(), "INTACT_CHECKSUM_MISMATCH");
}
