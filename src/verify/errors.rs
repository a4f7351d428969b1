//! Verification error types
//!
//! Per ERRORS.md: every failure is fatal, halts the run, and maps to a
//! distinct process exit status. Error codes:
//! - INTACT_FILE_OPEN_FAILED (exit 1)
//! - INTACT_CONFIG_ERROR (exit 1)
//! - INTACT_CHECKSUM_MISMATCH (exit 2)
//! - INTACT_TRUNCATED_RECORD (exit 3)

use std::fmt;
use std::io;
use std::path::Path;

/// Verification error codes as defined in ERRORS.md
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyErrorCode {
    /// A named file is missing or unreadable
    FileOpenFailed,
    /// Worker-pool configuration failed
    ConfigError,
    /// Computed CRC32 differs from the stored reference
    ChecksumMismatch,
    /// Header or payload read shortfall
    TruncatedRecord,
}

impl VerifyErrorCode {
    /// Returns the string code as defined in ERRORS.md
    pub fn code(&self) -> &'static str {
        match self {
            VerifyErrorCode::FileOpenFailed => "INTACT_FILE_OPEN_FAILED",
            VerifyErrorCode::ConfigError => "INTACT_CONFIG_ERROR",
            VerifyErrorCode::ChecksumMismatch => "INTACT_CHECKSUM_MISMATCH",
            VerifyErrorCode::TruncatedRecord => "INTACT_TRUNCATED_RECORD",
        }
    }

    /// Returns the process exit status for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            VerifyErrorCode::FileOpenFailed => 1,
            VerifyErrorCode::ConfigError => 1,
            VerifyErrorCode::ChecksumMismatch => 2,
            VerifyErrorCode::TruncatedRecord => 3,
        }
    }
}

impl fmt::Display for VerifyErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Verification error with full context
#[derive(Debug)]
pub struct VerifyError {
    /// Error code
    code: VerifyErrorCode,
    /// Human-readable message
    message: String,
    /// Optional details about the error context
    details: Option<String>,
    /// Underlying IO error if applicable
    source: Option<io::Error>,
}

impl VerifyError {
    /// Create a file-open error
    pub fn open_failed(path: &Path, source: io::Error) -> Self {
        Self {
            code: VerifyErrorCode::FileOpenFailed,
            message: format!("cannot open {}", path.display()),
            details: None,
            source: Some(source),
        }
    }

    /// Create a worker-pool configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self {
            code: VerifyErrorCode::ConfigError,
            message: message.into(),
            details: None,
            source: None,
        }
    }

    /// Create a checksum mismatch error
    pub fn checksum_mismatch(path: &Path, tag: &str, stored: u32, computed: u32) -> Self {
        Self {
            code: VerifyErrorCode::ChecksumMismatch,
            message: format!(
                "record '{}' in {}: stored crc32 {:08x}, computed {:08x}",
                tag,
                path.display(),
                stored,
                computed
            ),
            details: None,
            source: None,
        }
    }

    /// Create a truncation error with byte-offset context
    pub fn truncated(path: &Path, offset: u64, reason: impl Into<String>) -> Self {
        Self {
            code: VerifyErrorCode::TruncatedRecord,
            message: format!("{}: {}", path.display(), reason.into()),
            details: Some(format!("byte_offset: {}", offset)),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> VerifyErrorCode {
        self.code
    }

    /// Returns the process exit status
    pub fn exit_code(&self) -> i32 {
        self.code.exit_code()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for VerifyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref details) = self.details {
            write!(f, " ({})", details)?;
        }
        Ok(())
    }
}

impl std::error::Error for VerifyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for verification operations
pub type VerifyResult<T> = Result<T, VerifyError>;
