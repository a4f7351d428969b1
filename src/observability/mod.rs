//! Observability subsystem
//!
//! Structured JSON logging for verdict and diagnostic lines: one JSON
//! object per line, deterministic key ordering, synchronous writes.
//! Verdict lines (file announcements, per-record results) go to stdout;
//! diagnostics go to stderr. Logging is read-only with respect to
//! verification: it never influences a verdict or an exit status.

mod logger;

pub use logger::{Logger, Severity};
