//! CRC32 checksum engine
//!
//! Per CHECKSUM.md, this subsystem computes the CRC32 (IEEE polynomial) of
//! arbitrary-length byte buffers:
//!
//! - Buffers beyond the bounded primitive's safe limit are split into
//!   STEP-sized chunks processed iteratively, the running state threading
//!   from one chunk into the next.
//! - Within one bounded pass, fixed-size sub-blocks are hashed concurrently
//!   and folded back together with the combine operation.
//! - The numeric result is bit-identical to a sequential single-threaded
//!   pass, for any buffer length and any worker-thread count.
//!
//! Invariants enforced: C1 (determinism), C2 (combine equivalence),
//! C3 (identity on empty input), C4 (step-split equivalence).

mod combine;
mod engine;

pub use combine::combine;
pub use engine::{compute_crc32, verify_crc32, STEP, SUB_BLOCK_SIZE};
