//! Parallel CRC32 computation over arbitrary-length buffers
//!
//! Per CHECKSUM.md:
//! - Buffers longer than STEP are processed as an iterative loop over
//!   STEP-sized chunks, each chunk's result seeding the next (C4).
//! - Within one bounded pass the buffer is cut into fixed sub-blocks whose
//!   CRC32s are computed concurrently, then folded left to right with the
//!   combine operation (C1, C2).
//! - The empty buffer returns the starting state unchanged (C3).

use crc32fast::Hasher;
use rayon::prelude::*;

use super::combine::combine;

/// Maximum buffer length trusted to a single bounded pass.
pub const STEP: u64 = 1 << 30;

/// Unit of parallel checksum work within one bounded pass.
pub const SUB_BLOCK_SIZE: usize = 512 * 1024;

/// Computes the CRC32 of `data` continued from accumulator state `start`.
///
/// The result is bit-identical to a strictly sequential single-threaded
/// pass over `data`, for any buffer length and any worker-thread count.
pub fn compute_crc32(data: &[u8], start: u32) -> u32 {
    compute_with_step(data, start, STEP)
}

/// Verifies `data` against an expected CRC32 value.
pub fn verify_crc32(data: &[u8], expected: u32) -> bool {
    compute_crc32(data, 0) == expected
}

/// STEP-splitting loop, parameterized for tests.
///
/// Invariant: `step` is at least one sub-block, so the bounded pass below
/// never sees an empty slice.
fn compute_with_step(data: &[u8], start: u32, step: u64) -> u32 {
    if data.is_empty() {
        return start;
    }

    let step = step.max(SUB_BLOCK_SIZE as u64) as usize;
    let mut state = start;
    let mut rest = data;
    while rest.len() > step {
        let (chunk, tail) = rest.split_at(step);
        state = bounded_crc32(chunk, state);
        rest = tail;
    }
    bounded_crc32(rest, state)
}

/// One bounded pass: parallel sub-block hashing plus sequential reduction.
///
/// `data` is non-empty and at most STEP bytes. Sub-block 0 is seeded with
/// `start`; every other sub-block is seeded with 0, since a starting state
/// cannot be factored out of a block result except through the combine
/// step. The fold runs only after every sub-block task has completed, and
/// each combine is parameterized by that sub-block's exact byte length.
fn bounded_crc32(data: &[u8], start: u32) -> u32 {
    if data.len() <= SUB_BLOCK_SIZE {
        return crc32_block(data, start);
    }

    let partials: Vec<(u32, u64)> = data
        .par_chunks(SUB_BLOCK_SIZE)
        .enumerate()
        .map(|(index, block)| {
            let seed = if index == 0 { start } else { 0 };
            (crc32_block(block, seed), block.len() as u64)
        })
        .collect();

    let mut parts = partials.into_iter();
    let (mut state, _) = parts.next().unwrap_or((start, 0));
    for (block_crc, block_len) in parts {
        state = combine(state, block_crc, block_len);
    }
    state
}

/// Bounded single-block primitive.
fn crc32_block(block: &[u8], start: u32) -> u32 {
    let mut hasher = Hasher::new_with_initial(start);
    hasher.update(block);
    hasher.finalize()
}
