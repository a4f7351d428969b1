//! CRC32 combine operation
//!
//! Per CHECKSUM.md: `combine(crc_a, crc_b, len_b)` merges the CRC32 of two
//! adjacent byte ranges into the CRC32 of their concatenation, as if the
//! bytes had been hashed in one contiguous pass. The byte length of the
//! second range parameterizes the merge; the length of the first does not
//! enter into it.

use crc32fast::Hasher;

/// Merges two CRC32 values computed over adjacent byte ranges.
///
/// Given `crc_a = crc(A, s)` and `crc_b = crc(B, 0)`, returns
/// `crc(A ++ B, s)`. Runs in O(log `len_b`) regardless of data size.
pub fn combine(crc_a: u32, crc_b: u32, len_b: u64) -> u32 {
    let mut acc = Hasher::new_with_initial_len(crc_a, 0);
    let trailer = Hasher::new_with_initial_len(crc_b, len_b);
    acc.combine(&trailer);
    acc.finalize()
}
