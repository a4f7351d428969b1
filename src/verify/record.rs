//! Container record types
//!
//! Per FORMAT.md, each record contains:
//! - Tag length (u32) and tag bytes (not NUL-terminated on disk)
//! - Reference CRC32 (u32)
//! - Dimension count (u32) and 2*num_dims i32 shape values
//! - Payload length (u64) and payload bytes
//!
//! All integer fields are native byte order. The payload length field is
//! authoritative; the shape descriptor is descriptive metadata and is not
//! cross-checked against it.

/// One self-describing record from a container file.
///
/// Fully owned; dropped after its payload has been verified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Identifying tag, rendered from the on-disk bytes
    pub tag: String,
    /// Reference CRC32 stored alongside the payload
    pub stored_crc32: u32,
    /// Shape descriptor, consumed for header framing only
    pub shape: Vec<(i32, i32)>,
    /// Payload bytes the reference CRC32 covers
    pub payload: Vec<u8>,
}

impl Record {
    /// Create a record.
    pub fn new(
        tag: impl Into<String>,
        stored_crc32: u32,
        shape: Vec<(i32, i32)>,
        payload: Vec<u8>,
    ) -> Self {
        Self {
            tag: tag.into(),
            stored_crc32,
            shape,
            payload,
        }
    }

    /// Number of dimensions in the shape descriptor.
    pub fn num_dims(&self) -> u32 {
        self.shape.len() as u32
    }

    /// Payload length in bytes.
    pub fn payload_len(&self) -> u64 {
        self.payload.len() as u64
    }

    /// Serialize to the on-disk layout per FORMAT.md.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(24 + self.tag.len() + 8 * self.shape.len() + self.payload.len());
        out.extend_from_slice(&(self.tag.len() as u32).to_ne_bytes());
        out.extend_from_slice(self.tag.as_bytes());
        out.extend_from_slice(&self.stored_crc32.to_ne_bytes());
        out.extend_from_slice(&self.num_dims().to_ne_bytes());
        for (lo, hi) in &self.shape {
            out.extend_from_slice(&lo.to_ne_bytes());
            out.extend_from_slice(&hi.to_ne_bytes());
        }
        out.extend_from_slice(&self.payload_len().to_ne_bytes());
        out.extend_from_slice(&self.payload);
        out
    }
}
