//! Sequential record reader with strict truncation detection
//!
//! Per FORMAT.md:
//! - End of stream exactly at a record boundary is the normal end of the
//!   container, not an error.
//! - End of stream anywhere else is a structural error; there is no
//!   resynchronization and no skipping to a plausible next record.
//! - Every declared size is validated against the bytes remaining in the
//!   file before allocation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::errors::{VerifyError, VerifyResult};
use super::record::Record;

/// Reader for sequential record traversal of one container file.
#[derive(Debug)]
pub struct RecordReader {
    /// Path to the container file, for error context
    path: PathBuf,
    /// Buffered reader for efficient sequential reads
    reader: BufReader<File>,
    /// Current byte offset in the file
    offset: u64,
    /// Total file size
    file_size: u64,
}

impl RecordReader {
    /// Opens a container file for reading.
    ///
    /// # Errors
    ///
    /// Returns `INTACT_FILE_OPEN_FAILED` if the file cannot be opened or
    /// its size cannot be determined.
    pub fn open(path: &Path) -> VerifyResult<Self> {
        let file = File::open(path).map_err(|e| VerifyError::open_failed(path, e))?;
        let metadata = file
            .metadata()
            .map_err(|e| VerifyError::open_failed(path, e))?;

        Ok(Self {
            path: path.to_path_buf(),
            reader: BufReader::new(file),
            offset: 0,
            file_size: metadata.len(),
        })
    }

    /// Returns the current byte offset in the file.
    pub fn offset(&self) -> u64 {
        self.offset
    }

    /// Returns the bytes remaining between the cursor and end of file.
    fn remaining(&self) -> u64 {
        self.file_size - self.offset
    }

    /// Reads the next record.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(record))` if a record was successfully read
    /// - `Ok(None)` if end of file was reached cleanly at a record boundary
    /// - `Err(VerifyError)` on any truncation or read failure
    pub fn read_next(&mut self) -> VerifyResult<Option<Record>> {
        if self.offset >= self.file_size {
            return Ok(None);
        }

        let tag_length = self.read_u32("tag length")?;
        let tag_bytes = self.read_bytes(u64::from(tag_length), "tag")?;
        let stored_crc32 = self.read_u32("stored checksum")?;
        let num_dims = self.read_u32("dimension count")?;

        // 2 i32 values per dimension; bound the whole descriptor before
        // looping so a garbage count fails at the header, not mid-read.
        let shape_len = u64::from(num_dims) * 8;
        if shape_len > self.remaining() {
            return Err(VerifyError::truncated(
                &self.path,
                self.offset,
                format!(
                    "shape descriptor: need {} bytes for {} dimensions, {} remain",
                    shape_len,
                    num_dims,
                    self.remaining()
                ),
            ));
        }
        let mut shape = Vec::with_capacity(num_dims as usize);
        for _ in 0..num_dims {
            let lo = self.read_i32("shape descriptor")?;
            let hi = self.read_i32("shape descriptor")?;
            shape.push((lo, hi));
        }

        let payload_length = self.read_u64("payload length")?;
        let payload = self.read_bytes(payload_length, "payload")?;

        Ok(Some(Record {
            tag: String::from_utf8_lossy(&tag_bytes).into_owned(),
            stored_crc32,
            shape,
            payload,
        }))
    }

    fn read_u32(&mut self, what: &str) -> VerifyResult<u32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf, what)?;
        Ok(u32::from_ne_bytes(buf))
    }

    fn read_i32(&mut self, what: &str) -> VerifyResult<i32> {
        let mut buf = [0u8; 4];
        self.fill(&mut buf, what)?;
        Ok(i32::from_ne_bytes(buf))
    }

    fn read_u64(&mut self, what: &str) -> VerifyResult<u64> {
        let mut buf = [0u8; 8];
        self.fill(&mut buf, what)?;
        Ok(u64::from_ne_bytes(buf))
    }

    /// Reads a declared-length field, validating the length against the
    /// remaining file size before allocating.
    fn read_bytes(&mut self, len: u64, what: &str) -> VerifyResult<Vec<u8>> {
        if len > self.remaining() {
            return Err(VerifyError::truncated(
                &self.path,
                self.offset,
                format!("{}: need {} bytes, {} remain", what, len, self.remaining()),
            ));
        }
        let mut buf = vec![0u8; len as usize];
        self.fill(&mut buf, what)?;
        Ok(buf)
    }

    fn fill(&mut self, buf: &mut [u8], what: &str) -> VerifyResult<()> {
        if buf.len() as u64 > self.remaining() {
            return Err(VerifyError::truncated(
                &self.path,
                self.offset,
                format!(
                    "{}: need {} bytes, {} remain",
                    what,
                    buf.len(),
                    self.remaining()
                ),
            ));
        }
        self.reader.read_exact(buf).map_err(|e| {
            VerifyError::truncated(&self.path, self.offset, format!("{}: {}", what, e))
        })?;
        self.offset += buf.len() as u64;
        Ok(())
    }
}
