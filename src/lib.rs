//! intact - A strict, parallel CRC32 integrity checker for
//! record-structured binary files
//!
//! See FORMAT.md for the container layout, CHECKSUM.md for the engine
//! design, and ERRORS.md for the failure taxonomy and exit statuses.

pub mod checksum;
pub mod cli;
pub mod observability;
pub mod verify;
