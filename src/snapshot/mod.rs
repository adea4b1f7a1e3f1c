//! Snapshot Module
//!
//! Whole-inventory persistence to a single versioned binary file.
//!
//! ## File Format
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │ Header (22 bytes)                                               │
//! │   Magic: "STKP" (4) | Version: u16 (2) | Count: u64 (8)         │
//! │   NextId: u64 (8)                                               │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ Body (variable)                                                 │
//! │   [RecordLen: u32][bincode(ProductRecord)]                      │
//! │   ... repeated Count times ...                                  │
//! ├─────────────────────────────────────────────────────────────────┤
//! │ Footer (4 bytes)                                                │
//! │   CRC: u32 (4) over Body, then Version | Count | NextId         │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! All integers are little-endian. The checksum covers the header fields
//! after the magic, so a damaged `Count` or `NextId` is caught like a damaged
//! record. `NextId` is the owning sequence's next
//! value at save time, so ids keep increasing across a save/load cycle.

mod reader;
mod writer;

use std::path::PathBuf;

pub use reader::SnapshotReader;
pub use writer::SnapshotWriter;

// =============================================================================
// Shared Constants (used by writer and reader)
// =============================================================================

/// Magic bytes identifying a Stockpile snapshot file
pub(crate) const MAGIC: &[u8; 4] = b"STKP";

/// Current snapshot format version
pub(crate) const VERSION: u16 = 1;

/// Header size: Magic (4) + Version (2) + Count (8) + NextId (8) = 22 bytes
pub(crate) const HEADER_SIZE: usize = 22;

/// Offset of the Count field (right after magic + version)
pub(crate) const COUNT_OFFSET: u64 = 6;

/// Start of the checksummed header fields (right after magic)
pub(crate) const CHECKED_HEADER_OFFSET: usize = 4;

/// Footer size: CRC (4)
pub(crate) const FOOTER_SIZE: usize = 4;

/// Largest encoded record accepted (1 MB)
pub(crate) const MAX_RECORD_SIZE: usize = 1024 * 1024;

// =============================================================================
// Snapshot Metadata
// =============================================================================

/// What a finished snapshot write produced
#[derive(Debug, Clone)]
pub struct SnapshotInfo {
    /// Path to the snapshot file
    pub path: PathBuf,
    /// Number of product records written
    pub record_count: u64,
    /// Persisted next value of the id sequence
    pub next_id: u64,
    /// File size in bytes
    pub file_size: u64,
}
