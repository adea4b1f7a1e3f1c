//! Snapshot Reader
//!
//! Loads a snapshot file into memory and validates it before any record is
//! handed out.

use std::fs;
use std::path::Path;

use bytes::{Buf, Bytes};

use crate::error::{Result, StockpileError};
use crate::product::ProductRecord;

use super::{CHECKED_HEADER_OFFSET, FOOTER_SIZE, HEADER_SIZE, MAGIC, MAX_RECORD_SIZE, VERSION};

/// Reader for snapshot files
///
/// `open` checks magic, version and the CRC over body and header counters; `into_records` checks record
/// framing and decodes every record.
#[derive(Debug)]
pub struct SnapshotReader {
    /// Body bytes (between header and footer)
    body: Bytes,
    /// Record count from the header
    record_count: u64,
    /// Persisted next id from the header
    next_id: u64,
}

impl SnapshotReader {
    /// Open and validate a snapshot file
    pub fn open(path: &Path) -> Result<Self> {
        let data = Bytes::from(fs::read(path)?);

        if data.len() < HEADER_SIZE + FOOTER_SIZE {
            return Err(StockpileError::SnapshotCorruption(format!(
                "File too short: {} bytes (minimum {})",
                data.len(),
                HEADER_SIZE + FOOTER_SIZE
            )));
        }

        // Header
        let mut header = data.slice(..HEADER_SIZE);
        let magic = header.split_to(MAGIC.len());
        if &magic[..] != MAGIC {
            return Err(StockpileError::SnapshotCorruption(format!(
                "Invalid snapshot magic: expected STKP, got {:?}",
                &magic[..]
            )));
        }

        let version = header.get_u16_le();
        if version != VERSION {
            return Err(StockpileError::SnapshotCorruption(format!(
                "Unsupported snapshot version: {}",
                version
            )));
        }

        let record_count = header.get_u64_le();
        let next_id = header.get_u64_le();

        // Footer
        let footer_start = data.len() - FOOTER_SIZE;
        let stored_crc = data.slice(footer_start..).get_u32_le();

        // Body
        let body = data.slice(HEADER_SIZE..footer_start);
        let mut hasher = crc32fast::Hasher::new();
        hasher.update(&body);
        hasher.update(&data[CHECKED_HEADER_OFFSET..HEADER_SIZE]);
        let actual_crc = hasher.finalize();
        if actual_crc != stored_crc {
            return Err(StockpileError::SnapshotCorruption(format!(
                "CRC mismatch: stored {:#010x}, computed {:#010x}",
                stored_crc, actual_crc
            )));
        }

        Ok(Self {
            body,
            record_count,
            next_id,
        })
    }

    /// Decode every record in file order
    pub fn into_records(self) -> Result<Vec<ProductRecord>> {
        let mut body = self.body;

        // Each record needs at least its 4-byte length prefix
        let capacity = (self.record_count as usize).min(body.len() / 4);
        let mut records = Vec::with_capacity(capacity);

        for index in 0..self.record_count {
            if body.remaining() < 4 {
                return Err(StockpileError::SnapshotCorruption(format!(
                    "Record {}: missing length prefix",
                    index
                )));
            }

            let len = body.get_u32_le() as usize;
            if len > MAX_RECORD_SIZE {
                return Err(StockpileError::SnapshotCorruption(format!(
                    "Record {}: length {} exceeds max {}",
                    index, len, MAX_RECORD_SIZE
                )));
            }

            if body.remaining() < len {
                return Err(StockpileError::SnapshotCorruption(format!(
                    "Record {}: incomplete (expected {} bytes, got {})",
                    index,
                    len,
                    body.remaining()
                )));
            }

            let chunk = body.split_to(len);
            let record: ProductRecord = bincode::deserialize(&chunk)
                .map_err(|e| StockpileError::Serialization(format!("Record {}: {}", index, e)))?;
            records.push(record);
        }

        if body.has_remaining() {
            return Err(StockpileError::SnapshotCorruption(format!(
                "{} trailing bytes after {} records",
                body.remaining(),
                self.record_count
            )));
        }

        Ok(records)
    }

    /// Record count from the header
    pub fn record_count(&self) -> u64 {
        self.record_count
    }

    /// Persisted next id from the header
    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}
