//! Snapshot Writer
//!
//! Streams product records into a new snapshot file.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use bytes::{BufMut, BytesMut};

use crate::config::SyncStrategy;
use crate::error::{Result, StockpileError};
use crate::product::{Product, ProductRecord};

use super::{SnapshotInfo, COUNT_OFFSET, HEADER_SIZE, MAGIC, MAX_RECORD_SIZE, VERSION};

/// Writes a snapshot file: header, framed records, CRC footer
///
/// Any existing file at the path is truncated on `create`. If a write fails
/// midway the file is left as-is (possibly truncated); the handle is
/// released when the writer is dropped.
pub struct SnapshotWriter {
    /// Output file path
    path: PathBuf,
    /// Buffered writer for performance
    writer: BufWriter<File>,
    /// Records written so far
    record_count: u64,
    /// Running CRC hasher, fed the body as it is written
    body_hasher: crc32fast::Hasher,
    /// What to do with the file once it is complete
    sync_strategy: SyncStrategy,
}

impl SnapshotWriter {
    /// Create (or truncate) the snapshot file and write a placeholder header
    ///
    /// Count and NextId are patched in by `finish()`.
    pub fn create(path: &Path, sync_strategy: SyncStrategy) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;

        let mut writer = BufWriter::new(file);

        let mut header = BytesMut::with_capacity(HEADER_SIZE);
        header.put_slice(MAGIC);
        header.put_u16_le(VERSION);
        header.put_u64_le(0); // Placeholder for record count
        header.put_u64_le(0); // Placeholder for next id
        writer.write_all(&header)?;

        Ok(Self {
            path: path.to_path_buf(),
            writer,
            record_count: 0,
            body_hasher: crc32fast::Hasher::new(),
            sync_strategy,
        })
    }

    /// Append one product as a length-prefixed record
    pub fn add(&mut self, product: &Product) -> Result<()> {
        let encoded = bincode::serialize(&ProductRecord::from(product))
            .map_err(|e| StockpileError::Serialization(e.to_string()))?;

        if encoded.len() > MAX_RECORD_SIZE {
            return Err(StockpileError::Serialization(format!(
                "Product {} encodes to {} bytes (max {})",
                product.id(),
                encoded.len(),
                MAX_RECORD_SIZE
            )));
        }

        let mut frame = BytesMut::with_capacity(4 + encoded.len());
        frame.put_u32_le(encoded.len() as u32);
        frame.put_slice(&encoded);

        self.writer.write_all(&frame)?;
        self.body_hasher.update(&frame);
        self.record_count += 1;

        Ok(())
    }

    /// Write the footer, patch the header and sync per strategy
    pub fn finish(mut self, next_id: u64) -> Result<SnapshotInfo> {
        // Count and NextId sit next to each other after magic + version
        let mut counters = BytesMut::with_capacity(16);
        counters.put_u64_le(self.record_count);
        counters.put_u64_le(next_id);

        let mut hasher = self.body_hasher;
        hasher.update(&VERSION.to_le_bytes());
        hasher.update(&counters);
        let crc = hasher.finalize();

        self.writer.write_all(&crc.to_le_bytes())?;
        self.writer.flush()?;

        let mut file = self
            .writer
            .into_inner()
            .map_err(|e| StockpileError::Io(e.into_error()))?;

        file.seek(SeekFrom::Start(COUNT_OFFSET))?;
        file.write_all(&counters)?;

        match self.sync_strategy {
            SyncStrategy::Fsync => file.sync_all()?,
            SyncStrategy::Flush => file.flush()?,
        }

        let file_size = file.metadata()?.len();

        Ok(SnapshotInfo {
            path: self.path,
            record_count: self.record_count,
            next_id,
            file_size,
        })
    }

    /// Records written so far
    pub fn record_count(&self) -> u64 {
        self.record_count
    }
}
