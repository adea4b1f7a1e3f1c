//! Configuration for Stockpile
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::error::{Result, StockpileError};

/// Main configuration for a Stockpile inventory
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Snapshot Configuration
    // -------------------------------------------------------------------------
    /// Default snapshot file used by `Inventory::save` / `Inventory::load`
    pub snapshot_path: PathBuf,

    /// What to do with the file after a snapshot has been written
    pub sync_strategy: SyncStrategy,

    // -------------------------------------------------------------------------
    // Identifier Configuration
    // -------------------------------------------------------------------------
    /// First id handed out by the inventory's id sequence
    pub first_id: u64,
}

/// Snapshot sync strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStrategy {
    /// Flush userspace buffers only (fast, not crash-safe)
    Flush,

    /// Flush and fsync the snapshot file (slower, survives power loss)
    Fsync,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("./stockpile.snap"),
            sync_strategy: SyncStrategy::Fsync,
            first_id: 1,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check the config for values that can never work
    pub fn validate(&self) -> Result<()> {
        if self.first_id == 0 {
            return Err(StockpileError::Config(
                "first_id must be at least 1 (0 is reserved for unassigned products)".to_string(),
            ));
        }

        if self.snapshot_path.as_os_str().is_empty() {
            return Err(StockpileError::Config(
                "snapshot_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the default snapshot file
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = path.into();
        self
    }

    /// Set the snapshot sync strategy
    pub fn sync_strategy(mut self, strategy: SyncStrategy) -> Self {
        self.config.sync_strategy = strategy;
        self
    }

    /// Set the first id the sequence hands out
    pub fn first_id(mut self, id: u64) -> Self {
        self.config.first_id = id;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
