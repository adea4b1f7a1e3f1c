//! # Stockpile
//!
//! An embeddable, in-memory product inventory with:
//! - Id-keyed storage with duplicate-free inserts and all-or-nothing batches
//! - Single-field equality filter and stable single-field sort
//! - Whole-store snapshots in a versioned, checksummed binary file
//! - An explicit id sequence that survives save/load cycles
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Embedding Application                     │
//! │                   (or the stockpile CLI)                     │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                       Inventory                              │
//! │        (BTreeMap<ProductId, Product> + IdSequence)           │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          │                         │
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │   Product   │          │  Snapshot   │
//!   │ Field/Value │          │ Writer/Read │
//!   └─────────────┘          └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod product;
pub mod inventory;
pub mod snapshot;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{StockpileError, Result};
pub use config::{Config, SyncStrategy};
pub use inventory::Inventory;
pub use product::{Field, FieldValue, IdSequence, Product, ProductId, ProductRecord};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of Stockpile
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
