//! Error types for Stockpile
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

use crate::product::{Field, ProductId};

/// Result type alias using StockpileError
pub type Result<T> = std::result::Result<T, StockpileError>;

/// Unified error type for Stockpile operations
#[derive(Debug, Error)]
pub enum StockpileError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Inventory Errors
    // -------------------------------------------------------------------------
    #[error("Product {0} already exists")]
    DuplicateId(ProductId),

    #[error("Product {0} not found")]
    ProductNotFound(ProductId),

    #[error("Product id {0} leaves no room in the id sequence")]
    IdOutOfRange(ProductId),

    #[error("Id sequence exhausted")]
    IdSequenceExhausted,

    // -------------------------------------------------------------------------
    // Field Selector Errors
    // -------------------------------------------------------------------------
    #[error("Value {value} cannot be matched against field {field}")]
    FieldMismatch { field: Field, value: String },

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid value for field {field}: {input:?}")]
    InvalidValue { field: Field, input: String },

    // -------------------------------------------------------------------------
    // Snapshot Errors
    // -------------------------------------------------------------------------
    #[error("Snapshot corruption detected: {0}")]
    SnapshotCorruption(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}
