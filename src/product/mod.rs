//! Product Module
//!
//! The record stored by an inventory, and everything needed to address it.
//!
//! ## Responsibilities
//! - Product value with an immutable id and four descriptive fields
//! - Id generation through an explicit, injectable sequence
//! - Generic field access / comparison through a typed field selector
//! - Flat transfer representation for data exchange and snapshots
//!
//! ## Field Selector
//! ```text
//! ┌──────────┬──────────────────┬────────────────────────────┐
//! │ Field    │ FieldValue       │ Ordering                   │
//! ├──────────┼──────────────────┼────────────────────────────┤
//! │ Id       │ Id(ProductId)    │ numeric                    │
//! │ Name     │ Text(String)     │ lexicographic              │
//! │ Category │ Text(String)     │ lexicographic              │
//! │ Stock    │ Quantity(i64)    │ numeric                    │
//! │ Price    │ Price(f64)       │ IEEE total order           │
//! └──────────┴──────────────────┴────────────────────────────┘
//! ```

mod field;
mod item;
mod record;
mod sequence;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use field::{Field, FieldValue};
pub use item::Product;
pub use record::ProductRecord;
pub use sequence::IdSequence;

/// Identifier of a product, unique within one inventory
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(u64);

impl ProductId {
    /// Id carried by default-constructed products
    pub const UNASSIGNED: ProductId = ProductId(0);

    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw integer value
    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_assigned(self) -> bool {
        self.0 != 0
    }
}

impl From<u64> for ProductId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}
