//! Id sequence
//!
//! Monotonic id generator owned by an inventory.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::{Result, StockpileError};

use super::ProductId;

/// Hands out strictly increasing product ids
///
/// Atomic so ids can be drawn through a shared reference. The counter never
/// moves backwards: `advance_past` / `advance_to` only ever raise it, and it
/// never wraps. `u64::MAX` is never handed out, so the counter can always
/// sit past every id it issued.
#[derive(Debug)]
pub struct IdSequence {
    /// Next id to hand out
    next: AtomicU64,
}

impl IdSequence {
    /// Create a sequence starting at 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a sequence whose first id is `first`
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Take the next id
    ///
    /// Fails with `IdSequenceExhausted` once the counter reaches `u64::MAX`.
    pub fn next_id(&self) -> Result<ProductId> {
        self.next
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |next| next.checked_add(1))
            .map(ProductId::new)
            .map_err(|_| StockpileError::IdSequenceExhausted)
    }

    /// The id the next call to `next_id` will return
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::SeqCst)
    }

    /// Make sure `id` is never handed out again
    ///
    /// Fails with `IdOutOfRange` if `id` has no successor.
    pub fn advance_past(&self, id: ProductId) -> Result<()> {
        let next = id
            .get()
            .checked_add(1)
            .ok_or(StockpileError::IdOutOfRange(id))?;
        self.advance_to(next);
        Ok(())
    }

    /// Raise the next id to at least `next`
    pub fn advance_to(&self, next: u64) {
        self.next.fetch_max(next, Ordering::SeqCst);
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
