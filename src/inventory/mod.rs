//! Inventory Module
//!
//! The id-keyed product store and its query / persistence operations.
//!
//! ## Responsibilities
//! - Own every stored product, keyed by its id
//! - Reject inserts that would overwrite an existing id
//! - Equality filter and stable sort over a single field
//! - Save / load the whole store as one snapshot file
//!
//! ## Data Structure Choice
//! Using BTreeMap keyed by `ProductId`:
//! - Iteration in ascending id order, which is insertion order for ids
//!   drawn from one sequence
//! - Deterministic `all` / `filter` / `sort` output, and stable tie order
//!
//! ## Concurrency
//! Single-writer only. Mutations take `&mut self`; wrap the inventory in a
//! lock to share it between threads.

mod store;

pub use store::Inventory;
