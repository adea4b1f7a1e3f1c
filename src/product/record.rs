//! Transfer representation
//!
//! `ProductRecord` mirrors a product as plain data. It is the shape products
//! take when they leave the inventory: in snapshots and in exchange with
//! other systems.

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::{IdSequence, Product, ProductId};

/// Flat, validation-free copy of a product's fields
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub stock: i64,
    pub price: f64,
}

impl ProductRecord {
    /// Turn the record into a new product with a fresh id
    ///
    /// The record's own `id` is ignored.
    pub fn into_product(self, sequence: &IdSequence) -> Result<Product> {
        Product::new(sequence, self.name, self.category, self.stock, self.price)
    }

    /// Turn the record back into the product it was taken from, id included
    pub(crate) fn restore(self) -> Product {
        Product::from_parts(self.id, self.name, self.category, self.stock, self.price)
    }
}

impl From<&Product> for ProductRecord {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id(),
            name: product.name().to_string(),
            category: product.category().to_string(),
            stock: product.stock(),
            price: product.price(),
        }
    }
}
