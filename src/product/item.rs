//! Product record

use std::cmp::Ordering;

use crate::error::Result;

use super::{Field, FieldValue, IdSequence, ProductId};

/// A product held by an inventory
///
/// The id is assigned once, at construction, and has no setter. The other
/// four fields are free-form: no validation is done on stock or price.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    stock: i64,
    price: f64,
}

impl Product {
    /// Create a product, drawing its id from `sequence`
    ///
    /// Fails only when the sequence is exhausted.
    pub fn new(
        sequence: &IdSequence,
        name: impl Into<String>,
        category: impl Into<String>,
        stock: i64,
        price: f64,
    ) -> Result<Self> {
        let id = sequence.next_id()?;
        Ok(Self::from_parts(id, name.into(), category.into(), stock, price))
    }

    /// Rebuild a product that already owns an id (snapshot restore)
    pub(crate) fn from_parts(
        id: ProductId,
        name: String,
        category: String,
        stock: i64,
        price: f64,
    ) -> Self {
        Self {
            id,
            name,
            category,
            stock,
            price,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn stock(&self) -> i64 {
        self.stock
    }

    pub fn set_stock(&mut self, stock: i64) {
        self.stock = stock;
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    // =========================================================================
    // Field Selector Access
    // =========================================================================

    /// Read the selected field as a typed value
    pub fn field(&self, field: Field) -> FieldValue {
        match field {
            Field::Id => FieldValue::Id(self.id),
            Field::Name => FieldValue::Text(self.name.clone()),
            Field::Category => FieldValue::Text(self.category.clone()),
            Field::Stock => FieldValue::Quantity(self.stock),
            Field::Price => FieldValue::Price(self.price),
        }
    }

    /// Check whether the selected field equals `value`
    ///
    /// A value of the wrong kind never matches. Prices are equal when their
    /// IEEE total order says so: `NaN` matches `NaN`, `-0.0` does not match
    /// `0.0`.
    pub fn matches(&self, field: Field, value: &FieldValue) -> bool {
        match (field, value) {
            (Field::Id, FieldValue::Id(id)) => self.id == *id,
            (Field::Name, FieldValue::Text(text)) => self.name == *text,
            (Field::Category, FieldValue::Text(text)) => self.category == *text,
            (Field::Stock, FieldValue::Quantity(n)) => self.stock == *n,
            (Field::Price, FieldValue::Price(p)) => self.price.total_cmp(p).is_eq(),
            _ => false,
        }
    }

    /// Compare the selected field of `self` and `other`
    ///
    /// Numeric order for id/stock/price, byte-wise lexicographic order for
    /// name/category.
    pub fn compare_field(&self, field: Field, other: &Product) -> Ordering {
        match field {
            Field::Id => self.id.cmp(&other.id),
            Field::Name => self.name.cmp(&other.name),
            Field::Category => self.category.cmp(&other.category),
            Field::Stock => self.stock.cmp(&other.stock),
            Field::Price => self.price.total_cmp(&other.price),
        }
    }

    /// Overwrite name, category, stock and price from `other`; keep the id
    pub fn copy_fields_from(&mut self, other: &Product) {
        self.name.clone_from(&other.name);
        self.category.clone_from(&other.category);
        self.stock = other.stock;
        self.price = other.price;
    }
}
