//! Field selector and typed field values

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, StockpileError};

use super::ProductId;

/// Selects one of a product's fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Id,
    Name,
    Category,
    Stock,
    Price,
}

impl Field {
    /// Every field, in declaration order
    pub const ALL: [Field; 5] = [
        Field::Id,
        Field::Name,
        Field::Category,
        Field::Stock,
        Field::Price,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Name => "name",
            Field::Category => "category",
            Field::Stock => "stock",
            Field::Price => "price",
        }
    }

    /// Whether `value` has the kind this field holds
    pub fn accepts(&self, value: &FieldValue) -> bool {
        matches!(
            (self, value),
            (Field::Id, FieldValue::Id(_))
                | (Field::Name, FieldValue::Text(_))
                | (Field::Category, FieldValue::Text(_))
                | (Field::Stock, FieldValue::Quantity(_))
                | (Field::Price, FieldValue::Price(_))
        )
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Field {
    type Err = StockpileError;

    fn from_str(s: &str) -> Result<Self> {
        Field::ALL
            .into_iter()
            .find(|field| field.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StockpileError::UnknownField(s.to_string()))
    }
}

/// The value of a single product field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Id(ProductId),
    Text(String),
    Quantity(i64),
    Price(f64),
}

impl FieldValue {
    /// Parse textual input as a value of `field`
    ///
    /// Used by front ends that take keywords as strings.
    pub fn parse(field: Field, input: &str) -> Result<Self> {
        let invalid = || StockpileError::InvalidValue {
            field,
            input: input.to_string(),
        };

        match field {
            Field::Id => input
                .trim()
                .parse::<u64>()
                .map(|raw| FieldValue::Id(ProductId::new(raw)))
                .map_err(|_| invalid()),
            Field::Name | Field::Category => Ok(FieldValue::Text(input.to_string())),
            Field::Stock => input
                .trim()
                .parse::<i64>()
                .map(FieldValue::Quantity)
                .map_err(|_| invalid()),
            Field::Price => input
                .trim()
                .parse::<f64>()
                .map(FieldValue::Price)
                .map_err(|_| invalid()),
        }
    }

    /// Read a plain non-negative integer as an id when `field` is `Id`
    ///
    /// Every other value is returned as-is.
    pub fn for_field(self, field: Field) -> Self {
        match (field, self) {
            (Field::Id, FieldValue::Quantity(n)) if n >= 0 => {
                FieldValue::Id(ProductId::new(n.unsigned_abs()))
            }
            (_, value) => value,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Id(id) => write!(f, "{}", id),
            FieldValue::Text(text) => write!(f, "{:?}", text),
            FieldValue::Quantity(n) => write!(f, "{}", n),
            FieldValue::Price(p) => write!(f, "{}", p),
        }
    }
}

impl From<ProductId> for FieldValue {
    fn from(id: ProductId) -> Self {
        FieldValue::Id(id)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::Quantity(i64::from(n))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Quantity(n)
    }
}

impl From<f64> for FieldValue {
    fn from(p: f64) -> Self {
        FieldValue::Price(p)
    }
}
