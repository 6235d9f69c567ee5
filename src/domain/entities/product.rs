//! Product entity stored in the catalog.

use rust_decimal::Decimal;

/// A product record owned by the persistent store.
///
/// `id` is `None` until the record is first saved; the store assigns a unique
/// identifier on insert and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub price: Decimal,
}

impl Product {
    /// Creates a product that has not been persisted yet.
    pub fn new(name: String, price: Decimal) -> Self {
        Self {
            id: None,
            name,
            price,
        }
    }

    /// Rebuilds a persisted product from stored values.
    pub fn with_id(id: i64, name: String, price: Decimal) -> Self {
        Self {
            id: Some(id),
            name,
            price,
        }
    }
}
