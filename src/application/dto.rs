//! Transfer value for products.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::Product;

/// Product as seen by callers and stored in the cache.
///
/// `id` is ignored on creation and required on update. `price` is encoded as
/// a JSON number carrying every digit of the decimal, so the cached copy and
/// the stored `NUMERIC` never differ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ProductDto {
    #[serde(default)]
    pub id: Option<i64>,

    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,

    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    #[validate(custom(function = "validate_price"))]
    pub price: Decimal,
}

impl ProductDto {
    pub fn new(id: Option<i64>, name: impl Into<String>, price: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            price,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
        }
    }
}

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        let mut err = ValidationError::new("negative_price");
        err.message = Some("Price must not be negative".into());
        return Err(err);
    }
    Ok(())
}
