//! Request bodies.
//!
//! Quantities arrive as signed integers so that zero and negative values reach the cart's own
//! validation and come back as `InvalidInput` rather than as a parse failure.

use crate::engine::CartError;
use crate::model::ProductId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub product_id: ProductId,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateQuantityRequest {
    pub item_id: ProductId,
    pub quantity: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscountRequest {
    pub discount_type: String,
    pub discount: f64,
    pub item_id: ProductId,
}

pub(crate) fn quantity(value: i64) -> Result<u32, CartError> {
    if value <= 0 {
        return Err(CartError::invalid("quantity must be greater than zero"));
    }
    u32::try_from(value).map_err(|_| CartError::invalid("quantity is too large"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_bounds() {
        assert_eq!(quantity(3), Ok(3));
        assert!(matches!(quantity(0), Err(CartError::InvalidInput(_))));
        assert!(matches!(quantity(-4), Err(CartError::InvalidInput(_))));
        assert!(matches!(
            quantity(i64::from(u32::MAX) + 1),
            Err(CartError::InvalidInput(_))
        ));
    }
}
