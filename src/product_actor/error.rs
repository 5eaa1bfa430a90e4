//! Error types for the Product actor.

use thiserror::Error;

/// Validation failures raised by the [`Product`](crate::model::Product) entity itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProductError {
    #[error("product name should not be empty")]
    EmptyName,

    #[error("price should be greater than zero, got {0}")]
    InvalidPrice(f64),

    #[error("stock should be greater than zero")]
    InvalidStock,
}
