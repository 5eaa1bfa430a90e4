//! Error types for the cart-line actor.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartLineError {
    #[error("quantity must be greater than zero")]
    InvalidQuantity,

    #[error("invalid discount value {0}, must be greater than 0")]
    InvalidDiscount(f64),

    #[error("invalid discount value {0}, percentage discount cannot exceed 100%")]
    PercentageTooLarge(f64),

    #[error("line total is out of range")]
    TotalOutOfRange,
}
