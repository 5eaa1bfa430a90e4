//! Errors returned by the cart engine to its callers.

use crate::model::ProductId;
use crate::store::StoreError;
use axum::http::StatusCode;
use thiserror::Error;

fn raw(id: &ProductId) -> u32 {
    id.0
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CartError {
    /// A caller-supplied value breaks a precondition. Raised before any store write.
    #[error("{0}")]
    InvalidInput(String),

    #[error("product with ID {} does not exist", raw(.0))]
    ProductNotFound(ProductId),

    #[error("cart item not found")]
    ItemNotFound(ProductId),

    /// Quantity update on an item the cart does not hold.
    #[error("no items in the cart to update")]
    NothingToUpdate(ProductId),

    #[error("can't add more than {max} unique items to the cart")]
    TooManyUniqueItems { max: usize },

    #[error("insufficient stock for product with ID {}: requested {requested}, available {available}", raw(.product))]
    InsufficientStock {
        product: ProductId,
        requested: u32,
        available: u32,
    },

    #[error("cart doesn't contain any items")]
    EmptyCart,

    #[error("invalid discount type: {0}")]
    InvalidDiscountType(String),

    /// A price or quantity change would leave a total that cannot be represented.
    #[error("cart total is out of range")]
    TotalOutOfRange,

    #[error("product with ID {} already exists", raw(.0))]
    DuplicateProduct(ProductId),

    /// A store call failed. Carries the step that was running.
    #[error("{operation}: {source}")]
    StoreUnavailable {
        operation: &'static str,
        #[source]
        source: StoreError,
    },
}

impl CartError {
    pub fn invalid(msg: impl Into<String>) -> Self {
        CartError::InvalidInput(msg.into())
    }

    /// Wraps a store failure with the operation it interrupted.
    pub fn store(operation: &'static str) -> impl FnOnce(StoreError) -> CartError {
        move |source| CartError::StoreUnavailable { operation, source }
    }

    /// Transport status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CartError::ProductNotFound(_)
            | CartError::ItemNotFound(_)
            | CartError::NothingToUpdate(_) => StatusCode::NOT_FOUND,
            CartError::StoreUnavailable {
                source: StoreError::Duplicate(_) | StoreError::Rejected(_),
                ..
            } => StatusCode::BAD_REQUEST,
            CartError::StoreUnavailable { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
