//! # Store Contracts
//!
//! The cart engine reaches persisted state only through these two traits. The production
//! implementations are the actor-backed [`ProductClient`](crate::clients::ProductClient) and
//! [`CartClient`](crate::clients::CartClient); tests can put any other implementation in their
//! place.
//!
//! Every method is a single request against one store. Store calls are never retried here:
//! a failure is returned to the engine as a [`StoreError`].

use crate::model::{CartLine, CartLineCreate, Product, ProductCreate, ProductId};
use async_trait::async_trait;
use thiserror::Error;

/// Failures reported by a store.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    /// No record under the given key.
    #[error("not found: {0}")]
    NotFound(String),

    /// A record already exists under the given key.
    #[error("already exists: {0}")]
    Duplicate(String),

    /// The store refused the values it was given.
    #[error("rejected: {0}")]
    Rejected(String),

    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl From<String> for StoreError {
    fn from(msg: String) -> Self {
        StoreError::Unavailable(msg)
    }
}

/// Product catalog operations consumed by the engine.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn insert_product(&self, product: ProductCreate) -> Result<(), StoreError>;

    /// `StoreError::NotFound` when no product has this id.
    async fn fetch_product(&self, id: ProductId) -> Result<Product, StoreError>;

    async fn set_stock(&self, id: ProductId, stock: u32) -> Result<(), StoreError>;
}

/// Cart line operations consumed by the engine.
#[async_trait]
pub trait CartStore: Send + Sync {
    /// Fails with `StoreError::Duplicate` when a line for the product is already present.
    async fn insert_line(&self, line: CartLineCreate) -> Result<(), StoreError>;

    /// `StoreError::NotFound` when the cart has no line for this product.
    async fn get_line(&self, id: ProductId) -> Result<CartLine, StoreError>;

    /// Lines in insertion order.
    async fn list_lines(&self) -> Result<Vec<CartLine>, StoreError>;

    async fn delete_line(&self, id: ProductId) -> Result<(), StoreError>;

    async fn clear_all(&self) -> Result<(), StoreError>;

    async fn count_lines(&self) -> Result<usize, StoreError>;

    async fn exists_line(&self, id: ProductId) -> Result<bool, StoreError>;

    async fn update_quantity(&self, id: ProductId, quantity: u32) -> Result<(), StoreError>;

    /// The store computes and keeps the new price; read it back with `get_line`.
    async fn apply_percentage_discount(&self, id: ProductId, percent: f64)
        -> Result<(), StoreError>;

    async fn apply_flat_discount(&self, id: ProductId, amount: f64) -> Result<(), StoreError>;
}
