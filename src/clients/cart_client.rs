//! # Cart Client
//!
//! Wraps a `ResourceClient<CartLine>` and exposes it as the engine's [`CartStore`].
use super::store_error;
use crate::cart_actor::CartLineAction;
use crate::model::{CartLine, CartLineCreate, CartLineUpdate, ProductId};
use crate::store::{CartStore, StoreError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<CartLine>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<CartLine>) -> Self {
        Self { inner }
    }

    async fn discount(&self, id: ProductId, action: CartLineAction) -> Result<(), StoreError> {
        let price = self
            .inner
            .perform_action(id, action)
            .await
            .map_err(store_error)?;
        debug!(%id, price, "Discount stored");
        Ok(())
    }
}

#[async_trait]
impl ActorClient<CartLine> for CartClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<CartLine> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        store_error(e)
    }
}

#[async_trait]
impl CartStore for CartClient {
    #[instrument(skip(self), fields(item_id = %line.item_id))]
    async fn insert_line(&self, line: CartLineCreate) -> Result<(), StoreError> {
        debug!("Sending request");
        self.inner.create(line).await.map(|_| ()).map_err(store_error)
    }

    async fn get_line(&self, id: ProductId) -> Result<CartLine, StoreError> {
        self.get(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    async fn list_lines(&self) -> Result<Vec<CartLine>, StoreError> {
        self.list().await
    }

    async fn delete_line(&self, id: ProductId) -> Result<(), StoreError> {
        self.delete(id).await
    }

    #[instrument(skip(self))]
    async fn clear_all(&self) -> Result<(), StoreError> {
        let removed = self.inner.clear().await.map_err(store_error)?;
        debug!(removed, "Cart cleared");
        Ok(())
    }

    async fn count_lines(&self) -> Result<usize, StoreError> {
        self.count().await
    }

    #[instrument(skip(self))]
    async fn exists_line(&self, id: ProductId) -> Result<bool, StoreError> {
        self.inner.exists(id).await.map_err(store_error)
    }

    #[instrument(skip(self))]
    async fn update_quantity(&self, id: ProductId, quantity: u32) -> Result<(), StoreError> {
        self.inner
            .update(id, CartLineUpdate { quantity })
            .await
            .map(|_| ())
            .map_err(store_error)
    }

    #[instrument(skip(self))]
    async fn apply_percentage_discount(
        &self,
        id: ProductId,
        percent: f64,
    ) -> Result<(), StoreError> {
        self.discount(id, CartLineAction::ApplyPercentageDiscount(percent))
            .await
    }

    #[instrument(skip(self))]
    async fn apply_flat_discount(&self, id: ProductId, amount: f64) -> Result<(), StoreError> {
        self.discount(id, CartLineAction::ApplyFlatDiscount(amount))
            .await
    }
}
