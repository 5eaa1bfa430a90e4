//! # Product Client
//!
//! Wraps a `ResourceClient<Product>` and exposes it as the engine's [`CatalogStore`].
use super::store_error;
use crate::model::{Product, ProductCreate, ProductId};
use crate::product_actor::ProductAction;
use crate::store::{CatalogStore, StoreError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }

    /// Current stock level of a product.
    #[instrument(skip(self))]
    pub async fn check_stock(&self, id: ProductId) -> Result<u32, StoreError> {
        debug!("Checking stock");
        self.inner
            .perform_action(id, ProductAction::CheckStock)
            .await
            .map_err(store_error)
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        store_error(e)
    }
}

#[async_trait]
impl CatalogStore for ProductClient {
    #[instrument(skip(self), fields(product_id = %product.product_id))]
    async fn insert_product(&self, product: ProductCreate) -> Result<(), StoreError> {
        debug!("Sending request");
        self.inner.create(product).await.map(|_| ()).map_err(store_error)
    }

    async fn fetch_product(&self, id: ProductId) -> Result<Product, StoreError> {
        self.get(id)
            .await?
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    async fn set_stock(&self, id: ProductId, stock: u32) -> Result<(), StoreError> {
        debug!("Setting stock");
        self.inner
            .perform_action(id, ProductAction::SetStock(stock))
            .await
            .map(|_| ())
            .map_err(store_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::{create_mock_client, expect_action, expect_create, MockClient};

    #[tokio::test]
    async fn test_check_stock_returns_correct_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let check_task =
            tokio::spawn(async move { product_client.check_stock(ProductId(1)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(1));
        assert_eq!(action, ProductAction::CheckStock);
        responder.send(Ok(42)).unwrap();

        assert_eq!(check_task.await.unwrap(), Ok(42));
    }

    #[tokio::test]
    async fn test_set_stock_sends_new_level() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move { product_client.set_stock(ProductId(3), 7).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, ProductId(3));
        assert_eq!(action, ProductAction::SetStock(7));
        responder.send(Ok(7)).unwrap();

        assert!(task.await.unwrap().is_ok());
    }

    #[tokio::test]
    async fn test_insert_product_forwards_payload() {
        let (client, mut receiver) = create_mock_client::<Product>(10);
        let product_client = ProductClient::new(client);

        let task = tokio::spawn(async move {
            product_client
                .insert_product(ProductCreate {
                    product_id: ProductId(5),
                    product_name: "Mug".into(),
                    price: 8.5,
                    stock: 12,
                })
                .await
        });

        let (params, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(params.product_id, ProductId(5));
        assert_eq!(params.product_name, "Mug");
        responder
            .send(Err(FrameworkError::AlreadyExists(ProductId(5).to_string())))
            .unwrap();

        assert_eq!(
            task.await.unwrap(),
            Err(StoreError::Duplicate("product_5".into()))
        );
    }

    #[tokio::test]
    async fn test_fetch_missing_product_is_not_found() {
        let mut mock = MockClient::<Product>::new();
        mock.expect_get(ProductId(9)).return_ok(None);
        mock.expect_get(ProductId(9))
            .return_err(FrameworkError::ActorClosed);

        let store = ProductClient::new(mock.client());
        assert_eq!(
            store.fetch_product(ProductId(9)).await,
            Err(StoreError::NotFound("product_9".into()))
        );
        assert!(matches!(
            store.fetch_product(ProductId(9)).await,
            Err(StoreError::Unavailable(_))
        ));
        mock.verify();
    }
}
