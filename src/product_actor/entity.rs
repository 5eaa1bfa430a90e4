//! [`ActorEntity`] implementation for the catalog's [`Product`].
//!
//! The product key is the caller's `product_id`; registering the same id twice is refused by
//! the actor before any hook runs. Once registered, only its stock changes, through
//! [`ProductAction::SetStock`]. The update type is uninhabited, so no update request can be built.

use super::{ProductAction, ProductError};
use crate::model::{Product, ProductCreate, ProductId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Product {
    type Id = ProductId;
    type Create = ProductCreate;
    type Update = Infallible;
    type Action = ProductAction;
    type ActionResult = u32;
    type Context = ();
    type Error = ProductError;

    /// Validates the registration payload: non-empty name, positive price and stock.
    fn from_create_params(params: ProductCreate) -> Result<Self, Self::Error> {
        if params.product_name.is_empty() {
            return Err(ProductError::EmptyName);
        }
        if !params.price.is_finite() || params.price <= 0.0 {
            return Err(ProductError::InvalidPrice(params.price));
        }
        if params.stock == 0 {
            return Err(ProductError::InvalidStock);
        }
        Ok(Self::new(
            params.product_id,
            params.product_name,
            params.price,
            params.stock,
        ))
    }

    fn id(&self) -> ProductId {
        self.id
    }

    async fn on_update(
        &mut self,
        update: Infallible,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(
        &mut self,
        action: ProductAction,
        _ctx: &Self::Context,
    ) -> Result<u32, Self::Error> {
        match action {
            ProductAction::CheckStock => Ok(self.stock),
            ProductAction::SetStock(stock) => {
                self.stock = stock;
                Ok(self.stock)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(name: &str, price: f64, stock: u32) -> ProductCreate {
        ProductCreate {
            product_id: ProductId(1),
            product_name: name.into(),
            price,
            stock,
        }
    }

    #[test]
    fn test_registration_validation() {
        assert_eq!(
            Product::from_create_params(create("", 1.0, 1)),
            Err(ProductError::EmptyName)
        );
        assert_eq!(
            Product::from_create_params(create("pen", 0.0, 1)),
            Err(ProductError::InvalidPrice(0.0))
        );
        assert_eq!(
            Product::from_create_params(create("pen", -2.0, 1)),
            Err(ProductError::InvalidPrice(-2.0))
        );
        assert_eq!(
            Product::from_create_params(create("pen", f64::INFINITY, 1)),
            Err(ProductError::InvalidPrice(f64::INFINITY))
        );
        assert_eq!(
            Product::from_create_params(create("pen", 1.0, 0)),
            Err(ProductError::InvalidStock)
        );

        let product = Product::from_create_params(create("pen", 1.5, 3)).unwrap();
        assert_eq!(product.id(), ProductId(1));
        assert_eq!(product.stock, 3);
    }

    #[tokio::test]
    async fn test_set_stock_allows_zero() {
        let mut product = Product::new(ProductId(2), "ink", 4.0, 5);
        assert_eq!(product.handle_action(ProductAction::SetStock(0), &()).await, Ok(0));
        assert_eq!(product.handle_action(ProductAction::CheckStock, &()).await, Ok(0));
    }
}
