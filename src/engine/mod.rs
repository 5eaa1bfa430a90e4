//! # Cart Engine
//!
//! The cart's business rules ([`CartService`]) and the single task that runs them
//! ([`CartEngine`]), plus the error type returned to callers ([`CartError`]).
//!
//! ```rust
//! use shop_cart::engine::{CartEngine, CartService};
//! use shop_cart::model::{ProductCreate, ProductId};
//! use shop_cart::{cart_actor, product_actor};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (products, catalog) = product_actor::new(8);
//!     let (lines, cart) = cart_actor::new(8);
//!     tokio::spawn(products.run(()));
//!     tokio::spawn(lines.run(()));
//!
//!     let (engine, handle) = CartEngine::new(CartService::new(catalog, cart), 8);
//!     tokio::spawn(engine.run());
//!
//!     handle
//!         .register_product(ProductCreate {
//!             product_id: ProductId(1),
//!             product_name: "Pen".into(),
//!             price: 10.0,
//!             stock: 5,
//!         })
//!         .await
//!         .unwrap();
//!     assert_eq!(handle.add_item(ProductId(1), 3).await.unwrap(), 1);
//!     assert_eq!(handle.checkout().await.unwrap().total_price, 30.0);
//! }
//! ```

mod actor;
mod error;
mod service;

pub use actor::{CartCommand, CartEngine, CartHandle};
pub use error::CartError;
pub use service::{CartService, DEFAULT_MAX_UNIQUE_ITEMS, FLAT, PERCENTAGE};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProductCreate, ProductId};
    use crate::{cart_actor, product_actor};

    async fn start() -> CartHandle {
        let (products, catalog) = product_actor::new(8);
        let (lines, cart) = cart_actor::new(8);
        tokio::spawn(products.run(()));
        tokio::spawn(lines.run(()));
        let (engine, handle) = CartEngine::new(CartService::new(catalog, cart), 8);
        tokio::spawn(engine.run());

        handle
            .register_product(ProductCreate {
                product_id: ProductId(1),
                product_name: "Pen".into(),
                price: 2.0,
                stock: 5,
            })
            .await
            .unwrap();
        handle
    }

    #[tokio::test]
    async fn test_stopped_engine_is_unavailable() {
        let handle = start().await;
        let (engine, orphan) = CartEngine::new(
            CartService::new(product_actor::new(1).1, cart_actor::new(1).1),
            1,
        );
        drop(engine);

        assert!(matches!(
            orphan.view_cart().await,
            Err(CartError::StoreUnavailable { .. })
        ));
        assert!(handle.view_cart().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_discount_type_is_checked_after_value() {
        let handle = start().await;
        handle.add_item(ProductId(1), 1).await.unwrap();

        assert!(matches!(
            handle.apply_discount("bogus", -1.0, ProductId(1)).await,
            Err(CartError::InvalidInput(_))
        ));
        assert_eq!(
            handle.apply_discount("bogus", 5.0, ProductId(1)).await,
            Err(CartError::InvalidDiscountType("bogus".into()))
        );
        assert_eq!(
            handle.apply_discount(PERCENTAGE, 50.0, ProductId(1)).await,
            Ok(1.0)
        );
    }
}
