//! # Product Actor
//!
//! The catalog store: one [`ResourceActor`] owning every [`Product`], keyed by the
//! caller-supplied [`ProductId`](crate::model::ProductId).
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Product`]
//! - [`error`] - [`ProductError`], the entity's validation errors
//! - [`actions`] - [`ProductAction`] for reading and overwriting stock
//! - [`new()`] - Factory function that creates the actor and its [`ProductClient`]
//!
//! ## Usage
//!
//! ```rust
//! use shop_cart::model::{ProductCreate, ProductId};
//! use shop_cart::product_actor;
//! use shop_cart::store::CatalogStore;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = product_actor::new(8);
//!     tokio::spawn(actor.run(()));
//!
//!     client
//!         .insert_product(ProductCreate {
//!             product_id: ProductId(1),
//!             product_name: "Widget".to_string(),
//!             price: 29.99,
//!             stock: 100,
//!         })
//!         .await?;
//!     client.set_stock(ProductId(1), 95).await?;
//!     assert_eq!(client.fetch_product(ProductId(1)).await?.stock, 95);
//!     Ok(())
//! }
//! ```

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::ProductClient;
use crate::model::Product;
use actor_framework::ResourceActor;

/// Creates a new Product actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ProductClient::new(generic_client))
}
