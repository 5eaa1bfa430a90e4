//! # Cart-Line Actor
//!
//! The cart store: one [`ResourceActor`] owning every [`CartLine`] of the single shared cart.
//! Lines are keyed by product, so inserting a second line for the same product is refused
//! with `FrameworkError::AlreadyExists`.
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`CartLine`]
//! - [`error`] - [`CartLineError`]
//! - [`actions`] - [`CartLineAction`], the two discount kinds

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::CartClient;
use crate::model::CartLine;
use actor_framework::ResourceActor;

/// Creates a new cart-line actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<CartLine>, CartClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, CartClient::new(generic_client))
}
