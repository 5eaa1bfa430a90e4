//! Plain data structures for the catalog and the cart.
//!
//! [`Product`] and [`CartLine`] implement [`ActorEntity`](actor_framework::ActorEntity) in
//! [`crate::product_actor`] and [`crate::cart_actor`]; this module only holds the data and its
//! wire shape.

pub mod cart_line;
pub mod product;

pub use cart_line::*;
pub use product::*;
