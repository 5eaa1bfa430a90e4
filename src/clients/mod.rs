//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient) that
//! implement the store contracts in [`crate::store`].

pub mod cart_client;
pub mod product_client;

pub use cart_client::*;
pub use product_client::*;

use crate::store::StoreError;
use actor_framework::FrameworkError;

/// Translates actor failures into store failures.
pub(crate) fn store_error(e: FrameworkError) -> StoreError {
    match e {
        FrameworkError::NotFound(id) => StoreError::NotFound(id),
        FrameworkError::AlreadyExists(id) => StoreError::Duplicate(id),
        FrameworkError::EntityError(inner) => StoreError::Rejected(inner.to_string()),
        unavailable => StoreError::Unavailable(unavailable.to_string()),
    }
}
