//! Custom actions for the Product actor.
//!
//! These are the catalog operations beyond plain CRUD, handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

/// Stock operations on a single product.
///
/// Both variants answer with the stock level after the action.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductAction {
    /// Reads the current stock level without modifying it.
    CheckStock,
    /// Overwrites the stock level. Used by the cart engine to reserve units.
    SetStock(u32),
}
