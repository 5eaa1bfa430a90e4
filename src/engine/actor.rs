//! # Cart Engine Task
//!
//! A single Tokio task owns the [`CartService`] and applies [`CartCommand`]s one at a time, so
//! no cart operation ever observes another one half done. [`CartHandle`] is the cloneable
//! sending side used by the request layer.
//!
//! A command whose caller stopped waiting (its response channel is closed) is dropped before it
//! starts. For `AddItem` and `Checkout` the check is repeated between the validation phase and
//! the write phase, so an abandoned request never writes.

use super::{CartError, CartService};
use crate::model::{CartView, ProductCreate, ProductId};
use crate::store::{CartStore, CatalogStore, StoreError};
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

type Reply<T> = oneshot::Sender<Result<T, CartError>>;

/// The eight cart operations, as messages.
#[derive(Debug)]
pub enum CartCommand {
    RegisterProduct {
        product: ProductCreate,
        respond_to: Reply<()>,
    },
    AddItem {
        product_id: ProductId,
        quantity: u32,
        respond_to: Reply<usize>,
    },
    RemoveItem {
        item_id: ProductId,
        respond_to: Reply<()>,
    },
    RemoveAllItems {
        respond_to: Reply<()>,
    },
    UpdateQuantity {
        item_id: ProductId,
        quantity: u32,
        respond_to: Reply<()>,
    },
    ApplyDiscount {
        discount_type: String,
        value: f64,
        item_id: ProductId,
        respond_to: Reply<f64>,
    },
    ViewCart {
        respond_to: Reply<CartView>,
    },
    Checkout {
        respond_to: Reply<CartView>,
    },
}

impl CartCommand {
    fn name(&self) -> &'static str {
        match self {
            CartCommand::RegisterProduct { .. } => "RegisterProduct",
            CartCommand::AddItem { .. } => "AddItem",
            CartCommand::RemoveItem { .. } => "RemoveItem",
            CartCommand::RemoveAllItems { .. } => "RemoveAllItems",
            CartCommand::UpdateQuantity { .. } => "UpdateQuantity",
            CartCommand::ApplyDiscount { .. } => "ApplyDiscount",
            CartCommand::ViewCart { .. } => "ViewCart",
            CartCommand::Checkout { .. } => "Checkout",
        }
    }

    fn caller_gone(&self) -> bool {
        match self {
            CartCommand::RegisterProduct { respond_to, .. }
            | CartCommand::RemoveItem { respond_to, .. }
            | CartCommand::RemoveAllItems { respond_to }
            | CartCommand::UpdateQuantity { respond_to, .. } => respond_to.is_closed(),
            CartCommand::AddItem { respond_to, .. } => respond_to.is_closed(),
            CartCommand::ApplyDiscount { respond_to, .. } => respond_to.is_closed(),
            CartCommand::ViewCart { respond_to } | CartCommand::Checkout { respond_to } => {
                respond_to.is_closed()
            }
        }
    }
}

/// The single writer in front of both stores.
pub struct CartEngine<C, S> {
    receiver: mpsc::Receiver<CartCommand>,
    service: CartService<C, S>,
}

impl<C, S> CartEngine<C, S>
where
    C: CatalogStore + 'static,
    S: CartStore + 'static,
{
    pub fn new(service: CartService<C, S>, buffer_size: usize) -> (Self, CartHandle) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        (Self { receiver, service }, CartHandle { sender })
    }

    /// Processes commands until every [`CartHandle`] is dropped.
    pub async fn run(mut self) {
        info!(max_unique_items = self.service.max_unique_items(), "Cart engine started");

        while let Some(command) = self.receiver.recv().await {
            let name = command.name();
            if command.caller_gone() {
                debug!(command = name, "Caller gone, skipping");
                continue;
            }
            debug!(command = name, "Processing");
            self.handle(command).await;
        }

        info!("Cart engine stopped");
    }

    async fn handle(&self, command: CartCommand) {
        let service = &self.service;
        match command {
            CartCommand::RegisterProduct {
                product,
                respond_to,
            } => {
                let _ = respond_to.send(service.register_product(product).await);
            }
            CartCommand::AddItem {
                product_id,
                quantity,
                respond_to,
            } => {
                let result = match service.prepare_add(product_id, quantity).await {
                    Ok(_) if respond_to.is_closed() => {
                        warn!(%product_id, "Caller gone before write, add abandoned");
                        return;
                    }
                    Ok(plan) => service.commit_add(plan).await,
                    Err(e) => Err(e),
                };
                let _ = respond_to.send(result);
            }
            CartCommand::RemoveItem {
                item_id,
                respond_to,
            } => {
                let _ = respond_to.send(service.remove_item(item_id).await);
            }
            CartCommand::RemoveAllItems { respond_to } => {
                let _ = respond_to.send(service.remove_all_items().await);
            }
            CartCommand::UpdateQuantity {
                item_id,
                quantity,
                respond_to,
            } => {
                let _ = respond_to.send(service.update_quantity(item_id, quantity).await);
            }
            CartCommand::ApplyDiscount {
                discount_type,
                value,
                item_id,
                respond_to,
            } => {
                let result = service.apply_discount(&discount_type, value, item_id).await;
                let _ = respond_to.send(result);
            }
            CartCommand::ViewCart { respond_to } => {
                let _ = respond_to.send(service.view_cart().await);
            }
            CartCommand::Checkout { respond_to } => {
                let result = match service.prepare_checkout().await {
                    Ok(_) if respond_to.is_closed() => {
                        warn!("Caller gone before write, checkout abandoned");
                        return;
                    }
                    Ok(view) => service.commit_checkout(view).await,
                    Err(e) => Err(e),
                };
                let _ = respond_to.send(result);
            }
        }
    }
}

/// Cloneable client of the [`CartEngine`].
#[derive(Clone)]
pub struct CartHandle {
    sender: mpsc::Sender<CartCommand>,
}

impl CartHandle {
    async fn request<R>(
        &self,
        build: impl FnOnce(Reply<R>) -> CartCommand,
    ) -> Result<R, CartError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| engine_gone())?;
        response.await.map_err(|_| engine_gone())?
    }

    pub async fn register_product(&self, product: ProductCreate) -> Result<(), CartError> {
        self.request(|respond_to| CartCommand::RegisterProduct {
            product,
            respond_to,
        })
        .await
    }

    pub async fn add_item(&self, product_id: ProductId, quantity: u32) -> Result<usize, CartError> {
        self.request(|respond_to| CartCommand::AddItem {
            product_id,
            quantity,
            respond_to,
        })
        .await
    }

    pub async fn remove_item(&self, item_id: ProductId) -> Result<(), CartError> {
        self.request(|respond_to| CartCommand::RemoveItem {
            item_id,
            respond_to,
        })
        .await
    }

    pub async fn remove_all_items(&self) -> Result<(), CartError> {
        self.request(|respond_to| CartCommand::RemoveAllItems { respond_to })
            .await
    }

    pub async fn update_quantity(&self, item_id: ProductId, quantity: u32) -> Result<(), CartError> {
        self.request(|respond_to| CartCommand::UpdateQuantity {
            item_id,
            quantity,
            respond_to,
        })
        .await
    }

    pub async fn apply_discount(
        &self,
        discount_type: impl Into<String>,
        value: f64,
        item_id: ProductId,
    ) -> Result<f64, CartError> {
        let discount_type = discount_type.into();
        self.request(|respond_to| CartCommand::ApplyDiscount {
            discount_type,
            value,
            item_id,
            respond_to,
        })
        .await
    }

    pub async fn view_cart(&self) -> Result<CartView, CartError> {
        self.request(|respond_to| CartCommand::ViewCart { respond_to })
            .await
    }

    /// Returns the cart as it was before checkout emptied it.
    pub async fn checkout(&self) -> Result<CartView, CartError> {
        self.request(|respond_to| CartCommand::Checkout { respond_to })
            .await
    }
}

fn engine_gone() -> CartError {
    CartError::store("cart engine")(StoreError::Unavailable("engine stopped".into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProductCreate;
    use crate::store::CatalogStore;
    use crate::{cart_actor, product_actor};

    #[tokio::test]
    async fn test_abandoned_command_performs_no_write() {
        let (products, catalog) = product_actor::new(8);
        let (lines, cart) = cart_actor::new(8);
        tokio::spawn(products.run(()));
        tokio::spawn(lines.run(()));
        catalog
            .insert_product(ProductCreate {
                product_id: ProductId(1),
                product_name: "Pen".into(),
                price: 2.0,
                stock: 5,
            })
            .await
            .unwrap();

        let (engine, handle) = CartEngine::new(CartService::new(catalog.clone(), cart), 4);
        tokio::spawn(engine.run());

        let (respond_to, response) = oneshot::channel();
        drop(response);
        handle
            .sender
            .send(CartCommand::AddItem {
                product_id: ProductId(1),
                quantity: 2,
                respond_to,
            })
            .await
            .unwrap();

        // Commands are applied in order, so the view runs after the abandoned add.
        assert!(handle.view_cart().await.unwrap().is_empty());
        assert_eq!(catalog.check_stock(ProductId(1)).await, Ok(5));
    }

    #[tokio::test]
    async fn test_abandoned_checkout_keeps_cart() {
        let (products, catalog) = product_actor::new(8);
        let (lines, cart) = cart_actor::new(8);
        tokio::spawn(products.run(()));
        tokio::spawn(lines.run(()));
        catalog
            .insert_product(ProductCreate {
                product_id: ProductId(3),
                product_name: "Ink".into(),
                price: 4.0,
                stock: 5,
            })
            .await
            .unwrap();

        let (engine, handle) = CartEngine::new(CartService::new(catalog.clone(), cart), 4);
        tokio::spawn(engine.run());
        handle.add_item(ProductId(3), 2).await.unwrap();

        let (respond_to, response) = oneshot::channel();
        drop(response);
        handle
            .sender
            .send(CartCommand::Checkout { respond_to })
            .await
            .unwrap();

        let view = handle.view_cart().await.unwrap();
        assert_eq!(view.items.len(), 1);
        assert_eq!(view.items[0].quantity, 2);
        assert_eq!(view.total_price, 8.0);
        assert_eq!(catalog.check_stock(ProductId(3)).await, Ok(3));
    }
}
