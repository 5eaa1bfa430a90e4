use crate::clients::ProductClient;
use crate::config::Config;
use crate::engine::{CartEngine, CartHandle, CartService};
use crate::{cart_actor, product_actor};
use tracing::{error, info};

/// The runtime orchestrator for the shop.
///
/// `ShopSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the two store actors and the cart engine
/// - **Dependency Wiring**: Handing store clients to the engine once both actors exist
///
/// # Architecture
///
/// - **Product Actor**: the catalog store
/// - **Cart-Line Actor**: the cart store
/// - **Cart Engine**: the single writer that runs every cart operation against both stores
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new(&Config::default());
///
/// system.cart.register_product(product).await?;
/// system.cart.add_item(ProductId(1), 3).await?;
///
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    /// Entry point for the eight cart operations.
    pub cart: CartHandle,

    /// Catalog administration: stock lookups and restocking outside the cart.
    ///
    /// Writes made here do not go through the engine. Cart operations must use [`Self::cart`].
    pub products: ProductClient,

    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ShopSystem {
    /// Spawns every task and returns once they are all running.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: &Config) -> Self {
        // 1. Create actors (no dependencies)
        let (product_actor, products) = product_actor::new(config.channel_capacity);
        let (cart_line_actor, cart_lines) = cart_actor::new(config.channel_capacity);

        // 2. The engine owns the only cart store client
        let service = CartService::with_max_unique_items(
            products.clone(),
            cart_lines,
            config.max_unique_items,
        );
        let (engine, cart) = CartEngine::new(service, config.channel_capacity);

        let handles = vec![
            tokio::spawn(product_actor.run(())),
            tokio::spawn(cart_line_actor.run(())),
            tokio::spawn(engine.run()),
        ];
        info!(
            max_unique_items = config.max_unique_items,
            channel_capacity = config.channel_capacity,
            "Shop system started"
        );

        Self {
            cart,
            products,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients held here closes the engine's channel; the engine then exits and
    /// drops its own store clients, which lets both actors stop. Clones handed out elsewhere
    /// (e.g. to the HTTP router) must be dropped first or this waits for them.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down shop system...");

        drop(self.cart);
        drop(self.products);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Task failed: {:?}", e);
                return Err(format!("Task failed: {:?}", e));
            }
        }

        info!("Shop system shutdown complete.");
        Ok(())
    }
}
