//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter driven by `RUST_LOG`.
//!
//! - **Actor lifecycle**: start and shutdown of the product actor, the cart-line actor and the
//!   cart engine, each tagged with `entity_type`
//! - **Store requests**: one `debug` line per request, one `info`/`warn` line per outcome
//! - **Cart operations**: `#[instrument]` spans around every engine operation
//!
//! ```bash
//! RUST_LOG=info cargo run      # Outcomes only
//! RUST_LOG=debug cargo run     # Full payloads
//! RUST_LOG=shop_cart::engine=debug,info cargo run
//! ```
//!
//! Registering a product and adding it to the cart, at `info`:
//!
//! ```text
//! INFO Cart engine started max_unique_items=10
//! INFO Created entity_type="Product" id=product_1 size=1
//! INFO register_product: Product registered product_id=product_1
//! INFO Created entity_type="CartLine" id=product_1 size=1
//! INFO Action ok entity_type="Product" id=product_1
//! INFO commit_add: Item added stock=2 item_id=product_1
//! ```

use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Falls back to `info` when `RUST_LOG` is unset or invalid.
///
/// Safe to call more than once; only the first call installs anything.
pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "checkout:commit_checkout")
        .try_init();
}
