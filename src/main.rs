//! Serves the shop over HTTP until Ctrl-C.

use shop_cart::config::Config;
use shop_cart::http;
use shop_cart::lifecycle::{setup_tracing, ShopSystem};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    setup_tracing();

    let config = Config::from_env()?;
    let system = ShopSystem::new(&config);
    let app = http::router(system.cart.clone());

    let listener = tokio::net::TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "Shop cart listening");

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!(error = %e, "Could not listen for Ctrl-C");
            }
            info!("Ctrl-C received");
        })
        .await;
    if let Err(e) = &served {
        error!(error = %e, "Server error");
    }

    system.shutdown().await?;
    served?;
    Ok(())
}
