//! Runtime configuration.
//!
//! Defaults can be overridden from `SHOP_CART_*` environment variables:
//! `SHOP_CART_HOST`, `SHOP_CART_PORT`, `SHOP_CART_CHANNEL_CAPACITY` and
//! `SHOP_CART_MAX_UNIQUE_ITEMS`.

use ::config::{Config as ConfigLib, Environment};
use serde::Deserialize;
use thiserror::Error;

use crate::engine::DEFAULT_MAX_UNIQUE_ITEMS;

/// Prefix for configuration environment variables.
pub const CONFIG_ENV_PREFIX: &str = "SHOP_CART";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface the HTTP listener binds to.
    pub host: String,
    pub port: u16,
    /// Mailbox size of every actor and of the cart engine.
    pub channel_capacity: usize,
    /// Cap on distinct products in the cart.
    pub max_unique_items: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            channel_capacity: 32,
            max_unique_items: DEFAULT_MAX_UNIQUE_ITEMS,
        }
    }
}

impl Config {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::load(Environment::with_prefix(CONFIG_ENV_PREFIX))
    }

    /// Defaults overridden by `source`. Values are parsed into numbers where they look like one.
    pub fn load(source: Environment) -> Result<Self, ConfigError> {
        let config: Config = ConfigLib::builder()
            .add_source(source.try_parsing(true))
            .build()?
            .try_deserialize()?;

        if config.channel_capacity == 0 {
            return Err(ConfigError::Invalid {
                key: "channel_capacity",
                value: "0".into(),
            });
        }
        Ok(config)
    }

    /// `host:port`, ready for a listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
