//! # Shop Cart
//!
//! A shopping-cart backend built from resource-oriented actors: a product catalog and a single
//! shared cart, with operations to register products, add, remove and update cart items, apply
//! discounts, view the cart and check out.
//!
//! ## Module Tour
//!
//! ### 1. The Stores ([`product_actor`], [`cart_actor`], [`clients`], [`store`])
//! Each store is a [`ResourceActor`](actor_framework::ResourceActor) that owns its records
//! exclusively. [`clients`] wraps the generic clients so they satisfy the narrow
//! [`store::CatalogStore`] and [`store::CartStore`] contracts.
//!
//! ### 2. The Engine ([`engine`])
//! The cart rules: stock reservation at add time, the distinct item cap, discounts and the
//! checkout protocol. A single task applies operations one at a time, so concurrent requests
//! never interleave their reads and writes.
//!
//! ### 3. The Orchestrator ([`lifecycle`], [`config`])
//! Spawns and wires the tasks, shuts them down, and sets up tracing.
//!
//! ### 4. The Interface ([`http`])
//! An `axum` router exposing the eight cart operations as JSON endpoints.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! SHOP_CART_PORT=9000 SHOP_CART_MAX_UNIQUE_ITEMS=5 cargo run
//! ```

pub mod cart_actor;
pub mod clients;
pub mod config;
pub mod engine;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
pub mod store;
