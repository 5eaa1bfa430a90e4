//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the shop's tasks.
//!
//! ## Dependency Injection
//!
//! Both store actors are created first, without dependencies. The cart engine is then built
//! from clones of their clients, so the wiring graph is acyclic:
//!
//! ```text
//! HTTP router ──► CartHandle ──► CartEngine ──► ProductClient ──► Product actor
//!                                          └──► CartClient    ──► CartLine actor
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all handles** - closes the engine's channel
//! 2. **Engine exits** - and drops its store clients
//! 3. **Actors detect closure** - `receiver.recv()` returns `None`
//! 4. **Await completion** - [`ShopSystem::shutdown`] joins every task
//!
//! ## Observability
//!
//! See [`setup_tracing`] in the [`tracing`] module.

pub mod shop_system;
pub mod tracing;

pub use self::shop_system::*;
pub use self::tracing::*;
