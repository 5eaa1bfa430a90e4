//! # Actor Framework
//!
//! This crate provides the foundational building blocks for type-safe, concurrent resource
//! stores in Rust. It implements a **Resource-Oriented Architecture (ROA)** pattern on top of
//! the **Actor Model**: every resource type (a product catalog, the lines of a cart) lives in
//! its own actor, which owns the state exclusively and applies requests one at a time.
//!
//! ### Resource-Oriented Architecture (ROA)
//!
//! - Standard operations (Create, Get, List, Count, Update, Delete, Clear) on well-defined resources
//! - Caller-supplied identity: an entity names its own key, duplicates are rejected
//! - Clean, uniform API surface across all resource types
//!
//! ### Actor Model
//!
//! - Isolated state (no shared memory, no locks)
//! - Message-passing concurrency
//! - Sequential processing within each actor: no request observes another's partial effects
//!
//! **Further Reading**:
//! - [Actor Model (Wikipedia)](https://en.wikipedia.org/wiki/Actor_model)
//! - [Actors in Rust](https://ryhl.io/blog/actors-with-tokio/) - Practical guide to implementing actors with Tokio
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Bin { code: u32, units: u32 }
//! #[derive(Debug)] struct BinCreate { code: u32, units: u32 }
//! #[derive(Debug)] struct BinUpdate { units: u32 }
//! #[derive(Debug)] enum BinAction { Take(u32) }
//! #[derive(Debug, thiserror::Error)]
//! #[error("only {0} units left")]
//! struct BinError(u32);
//!
//! #[async_trait]
//! impl ActorEntity for Bin {
//!     type Id = u32;
//!     type Create = BinCreate;
//!     type Update = BinUpdate;
//!     type Action = BinAction;
//!     type ActionResult = u32;
//!     type Context = ();
//!     type Error = BinError;
//!
//!     fn from_create_params(p: BinCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { code: p.code, units: p.units })
//!     }
//!     fn id(&self) -> u32 { self.code }
//!
//!     async fn on_update(&mut self, u: BinUpdate, _: &()) -> Result<(), Self::Error> {
//!         self.units = u.units;
//!         Ok(())
//!     }
//!
//!     async fn handle_action(&mut self, action: BinAction, _: &()) -> Result<u32, Self::Error> {
//!         match action {
//!             BinAction::Take(n) if n <= self.units => { self.units -= n; Ok(self.units) }
//!             BinAction::Take(_) => Err(BinError(self.units)),
//!         }
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = ResourceActor::<Bin>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let id = client.create(BinCreate { code: 4, units: 5 }).await.unwrap();
//!     assert_eq!(client.perform_action(id, BinAction::Take(3)).await.unwrap(), 2);
//!     assert!(client.perform_action(id, BinAction::Take(3)).await.is_err());
//!     assert_eq!(client.get(id).await.unwrap().unwrap().units, 2);
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! An entity whose hooks need another actor declares e.g. `type Context = ResourceClient<Other>;`
//! and receives it in every hook.
//!
//! ## Failure Atomicity
//!
//! `Update` and `Action` hooks run against a copy of the stored entity; the copy replaces the
//! original only when the hook returns `Ok`. `Clear` runs every `on_delete` hook before removing
//! anything. A rejected request therefore never leaves a half-applied change.
//!
//! ## Testing
//!
//! The [`mock`] module provides `MockClient`, which hands out a real `ResourceClient` answered
//! from a queue of expectations, for fast tests and failure injection.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
