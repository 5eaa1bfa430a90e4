//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the core component that manages the lifecycle
//! and state of entities. It implements the "Server" side of the Actor Model, processing
//! messages sequentially and ensuring exclusive access to the entity store.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// This struct is the "Server" half of the actor. It owns the state (`store`) and
/// the receiver end of the channel. Each actor processes its own messages *sequentially*
/// in a loop, so the store needs no `Mutex` or `RwLock`: every request observes the
/// complete effect of the requests before it and none of the ones after it.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `ResourceActor::new()` to get the `actor` (server) and `client` (interface).
/// 2.  **Wire**: Pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: Spawn the actor's run loop in a background task.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Sku { code: u32 }
/// #[derive(Debug)] struct SkuCreate { code: u32 }
/// #[derive(Debug)] struct SkuUpdate;
/// #[derive(Debug)] enum SkuAction {}
/// #[derive(Debug, thiserror::Error)] #[error("sku error")] struct SkuError;
///
/// #[async_trait]
/// impl ActorEntity for Sku {
///     type Id = u32;
///     type Create = SkuCreate;
///     type Update = SkuUpdate;
///     type Action = SkuAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = SkuError;
///
///     fn from_create_params(params: SkuCreate) -> Result<Self, Self::Error> { Ok(Self { code: params.code }) }
///     fn id(&self) -> u32 { self.code }
///     async fn on_update(&mut self, _: SkuUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: SkuAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Sku>::new(10);
///     tokio::spawn(actor.run(()));
///
///     assert_eq!(client.create(SkuCreate { code: 7 }).await.unwrap(), 7);
///     assert!(client.create(SkuCreate { code: 7 }).await.is_err());
/// }
/// ```
///
/// # Implementation Details
///
/// The actor keeps a `HashMap` (`store`) from IDs to entities and a `Vec` (`order`) of IDs in
/// insertion order, which is the order `List` answers in.
///
/// * **Create**: builds the entity, reads its key, rejects a key already present with
///   [`FrameworkError::AlreadyExists`], runs `on_create`, then stores it.
/// * **Update / Action**: mutate a *copy* of the stored entity and write it back only when the
///   hook succeeds, so a failed hook leaves no partial change behind.
/// * **Delete / Clear**: run `on_delete` first; `Clear` removes nothing unless every hook passes.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the MPSC channel. If the channel is full,
    /// calls to the client wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            order: Vec::new(),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until the channel closes.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook. This allows entities
    /// to access external dependencies (like other clients) that were created *after*
    /// the actor was instantiated but *before* the loop started.
    pub async fn run(mut self, context: T::Context) {
        // Just the type name, e.g. "Product" instead of "shop_cart::model::product::Product"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Exists { id, respond_to } => {
                    let found = self.store.contains_key(&id);
                    debug!(entity_type, %id, found, "Exists");
                    let _ = respond_to.send(Ok(found));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Count { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "Count");
                    let _ = respond_to.send(Ok(self.store.len()));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = match self.store.get(&id) {
                        Some(current) => {
                            let mut item = current.clone();
                            match item.on_update(update, &context).await {
                                Ok(()) => {
                                    self.store.insert(id.clone(), item.clone());
                                    info!(entity_type, %id, "Updated");
                                    Ok(item)
                                }
                                Err(e) => {
                                    warn!(entity_type, %id, error = %e, "Update failed");
                                    Err(FrameworkError::entity(e))
                                }
                            }
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = match self.store.get(&id) {
                        Some(item) => match item.on_delete(&context).await {
                            Ok(()) => {
                                self.store.remove(&id);
                                self.order.retain(|existing| existing != &id);
                                info!(entity_type, %id, size = self.store.len(), "Deleted");
                                Ok(())
                            }
                            Err(e) => {
                                warn!(entity_type, %id, error = %e, "on_delete failed");
                                Err(FrameworkError::entity(e))
                            }
                        },
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Clear { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "Clear");
                    let result = self.clear(&context).await;
                    match &result {
                        Ok(removed) => info!(entity_type, removed, "Cleared"),
                        Err(e) => warn!(entity_type, error = %e, "Clear failed"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = match self.store.get(&id) {
                        Some(current) => {
                            let mut item = current.clone();
                            match item.handle_action(action, &context).await {
                                Ok(outcome) => {
                                    self.store.insert(id.clone(), item);
                                    info!(entity_type, %id, "Action ok");
                                    Ok(outcome)
                                }
                                Err(e) => {
                                    warn!(entity_type, %id, error = %e, "Action failed");
                                    Err(FrameworkError::entity(e))
                                }
                            }
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            Err(FrameworkError::NotFound(id.to_string()))
                        }
                    };
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn create(
        &mut self,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        let mut item = T::from_create_params(params).map_err(FrameworkError::entity)?;
        let id = item.id();
        if self.store.contains_key(&id) {
            return Err(FrameworkError::AlreadyExists(id.to_string()));
        }
        item.on_create(context)
            .await
            .map_err(FrameworkError::entity)?;
        self.store.insert(id.clone(), item);
        self.order.push(id.clone());
        Ok(id)
    }

    async fn clear(&mut self, context: &T::Context) -> Result<usize, FrameworkError> {
        for id in &self.order {
            if let Some(item) = self.store.get(id) {
                item.on_delete(context)
                    .await
                    .map_err(FrameworkError::entity)?;
            }
        }
        let removed = self.store.len();
        self.store.clear();
        self.order.clear();
        Ok(removed)
    }
}
