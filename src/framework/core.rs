//! # Core Actor Framework
//!
//! Generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: the trait a resource type implements to be managed.
//! - [`ResourceActor`]: the generic actor owning a store of entities.
//! - [`ResourceClient`]: the generic handle for talking to an actor.
//! - [`FrameworkError`]: plumbing errors (closed actor, missing entity).
//!
//! ## Why generic?
//!
//! The message loop — receive, dispatch, respond — is identical for every
//! resource the crate manages. Writing it once against [`ActorEntity`] means
//! a new resource costs one trait impl, not another copy of the plumbing.
//! Associated types keep it safe: a `Product` actor cannot be handed a
//! `QuoteCreate` payload, the compiler refuses.
//!
//! ## Concurrency model
//!
//! Each [`ResourceActor`] runs in its own Tokio task and drains its mailbox
//! sequentially, so the internal `HashMap` store needs no lock. Parallelism
//! comes from running many actors, not from sharing state.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use async_trait::async_trait;

/// Contract a resource type satisfies to be managed by a [`ResourceActor`].
///
/// # Hooks and late binding
///
/// The trait is `#[async_trait]` so lifecycle hooks can call *other* actors.
/// Dependencies arrive through the `Context` associated type, injected into
/// [`ResourceActor::run`] rather than into a constructor: actors are created
/// first, wired afterwards, which is what lets two actors reference each
/// other's clients without a chicken-and-egg problem.
///
/// `on_create` and `on_delete` have do-nothing defaults; implement them only
/// when creation or removal has side conditions.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier for this entity (e.g. String, Uuid, u64).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a new instance.
    type CreateParams: Send + Sync + Debug;

    /// Payload applied to an existing instance.
    type UpdateParams: Send + Sync + Debug;

    /// Resource-specific operations beyond CRUD (e.g. `AdjustStock`).
    type Action: Send + Sync + Debug;

    /// Result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook. Use `()` when none.
    type Context: Send + Sync;

    /// Builds the full entity from the generated ID and the payload.
    /// Called synchronously, before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Runs immediately after the entity is built, before it is stored.
    /// Failing here aborts the create.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Applies an update payload.
    async fn on_update(
        &mut self,
        update: Self::UpdateParams,
        _ctx: &Self::Context,
    ) -> Result<(), String>;

    /// Runs immediately before the entity is removed. Failing here aborts
    /// the delete.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Handles a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String>;
}

/// Errors raised by the actor plumbing itself (as opposed to domain errors,
/// which travel as [`FrameworkError::Custom`] strings and are re-typed at the
/// client boundary).
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// One-shot response channel used by actors to answer a request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Messages a [`ResourceClient`] sends to its [`ResourceActor`].
///
/// The variants are the standard resource lifecycle — create, read (one or
/// all), update, delete — plus `Action` for operations that do not fit the
/// CRUD mold. Payload types come from the [`ActorEntity`] associated types,
/// so every variant is checked against the specific resource at compile time.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    /// Snapshot of every stored entity, in unspecified order. The catalog
    /// views and the dashboard work from this.
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

/// The server half: owns the store and the receiving end of the mailbox.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates an actor and its paired client. The actor does nothing until
    /// [`run`](Self::run) is spawned.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the message loop until every client is dropped.
    ///
    /// `context` is handed to each entity hook, which is how entities reach
    /// dependencies wired after actor construction.
    pub async fn run(mut self, context: T::Context) {
        // "Product" rather than "matstock::model::product::Product" in logs.
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = (self.next_id_fn)();

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    debug!(entity_type, size = self.store.len(), "List");
                    let items = self.store.values().cloned().collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    if let Some(item) = self.store.get_mut(&id) {
                        if let Err(e) = item.on_update(update, &context).await {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        info!(entity_type, %id, "Updated");
                        let _ = respond_to.send(Ok(item.clone()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    if let Some(item) = self.store.get(&id) {
                        if let Err(e) = item.on_delete(&context).await {
                            warn!(entity_type, %id, error = %e, "on_delete failed");
                            let _ = respond_to.send(Err(FrameworkError::Custom(e)));
                            continue;
                        }
                        self.store.remove(&id);
                        info!(entity_type, %id, size = self.store.len(), "Deleted");
                        let _ = respond_to.send(Ok(()));
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    if let Some(item) = self.store.get_mut(&id) {
                        let result = item
                            .handle_action(action, &context)
                            .await
                            .map_err(FrameworkError::Custom);
                        match &result {
                            Ok(_) => info!(entity_type, %id, "Action ok"),
                            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                        }
                        let _ = respond_to.send(result);
                    } else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                    }
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

/// The client half: a cheap, cloneable handle that turns method calls into
/// mailbox messages and awaits the one-shot answer.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Update {
                id,
                update,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Delete { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;

    // A deliberately tiny entity: a labelled bin holding loose units.

    #[derive(Clone, Debug, PartialEq)]
    struct Bin {
        id: String,
        label: String,
        units: u32,
    }

    #[derive(Debug)]
    struct BinCreate {
        label: String,
    }

    #[derive(Debug)]
    struct BinUpdate {
        label: Option<String>,
    }

    #[derive(Debug)]
    enum BinAction {
        Put(u32),
        Take(u32),
    }

    #[async_trait]
    impl ActorEntity for Bin {
        type Id = String;
        type CreateParams = BinCreate;
        type UpdateParams = BinUpdate;
        type Action = BinAction;
        type ActionResult = u32;
        type Context = ();

        fn from_create_params(id: String, params: BinCreate) -> Result<Self, String> {
            if params.label.is_empty() {
                return Err("bin label must not be empty".to_string());
            }
            Ok(Self {
                id,
                label: params.label,
                units: 0,
            })
        }

        async fn on_update(&mut self, update: BinUpdate, _ctx: &()) -> Result<(), String> {
            if let Some(label) = update.label {
                self.label = label;
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: BinAction, _ctx: &()) -> Result<u32, String> {
            match action {
                BinAction::Put(n) => {
                    self.units += n;
                    Ok(self.units)
                }
                BinAction::Take(n) => {
                    if n > self.units {
                        return Err(format!("only {} units in bin", self.units));
                    }
                    self.units -= n;
                    Ok(self.units)
                }
            }
        }
    }

    fn spawn_bin_actor() -> ResourceClient<Bin> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("bin_{}", id)
        };
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn full_lifecycle_round_trip() {
        let client = spawn_bin_actor();

        let id = client
            .create(BinCreate {
                label: "offcuts".into(),
            })
            .await
            .unwrap();
        assert_eq!(id, "bin_1");

        let level = client.perform_action(id.clone(), BinAction::Put(7)).await.unwrap();
        assert_eq!(level, 7);
        let level = client.perform_action(id.clone(), BinAction::Take(3)).await.unwrap();
        assert_eq!(level, 4);

        let updated = client
            .update(
                id.clone(),
                BinUpdate {
                    label: Some("returns".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.label, "returns");

        client.delete(id.clone()).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn list_returns_every_stored_entity() {
        let client = spawn_bin_actor();

        for label in ["a", "b", "c"] {
            client
                .create(BinCreate {
                    label: label.into(),
                })
                .await
                .unwrap();
        }

        let mut labels: Vec<String> = client
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|bin| bin.label)
            .collect();
        labels.sort();
        assert_eq!(labels, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn domain_errors_travel_as_custom() {
        let client = spawn_bin_actor();
        let id = client
            .create(BinCreate {
                label: "scrap".into(),
            })
            .await
            .unwrap();

        let err = client
            .perform_action(id, BinAction::Take(1))
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::Custom("only 0 units in bin".into()));

        let rejected = client.create(BinCreate { label: String::new() }).await;
        assert!(matches!(rejected, Err(FrameworkError::Custom(_))));
    }

    #[tokio::test]
    async fn missing_ids_are_not_found() {
        let client = spawn_bin_actor();

        let err = client
            .update(
                "bin_99".to_string(),
                BinUpdate {
                    label: Some("x".into()),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("bin_99".to_string()));

        let err = client.delete("bin_99".to_string()).await.unwrap_err();
        assert_eq!(err, FrameworkError::NotFound("bin_99".to_string()));
    }
}
