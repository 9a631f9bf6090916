//! # Core Actor Framework
//!
//! Generic building blocks for the foodcart store: every table (restaurants, categories,
//! products, menu items, orders) lives inside its own [`ResourceActor`] and is reached
//! through a cloneable [`ResourceClient`].
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: the trait a stored record implements.
//! - [`ResourceActor`]: the mailbox loop that owns one table.
//! - [`ResourceClient`]: the request handle used by the typed clients.
//! - [`FrameworkError`]: transport failures plus the boxed domain error of a failed hook.

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks, DTOs, and Actions)
// =============================================================================

/// Trait that any stored record must implement to be managed by a [`ResourceActor`].
///
/// # Async & Context
/// Hooks are async so they can consult other actors (an order resolving its products,
/// a menu item checking that its restaurant exists). The `Context` type carries those
/// clients and is handed to [`ResourceActor::run`] rather than to the constructor, so
/// actors can be created first and wired afterwards.
///
/// # Atomicity
/// A request is handled start to finish before the next one is received. Whatever a
/// hook decides is therefore applied as a unit: a failing `on_create` stores nothing,
/// and an action that reads and rewrites a field cannot interleave with another
/// request for the same table.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Identifier, generated by the actor from a `u32` sequence.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// Payload for creating a new record.
    type Create: Send + Sync + Debug;

    /// Payload for updating an existing record.
    type Update: Send + Sync + Debug;

    /// Record-specific operations beyond CRUD.
    type Action: Send + Sync + Debug;

    /// Result of [`ActorEntity::Action`].
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected at `run()` time. Use `()` when there are none.
    type Context: Send + Sync;

    /// Error returned by the hooks. It travels back to the caller boxed inside
    /// [`FrameworkError::EntityError`] and can be recovered with [`FrameworkError::downcast`].
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the record from its id and creation payload. Synchronous, runs before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Runs after construction and before the record is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies an update in place. On error the stored record is left as it was.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Runs before the record is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Checked against every stored record before a new one is inserted.
    fn check_unique(&self, _existing: &Self) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a record-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

impl FrameworkError {
    /// Recovers the typed hook error carried by [`FrameworkError::EntityError`].
    ///
    /// Any other variant, or an entity error of a different type, is handed back unchanged.
    pub fn downcast<E: std::error::Error + 'static>(self) -> Result<E, FrameworkError> {
        match self {
            FrameworkError::EntityError(inner) => inner
                .downcast::<E>()
                .map(|e| *e)
                .map_err(FrameworkError::EntityError),
            other => Err(other),
        }
    }
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Messages understood by a [`ResourceActor`].
///
/// The CRUD variants map onto the usual table operations. `Create` and `Update` reply
/// with the record as stored, so callers never need a follow-up `Get`. `List` returns a
/// snapshot of every stored record, which is what the read-side queries (available
/// products, new orders) are computed from. `Action` carries the record-specific
/// operations.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        update: T::Update,
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

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The actor that owns one table.
///
/// Each actor processes its own messages sequentially, so the `store` needs no lock.
/// Updates and actions run against a scratch copy of the record that only replaces the
/// stored one when the hook succeeds.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates the actor and its client. `buffer_size` is the mailbox capacity; senders
    /// wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // "Order" rather than "foodcart::model::order::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);
                    self.next_id += 1;

                    let result = self.create(id.clone(), params, &context).await;
                    match &result {
                        Ok(_) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, %id, error = %e, "Create failed"),
                    }
                    let _ = respond_to.send(result);
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
                    let Some(stored) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = stored.clone();
                    match draft.on_update(update, &context).await {
                        Ok(()) => {
                            *stored = draft.clone();
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(draft));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Update failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let Some(item) = self.store.get(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    if let Err(e) = item.on_delete(&context).await {
                        warn!(entity_type, %id, error = %e, "on_delete failed");
                        let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        continue;
                    }
                    self.store.remove(&id);
                    info!(entity_type, %id, size = self.store.len(), "Deleted");
                    let _ = respond_to.send(Ok(()));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(stored) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let mut draft = stored.clone();
                    let result = draft
                        .handle_action(action, &context)
                        .await
                        .map_err(|e| FrameworkError::EntityError(Box::new(e)));
                    match &result {
                        Ok(_) => {
                            *stored = draft;
                            info!(entity_type, %id, "Action ok");
                        }
                        Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
                    }
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Builds, validates and stores a record. Nothing is stored unless every step passes.
    async fn create(
        &mut self,
        id: T::Id,
        params: T::Create,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        let boxed = |e: T::Error| FrameworkError::EntityError(Box::new(e));

        let mut item = T::from_create_params(id.clone(), params).map_err(boxed)?;
        item.on_create(context).await.map_err(boxed)?;
        if let Some(conflict) = self
            .store
            .values()
            .find_map(|existing| item.check_unique(existing).err())
        {
            return Err(boxed(conflict));
        }
        self.store.insert(id, item.clone());
        Ok(item)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`ResourceActor`].
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

// Manual impl: a derive would require `T: Clone` on the wrapper as well.
impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Stores a new record and returns it exactly as stored.
    pub async fn create(&self, params: T::Create) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action {
            id,
            action,
            respond_to,
        })
        .await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Dish {
        id: u32,
        name: String,
        on_sale: bool,
    }

    #[derive(Debug)]
    struct DishCreate {
        name: String,
    }

    #[derive(Debug)]
    struct DishUpdate {
        name: Option<String>,
    }

    #[derive(Debug)]
    enum DishAction {
        Toggle,
        Fail,
    }

    #[derive(Debug, thiserror::Error, PartialEq)]
    enum DishError {
        #[error("blank name")]
        Blank,
        #[error("duplicate name {0}")]
        Duplicate(String),
        #[error("refused")]
        Refused,
    }

    #[async_trait]
    impl ActorEntity for Dish {
        type Id = u32;
        type Create = DishCreate;
        type Update = DishUpdate;
        type Action = DishAction;
        type ActionResult = bool;
        type Context = ();
        type Error = DishError;

        fn from_create_params(id: u32, params: DishCreate) -> Result<Self, DishError> {
            Ok(Self {
                id,
                name: params.name,
                on_sale: false,
            })
        }

        async fn on_create(&mut self, _ctx: &()) -> Result<(), DishError> {
            if self.name.is_empty() {
                return Err(DishError::Blank);
            }
            Ok(())
        }

        async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), DishError> {
            if let Some(name) = update.name {
                self.name = name;
            }
            if self.name.is_empty() {
                return Err(DishError::Blank);
            }
            Ok(())
        }

        fn check_unique(&self, existing: &Self) -> Result<(), DishError> {
            if existing.name == self.name {
                return Err(DishError::Duplicate(self.name.clone()));
            }
            Ok(())
        }

        async fn handle_action(&mut self, action: DishAction, _ctx: &()) -> Result<bool, DishError> {
            match action {
                DishAction::Toggle => {
                    self.on_sale = !self.on_sale;
                    Ok(self.on_sale)
                }
                DishAction::Fail => {
                    self.on_sale = !self.on_sale;
                    Err(DishError::Refused)
                }
            }
        }
    }

    fn spawn_dishes() -> ResourceClient<Dish> {
        let (actor, client) = ResourceActor::new(10);
        tokio::spawn(actor.run(()));
        client
    }

    #[tokio::test]
    async fn test_crud_and_actions() {
        let client = spawn_dishes();

        let created = client
            .create(DishCreate {
                name: "Cheeseburger".into(),
            })
            .await
            .unwrap();
        let id = created.id;
        assert_eq!(id, 1);
        assert_eq!(created.name, "Cheeseburger");
        assert!(!created.on_sale);

        let toggled = client.perform_action(id, DishAction::Toggle).await.unwrap();
        assert!(toggled);

        let dish = client.get(id).await.unwrap().unwrap();
        assert!(dish.on_sale);

        let updated = client
            .update(
                id,
                DishUpdate {
                    name: Some("Double cheeseburger".into()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.name, "Double cheeseburger");

        client.delete(id).await.unwrap();
        assert!(client.get(id).await.unwrap().is_none());
        assert!(matches!(
            client.delete(id).await,
            Err(FrameworkError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_failed_create_stores_nothing() {
        let client = spawn_dishes();

        let err = client
            .create(DishCreate { name: String::new() })
            .await
            .unwrap_err();
        assert_eq!(err.downcast::<DishError>().unwrap(), DishError::Blank);
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_check_unique_rejects_duplicates() {
        let client = spawn_dishes();
        client
            .create(DishCreate { name: "Fries".into() })
            .await
            .unwrap();

        let err = client
            .create(DishCreate { name: "Fries".into() })
            .await
            .unwrap_err();
        assert_eq!(
            err.downcast::<DishError>().unwrap(),
            DishError::Duplicate("Fries".into())
        );
        assert_eq!(client.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_failed_update_and_action_keep_stored_state() {
        let client = spawn_dishes();
        let id = client
            .create(DishCreate { name: "Cola".into() })
            .await
            .unwrap()
            .id;

        let result = client
            .update(id, DishUpdate { name: Some(String::new()) })
            .await;
        assert!(result.is_err());

        let result = client.perform_action(id, DishAction::Fail).await;
        assert!(result.is_err());

        let dish = client.get(id).await.unwrap().unwrap();
        assert_eq!(dish.name, "Cola");
        assert!(!dish.on_sale);
    }

    #[tokio::test]
    async fn test_create_replies_with_the_stored_record() {
        let client = spawn_dishes();

        // A failed create still uses up its id
        let _ = client.create(DishCreate { name: String::new() }).await;
        let created = client
            .create(DishCreate { name: "Shake".into() })
            .await
            .unwrap();
        assert_eq!(created.id, 2);

        // An action queued right behind the create does not change the reply
        let toggled = client.perform_action(created.id, DishAction::Toggle).await.unwrap();
        assert!(toggled);
        assert!(!created.on_sale);

        let stored = client.get(created.id).await.unwrap().unwrap();
        assert_eq!(stored, Dish { on_sale: true, ..created });
    }

    #[tokio::test]
    async fn test_downcast_returns_other_variants_unchanged() {
        let err = FrameworkError::ActorClosed.downcast::<DishError>();
        assert!(matches!(err, Err(FrameworkError::ActorClosed)));
    }
}
