use std::collections::HashMap;
use std::hash::Hash;
use std::fmt::{Debug, Display};
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument, warn};

// =============================================================================
// 1. THE ABSTRACTION (Traits with Hooks and DTOs)
// =============================================================================

/// Trait that any domain entity must implement to be managed by ResourceActor
pub trait Entity: Clone + Send + Sync + 'static {
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;
    type CreateParams: Send + Sync + Debug;
    type Patch: Send + Sync + Debug;

    /// Get the ID of the entity
    fn id(&self) -> &Self::Id;

    /// Construct the full Entity from the ID and creation parameters
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    // --- Lifecycle Hooks ---

    fn on_create(&mut self) -> Result<(), String> { Ok(()) }
    fn on_update(&mut self, patch: Self::Patch) -> Result<(), String>;
}

/// Transport and store failures reported by a [`ResourceClient`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped the response")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Rejected: {0}")]
    Rejected(String),
}

// =============================================================================
// 2. THE GENERIC MESSAGES
// =============================================================================

pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

#[derive(Debug)]
pub enum ResourceRequest<T: Entity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    GetMany {
        ids: Vec<T::Id>,
        respond_to: Response<Vec<T>>,
    },
    Update {
        id: T::Id,
        patch: T::Patch,
        respond_to: Response<T>,
    },
    UpdateMany {
        patches: Vec<(T::Id, T::Patch)>,
        respond_to: Response<Vec<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

pub struct ResourceActor<T: Entity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    // Creation order, for List
    ids: Vec<T::Id>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Entity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            ids: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Serves requests until every [`ResourceClient`] has been dropped.
    pub async fn run(mut self) {
        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let _ = respond_to.send(self.handle_create(params));
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::GetMany { ids, respond_to } => {
                    let items = ids.iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Update { id, patch, respond_to } => {
                    let _ = respond_to.send(self.handle_update(id, patch));
                }
                ResourceRequest::UpdateMany { patches, respond_to } => {
                    let _ = respond_to.send(self.handle_update_many(patches));
                }
                ResourceRequest::List { respond_to } => {
                    let items = self.ids.iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    let _ = respond_to.send(Ok(items));
                }
            }
        }
        debug!("All clients dropped, actor stopping");
    }

    fn handle_create(&mut self, params: T::CreateParams) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        let mut item = T::from_create_params(id.clone(), params).map_err(FrameworkError::Rejected)?;
        item.on_create().map_err(FrameworkError::Rejected)?;
        self.store.insert(id.clone(), item.clone());
        self.ids.push(id);
        Ok(item)
    }

    fn handle_update(&mut self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        let item = self.store.get_mut(&id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))?;
        item.on_update(patch).map_err(FrameworkError::Rejected)?;
        Ok(item.clone())
    }

    /// Patches are applied to copies first; the store only changes once every
    /// patch in the batch has succeeded.
    #[instrument(skip_all, fields(count = patches.len()))]
    fn handle_update_many(&mut self, patches: Vec<(T::Id, T::Patch)>) -> Result<Vec<T>, FrameworkError> {
        let mut staged: Vec<T> = Vec::with_capacity(patches.len());
        for (id, patch) in patches {
            let index = match staged.iter().position(|item| item.id() == &id) {
                Some(index) => index,
                None => {
                    let current = self.store.get(&id).cloned().ok_or_else(|| {
                        warn!(%id, "Batch update references unknown item");
                        FrameworkError::NotFound(id.to_string())
                    })?;
                    staged.push(current);
                    staged.len() - 1
                }
            };
            staged[index].on_update(patch).map_err(FrameworkError::Rejected)?;
        }

        for item in &staged {
            self.store.insert(item.id().clone(), item.clone());
        }
        Ok(staged)
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

#[derive(Clone)]
pub struct ResourceClient<T: Entity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: Entity> ResourceClient<T> {
    pub(crate) fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(build(respond_to))
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to }).await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to }).await
    }

    pub async fn get_many(&self, ids: Vec<T::Id>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::GetMany { ids, respond_to }).await
    }

    pub async fn update(&self, id: T::Id, patch: T::Patch) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, patch, respond_to }).await
    }

    pub async fn update_many(&self, patches: Vec<(T::Id, T::Patch)>) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::UpdateMany { patches, respond_to }).await
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::List { respond_to }).await
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU64, Ordering};

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Counter {
        id: String,
        label: String,
        value: u32,
    }

    #[derive(Debug)]
    struct CounterCreate {
        label: String,
    }

    #[derive(Debug)]
    struct CounterPatch {
        value: u32,
    }

    impl Entity for Counter {
        type Id = String;
        type CreateParams = CounterCreate;
        type Patch = CounterPatch;

        fn id(&self) -> &String { &self.id }

        fn from_create_params(id: String, params: CounterCreate) -> Result<Self, String> {
            if params.label.is_empty() {
                return Err("label must not be empty".to_string());
            }
            Ok(Self { id, label: params.label, value: 0 })
        }

        fn on_update(&mut self, patch: CounterPatch) -> Result<(), String> {
            if patch.value > 100 {
                return Err(format!("value {} out of range", patch.value));
            }
            self.value = patch.value;
            Ok(())
        }
    }

    fn start() -> ResourceClient<Counter> {
        let counter = Arc::new(AtomicU64::new(1));
        let next_id = move || {
            let id = counter.fetch_add(1, Ordering::SeqCst);
            format!("counter_{}", id)
        };
        let (actor, client) = ResourceActor::new(10, next_id);
        tokio::spawn(actor.run());
        client
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_create_get_and_list() {
        let client = start();

        let first = client.create(CounterCreate { label: "a".into() }).await.unwrap();
        let second = client.create(CounterCreate { label: "b".into() }).await.unwrap();
        assert_eq!(first.id, "counter_1");
        assert_eq!(second.id, "counter_2");

        let fetched = client.get("counter_2".into()).await.unwrap().unwrap();
        assert_eq!(fetched, second);
        assert_eq!(client.get("counter_9".into()).await.unwrap(), None);

        let all = client.list().await.unwrap();
        assert_eq!(all, vec![first, second]);
    }

    #[tokio::test]
    async fn test_create_rejection_is_reported() {
        let client = start();
        let result = client.create(CounterCreate { label: String::new() }).await;
        assert_eq!(result, Err(FrameworkError::Rejected("label must not be empty".into())));
        assert!(client.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_many_skips_unknown_ids_and_keeps_request_order() {
        let client = start();
        let a = client.create(CounterCreate { label: "a".into() }).await.unwrap();
        let b = client.create(CounterCreate { label: "b".into() }).await.unwrap();

        let found = client
            .get_many(vec![b.id.clone(), "missing".into(), a.id.clone()])
            .await
            .unwrap();
        assert_eq!(found, vec![b, a]);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let client = start();
        let result = client.update("nope".into(), CounterPatch { value: 1 }).await;
        assert_eq!(result, Err(FrameworkError::NotFound("nope".into())));
    }

    #[tokio::test]
    async fn test_update_many_is_all_or_nothing() {
        let client = start();
        let a = client.create(CounterCreate { label: "a".into() }).await.unwrap();
        let b = client.create(CounterCreate { label: "b".into() }).await.unwrap();

        // Second patch is rejected, so the first must not be applied either
        let result = client
            .update_many(vec![
                (a.id.clone(), CounterPatch { value: 5 }),
                (b.id.clone(), CounterPatch { value: 500 }),
            ])
            .await;
        assert!(matches!(result, Err(FrameworkError::Rejected(_))));
        assert_eq!(client.get(a.id.clone()).await.unwrap().unwrap().value, 0);

        let result = client
            .update_many(vec![
                (a.id.clone(), CounterPatch { value: 5 }),
                ("missing".into(), CounterPatch { value: 1 }),
            ])
            .await;
        assert_eq!(result, Err(FrameworkError::NotFound("missing".into())));
        assert_eq!(client.get(a.id.clone()).await.unwrap().unwrap().value, 0);

        let updated = client
            .update_many(vec![
                (a.id.clone(), CounterPatch { value: 5 }),
                (b.id.clone(), CounterPatch { value: 7 }),
            ])
            .await
            .unwrap();
        assert_eq!(updated.iter().map(|c| c.value).collect::<Vec<_>>(), vec![5, 7]);
        assert_eq!(client.get(b.id).await.unwrap().unwrap().value, 7);
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_dropped() {
        let (actor, client) = ResourceActor::<Counter>::new(4, || "counter".to_string());
        let handle = tokio::spawn(actor.run());
        drop(client);
        handle.await.unwrap();
    }
}
