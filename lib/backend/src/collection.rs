use std::sync::Arc;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::warn;

use crate::error::BackendError;

/// Handle for an active snapshot watch, returned by subscribe calls and
/// passed back to stop delivery. Ids are process-unique across clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub(crate) u64);

static NEXT_WATCH: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

impl WatchId {
    pub(crate) fn next() -> Self {
        Self(NEXT_WATCH.fetch_add(1, std::sync::atomic::Ordering::Relaxed))
    }
}

/// Snapshot callback: receives the full (ordered, limited) result set of
/// the watched query on every change. Never a delta.
pub type SnapshotHandler = Arc<dyn Fn(Vec<Value>) + Send + Sync>;

/// Sort direction for [`Query::order_by`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Shape of a collection watch: optional single-field ordering and an
/// optional result cap, applied after ordering.
#[derive(Debug, Clone)]
pub struct Query {
    pub order_by: Option<(String, Direction)>,
    pub limit: Option<usize>,
}

impl Query {
    /// Whole collection in insertion order.
    pub fn unordered() -> Self {
        Self {
            order_by: None,
            limit: None,
        }
    }

    /// Newest-first on `field`, capped at `limit` documents.
    pub fn ordered_desc(field: impl Into<String>, limit: usize) -> Self {
        Self {
            order_by: Some((field.into(), Direction::Descending)),
            limit: Some(limit),
        }
    }
}

/// A record stored in a named backend collection.
///
/// An empty `id` marks a document that has not been persisted yet; the
/// backend assigns the id on create. The id lives next to the document on
/// the wire, so serialization strips it and deserialization injects it.
pub trait Document: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const COLLECTION: &'static str;

    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    fn is_new(&self) -> bool {
        self.id().is_empty()
    }
}

/// Erased contract against a document-collection backend.
///
/// Watches deliver the current snapshot synchronously at subscribe time,
/// then again after every mutation of the collection.
#[async_trait]
pub trait CollectionClient: Send + Sync {
    fn subscribe(&self, collection: &str, query: Query, handler: SnapshotHandler) -> WatchId;

    fn unsubscribe(&self, watch: WatchId);

    /// Persists a new document and returns its backend-assigned id. Any
    /// `id` field in `doc` is ignored.
    async fn create(&self, collection: &str, doc: Value) -> Result<String, BackendError>;

    /// Applies a merge patch to the document with `id`.
    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<(), BackendError>;

    async fn delete(&self, collection: &str, id: &str) -> Result<(), BackendError>;
}

/// Typed facade over an erased [`CollectionClient`] for one document type.
pub struct CollectionOps<T: Document> {
    client: Arc<dyn CollectionClient>,
    _marker: std::marker::PhantomData<fn() -> T>,
}

impl<T: Document> Clone for CollectionOps<T> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
            _marker: std::marker::PhantomData,
        }
    }
}

impl<T: Document> CollectionOps<T> {
    pub fn new(client: Arc<dyn CollectionClient>) -> Self {
        Self {
            client,
            _marker: std::marker::PhantomData,
        }
    }

    /// Watches the collection, delivering typed snapshots. Documents that
    /// fail to deserialize are skipped with a warning rather than tearing
    /// down the watch.
    pub fn subscribe<F>(&self, query: Query, handler: F) -> WatchId
    where
        F: Fn(Vec<T>) + Send + Sync + 'static,
    {
        self.client.subscribe(
            T::COLLECTION,
            query,
            Arc::new(move |docs| {
                let records = docs
                    .into_iter()
                    .filter_map(|doc| match serde_json::from_value::<T>(doc) {
                        Ok(record) => Some(record),
                        Err(err) => {
                            warn!(
                                collection = T::COLLECTION,
                                error = %err,
                                "skipping undecodable document in snapshot"
                            );
                            None
                        }
                    })
                    .collect();
                handler(records);
            }),
        )
    }

    pub fn unsubscribe(&self, watch: WatchId) {
        self.client.unsubscribe(watch);
    }

    pub async fn create(&self, record: &T) -> Result<String, BackendError> {
        let mut doc = serde_json::to_value(record)?;
        if let Some(fields) = doc.as_object_mut() {
            fields.remove("id");
        }
        self.client.create(T::COLLECTION, doc).await
    }

    /// Persists `record` over the stored document, keyed by its id. The
    /// full serialization goes out as the merge patch, so a field a
    /// record wants cleared must serialize as explicit `null`; a field
    /// the record type skips serializing is retained as stored.
    pub async fn update(&self, record: &T) -> Result<(), BackendError> {
        let mut doc = serde_json::to_value(record)?;
        if let Some(fields) = doc.as_object_mut() {
            fields.remove("id");
        }
        self.client.update(T::COLLECTION, record.id(), doc).await
    }

    pub async fn delete(&self, id: &str) -> Result<(), BackendError> {
        self.client.delete(T::COLLECTION, id).await
    }
}
