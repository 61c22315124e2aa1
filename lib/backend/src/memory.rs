use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::collection::{CollectionClient, Direction, Query, SnapshotHandler, WatchId};
use crate::error::BackendError;
use crate::merge::merge_patch;
use crate::types::new_id;

struct Watcher {
    id: WatchId,
    collection: String,
    query: Query,
    handler: SnapshotHandler,
}

/// In-process [`CollectionClient`] with full-snapshot fan-out.
///
/// Documents live in insertion order per collection; every mutation
/// re-delivers each watcher its ordered, limited view of the collection.
/// `reject_writes` injects failures per collection for error-path tests.
#[derive(Default)]
pub struct MemoryBackend {
    collections: Mutex<BTreeMap<String, Vec<Value>>>,
    watchers: Mutex<Vec<Watcher>>,
    rejected: Mutex<HashSet<String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent create/update/delete on `collection` fail
    /// with [`BackendError::Rejected`].
    pub fn reject_writes(&self, collection: &str) {
        if let Ok(mut rejected) = self.rejected.lock() {
            rejected.insert(collection.to_string());
        }
    }

    /// Clears a prior [`reject_writes`](Self::reject_writes).
    pub fn restore_writes(&self, collection: &str) {
        if let Ok(mut rejected) = self.rejected.lock() {
            rejected.remove(collection);
        }
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .lock()
            .map(|c| c.get(collection).map_or(0, Vec::len))
            .unwrap_or(0)
    }

    fn check_writable(&self, collection: &str) -> Result<(), BackendError> {
        let rejected = self
            .rejected
            .lock()
            .map_err(|_| BackendError::Unavailable("backend lock poisoned".into()))?;
        if rejected.contains(collection) {
            return Err(BackendError::Rejected(format!(
                "writes to '{collection}' are rejected"
            )));
        }
        Ok(())
    }

    fn snapshot_for(docs: &[Value], query: &Query) -> Vec<Value> {
        let mut snapshot: Vec<Value> = docs.to_vec();
        if let Some((field, direction)) = &query.order_by {
            snapshot.sort_by(|a, b| {
                let ord = cmp_field(a, b, field);
                match direction {
                    Direction::Ascending => ord,
                    Direction::Descending => ord.reverse(),
                }
            });
        }
        if let Some(limit) = query.limit {
            snapshot.truncate(limit);
        }
        snapshot
    }

    /// Fans the current state of `collection` out to its watchers. Handlers
    /// run outside the locks so they may call back into the backend.
    fn notify(&self, collection: &str) {
        let mut deliveries: Vec<(SnapshotHandler, Vec<Value>)> = Vec::new();
        {
            let collections = match self.collections.lock() {
                Ok(guard) => guard,
                Err(_) => return,
            };
            let watchers = match self.watchers.lock() {
                Ok(guard) => guard,
                Err(_) => return,
            };
            let docs = collections.get(collection).map_or(&[][..], Vec::as_slice);
            for watcher in watchers.iter().filter(|w| w.collection == collection) {
                deliveries.push((
                    watcher.handler.clone(),
                    Self::snapshot_for(docs, &watcher.query),
                ));
            }
        }
        for (handler, snapshot) in deliveries {
            handler(snapshot);
        }
    }
}

fn cmp_field(a: &Value, b: &Value, field: &str) -> Ordering {
    let left = a.get(field);
    let right = b.get(field);
    match (left, right) {
        (Some(Value::String(l)), Some(Value::String(r))) => l.cmp(r),
        (Some(Value::Number(l)), Some(Value::Number(r))) => l
            .as_f64()
            .partial_cmp(&r.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(l), Some(r)) => l.to_string().cmp(&r.to_string()),
        (Some(_), None) => Ordering::Greater,
        (None, Some(_)) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

#[async_trait]
impl CollectionClient for MemoryBackend {
    fn subscribe(&self, collection: &str, query: Query, handler: SnapshotHandler) -> WatchId {
        let id = WatchId::next();
        let initial = {
            let collections = self.collections.lock();
            let mut watchers = match self.watchers.lock() {
                Ok(guard) => guard,
                Err(_) => return id,
            };
            watchers.push(Watcher {
                id,
                collection: collection.to_string(),
                query: query.clone(),
                handler: handler.clone(),
            });
            collections
                .map(|c| {
                    Self::snapshot_for(
                        c.get(collection).map_or(&[][..], Vec::as_slice),
                        &query,
                    )
                })
                .unwrap_or_default()
        };
        debug!(collection, watch = id.0, "collection watch registered");
        handler(initial);
        id
    }

    fn unsubscribe(&self, watch: WatchId) {
        if let Ok(mut watchers) = self.watchers.lock() {
            watchers.retain(|w| w.id != watch);
        }
    }

    async fn create(&self, collection: &str, mut doc: Value) -> Result<String, BackendError> {
        self.check_writable(collection)?;
        let id = new_id();
        match doc.as_object_mut() {
            Some(fields) => {
                fields.insert("id".to_string(), Value::String(id.clone()));
            }
            None => {
                return Err(BackendError::Rejected(
                    "document must be a JSON object".to_string(),
                ));
            }
        }
        {
            let mut collections = self
                .collections
                .lock()
                .map_err(|_| BackendError::Unavailable("backend lock poisoned".into()))?;
            collections.entry(collection.to_string()).or_default().push(doc);
        }
        debug!(collection, %id, "document created");
        self.notify(collection);
        Ok(id)
    }

    async fn update(&self, collection: &str, id: &str, patch: Value) -> Result<(), BackendError> {
        self.check_writable(collection)?;
        {
            let mut collections = self
                .collections
                .lock()
                .map_err(|_| BackendError::Unavailable("backend lock poisoned".into()))?;
            let docs = collections
                .get_mut(collection)
                .ok_or_else(|| BackendError::NotFound(format!("{collection}/{id}")))?;
            let doc = docs
                .iter_mut()
                .find(|d| d.get("id").and_then(Value::as_str) == Some(id))
                .ok_or_else(|| BackendError::NotFound(format!("{collection}/{id}")))?;
            merge_patch(doc, &patch);
            // the id is addressing, not payload; a patch never moves a document
            if let Some(fields) = doc.as_object_mut() {
                fields.insert("id".to_string(), Value::String(id.to_string()));
            }
        }
        debug!(collection, id, "document updated");
        self.notify(collection);
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), BackendError> {
        self.check_writable(collection)?;
        let removed = {
            let mut collections = self
                .collections
                .lock()
                .map_err(|_| BackendError::Unavailable("backend lock poisoned".into()))?;
            match collections.get_mut(collection) {
                Some(docs) => {
                    let before = docs.len();
                    docs.retain(|d| d.get("id").and_then(Value::as_str) != Some(id));
                    before != docs.len()
                }
                None => false,
            }
        };
        // deleting an absent document is not an error
        if removed {
            debug!(collection, id, "document deleted");
            self.notify(collection);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// tests
// ---------------------------------------------------------------------------
