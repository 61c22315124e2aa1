use std::any::Any;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::RwLock;

use std::sync::Arc;

use crate::pattern::pattern_matches;
use crate::value::{StateValue, SubscriptionId};

/// Callback type for state change notifications.
pub type ChangeHandler = Arc<dyn Fn(&str, &StateValue) + Send + Sync>;

/// Per-path state store with pattern-routed change subscriptions.
///
/// - `set(path, value)` stores a value and notifies all matching subscribers.
/// - `get(path)` reads the current value (Arc clone, cheap).
/// - `subscribe(pattern, handler)` registers a change handler.
/// - `unsubscribe(id)` removes a handler.
///
/// Patterns are exact paths or `/#`-suffixed prefixes (see
/// [`pattern_matches`]). Uses `BTreeMap` internally for ordered paths.
pub struct StateStore {
    /// Current state values, keyed by exact path.
    values: RwLock<BTreeMap<String, StateValue>>,
    /// Registered subscriptions, in registration order.
    handlers: RwLock<Vec<HandlerEntry>>,
    /// Monotonic counter for subscription IDs.
    next_id: AtomicU64,
}

struct HandlerEntry {
    id: SubscriptionId,
    pattern: String,
    handler: ChangeHandler,
}

impl StateStore {
    /// Create a new empty StateStore.
    pub fn new() -> Self {
        Self {
            values: RwLock::new(BTreeMap::new()),
            handlers: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Set a typed value at the given path and notify matching subscribers.
    ///
    /// Wraps the value in `StateValue` (Arc) internally.
    pub fn set<T: Any + Send + Sync>(&self, path: &str, value: T) {
        self.set_value(path, StateValue::new(value));
    }

    /// Set a pre-built StateValue at the given path and notify matching subscribers.
    pub fn set_value(&self, path: &str, value: StateValue) {
        {
            let mut values = self.values.write().unwrap();
            values.insert(path.to_string(), value.clone());
        }
        // Notify all subscribers whose pattern matches this path. Handlers
        // are collected under the lock but invoked outside it, so a handler
        // may itself call back into the store.
        let matched: Vec<ChangeHandler> = {
            let handlers = self.handlers.read().unwrap();
            handlers
                .iter()
                .filter(|e| pattern_matches(&e.pattern, path))
                .map(|e| Arc::clone(&e.handler))
                .collect()
        };
        for handler in matched {
            handler(path, &value);
        }
    }

    /// Get the current state value at the given path.
    ///
    /// Returns a cloned `StateValue` (Arc clone, cheap — no data copy).
    /// Returns `None` if no value is set at this path.
    pub fn get(&self, path: &str) -> Option<StateValue> {
        let values = self.values.read().unwrap();
        values.get(path).cloned()
    }

    /// Remove the state value at the given path.
    ///
    /// Returns the old value if present. Does NOT notify subscribers.
    pub fn remove(&self, path: &str) -> Option<StateValue> {
        let mut values = self.values.write().unwrap();
        values.remove(path)
    }

    /// Check if a value exists at the given path.
    pub fn contains(&self, path: &str) -> bool {
        let values = self.values.read().unwrap();
        values.contains_key(path)
    }

    /// Get the total number of stored paths.
    pub fn len(&self) -> usize {
        let values = self.values.read().unwrap();
        values.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Subscribe to state changes matching the given pattern.
    ///
    /// The handler is called synchronously whenever `set` or `set_value`
    /// is called on a path that matches the pattern.
    ///
    /// Returns a `SubscriptionId` that can be used to unsubscribe.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        self.handlers.write().unwrap().push(HandlerEntry {
            id,
            pattern: pattern.to_string(),
            handler: Arc::new(handler),
        });
        id
    }

    /// Unsubscribe a handler by its subscription ID.
    ///
    /// Unknown IDs are a no-op.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.handlers.write().unwrap().retain(|e| e.id != id);
    }

    /// Get all paths currently stored, in path order.
    pub fn paths(&self) -> Vec<String> {
        let values = self.values.read().unwrap();
        values.keys().cloned().collect()
    }
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}
