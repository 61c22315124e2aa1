use std::any::Any;
use std::future::Future;
use std::sync::Arc;

use crate::router::Router;
use crate::store::StateStore;
use crate::value::{StateValue, SubscriptionId};

/// Akis — the client-side state engine facade.
///
/// Three primitives, all path-based:
/// - `get(path)` — read state at a path (Arc, zero-copy)
/// - `emit(path, payload)` — send a request to its handler(s)
/// - `subscribe(pattern)` — subscribe to state changes
///
/// # Examples
///
/// ```ignore
/// let app = Akis::new();
///
/// app.on("auth/login", |path, payload, store| async move {
///     store.set("auth/state", AuthState::authenticated());
/// });
///
/// app.subscribe("auth/#", |path, value| {
///     println!("{} changed", path);
/// });
///
/// app.emit("auth/login", LoginReq { .. }).await;
///
/// let state = app.get("auth/state").unwrap();
/// ```
pub struct Akis {
    store: Arc<StateStore>,
    router: Router,
}

impl Akis {
    /// Create a new Akis instance with empty state and no handlers.
    pub fn new() -> Self {
        Self {
            store: Arc::new(StateStore::new()),
            router: Router::new(),
        }
    }

    // ====================================================================
    // State — read
    // ====================================================================

    /// Read the state value at a path.
    ///
    /// Returns `None` if no value is set. The returned `StateValue` is an
    /// Arc clone (cheap, no data copy). Caller can downcast:
    ///
    /// ```ignore
    /// let v = app.get("auth/state")?;
    /// let auth = v.downcast_ref::<AuthState>()?;
    /// ```
    pub fn get(&self, path: &str) -> Option<StateValue> {
        self.store.get(path)
    }

    /// Check if a state value exists at the given path.
    pub fn contains(&self, path: &str) -> bool {
        self.store.contains(path)
    }

    // ====================================================================
    // Requests
    // ====================================================================

    /// Emit a request and wait for its handler(s) to complete.
    ///
    /// The payload is wrapped in `Arc` and passed to every handler
    /// registered for the exact path. Handlers execute sequentially.
    /// If no handler is registered, this is a silent no-op.
    pub async fn emit<T: Any + Send + Sync>(&self, path: &str, payload: T) {
        self.router
            .dispatch(path, Arc::new(payload), Arc::clone(&self.store))
            .await;
    }

    /// Register an async request handler for an exact path.
    ///
    /// The handler receives:
    /// - `path: String` — the request path
    /// - `payload: Arc<dyn Any + Send + Sync>` — type-erased payload (downcast inside)
    /// - `store: Arc<StateStore>` — state store for reading/writing state
    pub fn on<F, Fut>(&self, path: &str, handler: F)
    where
        F: Fn(String, Arc<dyn Any + Send + Sync>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.router.on(path, handler);
    }

    /// Check if any handler is registered for the given path.
    pub fn has_handler(&self, path: &str) -> bool {
        self.router.has_handler(path)
    }

    // ====================================================================
    // Subscriptions — observe state changes
    // ====================================================================

    /// Subscribe to state changes matching a pattern (exact path or
    /// `/#`-suffixed prefix).
    ///
    /// The handler is called synchronously on the thread that calls `set`.
    /// Returns a `SubscriptionId` for unsubscribing.
    pub fn subscribe<F>(&self, pattern: &str, handler: F) -> SubscriptionId
    where
        F: Fn(&str, &StateValue) + Send + Sync + 'static,
    {
        self.store.subscribe(pattern, handler)
    }

    /// Unsubscribe a handler by its ID.
    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.store.unsubscribe(id);
    }

    /// Get a reference to the underlying StateStore.
    ///
    /// Useful for handlers that need direct store access, or for testing.
    pub fn store(&self) -> &Arc<StateStore> {
        &self.store
    }
}

impl Default for Akis {
    fn default() -> Self {
        Self::new()
    }
}
