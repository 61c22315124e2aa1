use std::any::Any;
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::store::StateStore;

/// A boxed, `Send`-able future returned by request handlers.
pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Type-erased handler function stored in the router.
///
/// Takes owned values so the returned future can be `'static`:
/// - `String` — the request path
/// - `Arc<dyn Any + Send + Sync>` — type-erased request payload
/// - `Arc<StateStore>` — the state store for reading/writing state
type ErasedHandler =
    Arc<dyn Fn(String, Arc<dyn Any + Send + Sync>, Arc<StateStore>) -> BoxFuture + Send + Sync>;

/// Request router — maps exact request paths to async handlers.
///
/// Handlers are registered with `on(path, handler)` and dispatched with
/// `dispatch(path, payload, store)`. Multiple handlers may be registered
/// for the same path and are called sequentially in registration order.
///
/// # Examples
///
/// ```ignore
/// let router = Router::new();
/// router.on("auth/login", |path, payload, store| async move {
///     let req = payload.downcast_ref::<LoginReq>().unwrap();
///     // ...
/// });
///
/// router.dispatch("auth/login", Arc::new(req), store).await;
/// ```
pub struct Router {
    handlers: RwLock<HashMap<String, Vec<ErasedHandler>>>,
}

impl Router {
    /// Create a new empty router.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Register an async handler for an exact request path.
    pub fn on<F, Fut>(&self, path: &str, handler: F)
    where
        F: Fn(String, Arc<dyn Any + Send + Sync>, Arc<StateStore>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handler: ErasedHandler = Arc::new(
            move |path: String,
                  payload: Arc<dyn Any + Send + Sync>,
                  store: Arc<StateStore>|
                  -> BoxFuture { Box::pin(handler(path, payload, store)) },
        );
        self.handlers
            .write()
            .unwrap()
            .entry(path.to_string())
            .or_default()
            .push(handler);
    }

    /// Dispatch a request to its registered handlers.
    ///
    /// Handlers are called sequentially. If no handler is registered for
    /// the path, this is a no-op (logged at debug level).
    pub async fn dispatch(
        &self,
        path: &str,
        payload: Arc<dyn Any + Send + Sync>,
        store: Arc<StateStore>,
    ) {
        let matched: Vec<ErasedHandler> = {
            let handlers = self.handlers.read().unwrap();
            handlers.get(path).cloned().unwrap_or_default()
        };
        if matched.is_empty() {
            debug!(path, "no handler registered for request");
            return;
        }
        for handler in matched {
            handler(path.to_string(), Arc::clone(&payload), Arc::clone(&store)).await;
        }
    }

    /// Check if any handler is registered for the path.
    pub fn has_handler(&self, path: &str) -> bool {
        self.handlers.read().unwrap().contains_key(path)
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
