use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// A type-erased state value stored at a path.
///
/// State of any `Send + Sync` type goes into the store behind an `Arc`,
/// so handing a value to every subscriber is an atomic increment, never
/// a data copy. Readers get the concrete type back with
/// [`downcast_ref`](Self::downcast_ref).
#[derive(Clone)]
pub struct StateValue {
    inner: Arc<dyn Any + Send + Sync>,
}

impl StateValue {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }

    /// `None` when the stored value is not a `T`.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }
}

impl fmt::Debug for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateValue")
            .field("type_id", &(*self.inner).type_id())
            .finish()
    }
}

/// Unique handle for a subscription, returned by `StateStore::subscribe()`.
///
/// Use this to unsubscribe later via `StateStore::unsubscribe()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);
