//! Remote collection and auth clients for the workshop coordination app.
//!
//! The application talks to its backend through two narrow contracts:
//! [`CollectionClient`] for live document collections and [`AuthClient`]
//! for credential sessions. Both are object-safe so the app can run against
//! the in-process [`MemoryBackend`] / [`MemoryAuth`] pair in tests and demos
//! and against a real service in production without touching screen logic.
//!
//! Collections push *full snapshots*: every mutation re-delivers the whole
//! (ordered, limited) result set to each watcher. Consumers reconcile, they
//! never diff.

mod auth;
mod collection;
mod error;
mod memory;
mod merge;
mod types;

pub use auth::{AuthClient, MemoryAuth, Session, SessionHandler};
pub use collection::{
    CollectionClient, CollectionOps, Direction, Document, Query, SnapshotHandler, WatchId,
};
pub use error::{AuthError, BackendError};
pub use memory::MemoryBackend;
pub use merge::merge_patch;
pub use types::{new_id, now_rfc3339};
