//! The view-state reconciler.
//!
//! Every screen holds live data pushed from the backend as *full
//! snapshots*: each change re-delivers the entire (ordered, limited)
//! result set. The reconciler folds those pushes into screen state while
//! protecting the one thing a wholesale replace would destroy: the
//! record the user is currently working on.
//!
//! Two slots, deliberately decoupled:
//! - `records` — always exactly the latest snapshot, in delivered order
//! - `selected` — an owned working copy; snapshots never touch it while
//!   it is set, so in-progress edits survive any number of pushes
//!
//! Mutations flow back through the reconciler's [`CollectionOps`], and
//! the backend answers with the next snapshot; local state is not
//! optimistically rewritten, except for the save echo on `selected`.

use std::sync::{Mutex, MutexGuard};

use atolye_backend::{BackendError, CollectionOps, Document};
use tracing::debug;

/// What to do with `selected` when a snapshot arrives and nothing is
/// selected yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoSelect {
    /// Leave `selected` alone; selection is always explicit.
    None,
    /// Select a copy of the first record of the first non-empty snapshot.
    First,
}

pub struct Reconciler<T: Document> {
    ops: CollectionOps<T>,
    auto_select: AutoSelect,
    records: Vec<T>,
    selected: Option<T>,
}

impl<T: Document> Reconciler<T> {
    pub fn new(ops: CollectionOps<T>, auto_select: AutoSelect) -> Self {
        Self {
            ops,
            auto_select,
            records: Vec::new(),
            selected: None,
        }
    }

    /// The latest snapshot, in the order the backend delivered it.
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn selected(&self) -> Option<&T> {
        self.selected.as_ref()
    }

    /// Mutable access to the working copy, for field-level edits.
    pub fn selected_mut(&mut self) -> Option<&mut T> {
        self.selected.as_mut()
    }

    pub fn select(&mut self, record: Option<T>) {
        self.selected = record;
    }

    /// Selects a copy of the snapshot record with `id`, if present.
    pub fn select_by_id(&mut self, id: &str) {
        if let Some(record) = self.records.iter().find(|r| r.id() == id) {
            self.selected = Some(record.clone());
        }
    }

    /// Starts a new transient record: `defaults` with its id cleared.
    /// It exists only in `selected` until saved.
    pub fn begin_create(&mut self, mut defaults: T) {
        defaults.set_id(String::new());
        self.selected = Some(defaults);
    }

    /// Folds a pushed snapshot in: `records` is replaced wholesale.
    ///
    /// A set `selected` is never touched, even when the snapshot no
    /// longer contains a record with its id. Stale selections are the
    /// renderer's problem to surface, not the reconciler's to guess at.
    pub fn on_snapshot(&mut self, records: Vec<T>) {
        self.records = records;
        if self.selected.is_none()
            && self.auto_select == AutoSelect::First
            && !self.records.is_empty()
        {
            self.selected = Some(self.records[0].clone());
        }
    }

    /// Drops all state, for screen unmount.
    pub fn reset(&mut self) {
        self.records.clear();
        self.selected = None;
    }

    fn lock(this: &Mutex<Self>) -> Result<MutexGuard<'_, Self>, BackendError> {
        this.lock()
            .map_err(|_| BackendError::Unavailable("reconciler lock poisoned".into()))
    }

    /// Persists the working copy: empty id creates, otherwise updates.
    ///
    /// On success `selected` is echoed locally (with the backend-assigned
    /// id after a create) so the screen reflects the save before the next
    /// snapshot lands. On failure `selected` is left untouched and the
    /// error is returned for the handler to surface. No-op when nothing
    /// is selected.
    ///
    /// Takes the mutex rather than `&mut self` so the lock is released
    /// while the mutation is in flight; a snapshot delivered during the
    /// await reconciles normally instead of deadlocking.
    pub async fn save(this: &Mutex<Self>) -> Result<(), BackendError> {
        let (ops, record) = {
            let guard = Self::lock(this)?;
            let Some(record) = guard.selected.clone() else {
                return Ok(());
            };
            (guard.ops.clone(), record)
        };

        if record.is_new() {
            let id = ops.create(&record).await?;
            debug!(collection = T::COLLECTION, %id, "record created");
            let mut guard = Self::lock(this)?;
            let mut echoed = record;
            echoed.set_id(id);
            guard.selected = Some(echoed);
        } else {
            ops.update(&record).await?;
            debug!(collection = T::COLLECTION, id = record.id(), "record updated");
            let mut guard = Self::lock(this)?;
            guard.selected = Some(record);
        }
        Ok(())
    }

    /// Deletes the record with `id`.
    ///
    /// A matching `selected` is cleared synchronously *before* the delete
    /// is issued, so the screen never renders a working copy of a record
    /// that is going away. The delete error, if any, is propagated after.
    pub async fn remove(this: &Mutex<Self>, id: &str) -> Result<(), BackendError> {
        let ops = {
            let mut guard = Self::lock(this)?;
            if guard.selected.as_ref().is_some_and(|s| s.id() == id) {
                guard.selected = None;
            }
            guard.ops.clone()
        };
        ops.delete(id).await?;
        debug!(collection = T::COLLECTION, id, "record deleted");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// tests
// ---------------------------------------------------------------------------
