//! Atolye — jewelry workshop coordination, the headless client core.
//!
//! All application state and logic live here; a rendering layer only
//! mirrors state paths and emits requests. The crate is organized the
//! same way on every screen:
//!
//! - `model` — the persisted records (workshops, orders, templates)
//! - `reconcile` — the view-state reconciler that folds pushed backend
//!   snapshots into screen state without clobbering in-progress edits
//! - `state` — view-state structs the renderer reads, one path each
//! - `request` — request payloads the renderer emits, one path each
//! - `handlers` — async request handlers wired onto an [`akis::Akis`]
//!   engine via [`handlers::register_handlers`]

pub mod handlers;
pub mod model;
pub mod reconcile;
pub mod request;
pub mod state;

pub use handlers::{AppContext, register_handlers};
pub use reconcile::{AutoSelect, Reconciler};
