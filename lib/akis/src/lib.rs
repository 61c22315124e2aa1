//! Akis — the client-side state engine.
//!
//! A path-based state store with pub/sub driving a headless app core:
//! Rust owns all state and logic, the rendering platform only subscribes
//! to view paths and emits requests.
//!
//! # Three Primitives
//!
//! - `get(path)` — read state at a path, Arc zero-copy
//! - `emit(path, payload)` — send a request to its registered handler
//! - `subscribe(pattern)` — observe state changes
//!
//! # Path Addressing
//!
//! All state and requests live in a flat path namespace with `/` as
//! separator: `auth/state`, `app/route`, `workshops/view`,
//! `templates/save`. Subscription patterns are either exact paths or
//! prefix patterns ending in `#`: `workshops/#` matches everything under
//! `workshops/`, a bare `#` matches every path.
//!
//! # Example
//!
//! ```ignore
//! use akis::Akis;
//!
//! let app = Akis::new();
//!
//! app.on("app/initialize", |_, _, store| async move {
//!     store.set("app/route", "/login".to_string());
//! });
//!
//! app.subscribe("app/#", |path, _value| {
//!     println!("state changed: {}", path);
//! });
//!
//! app.emit("app/initialize", ()).await;
//! ```

mod app;
mod pattern;
mod router;
mod store;
mod value;

pub use app::Akis;
pub use pattern::pattern_matches;
pub use router::{BoxFuture, Router};
pub use store::{ChangeHandler, StateStore};
pub use value::{StateValue, SubscriptionId};
