//! View-state structs, one store path each.
//!
//! The renderer subscribes to these paths and draws what it reads; it
//! never derives state of its own. Every struct serializes to camelCase
//! JSON so a platform shell can mirror it verbatim.

mod app;
mod auth;
mod orders;
mod templates;
mod workshops;

pub use app::AppRoute;
pub use auth::{AuthPhase, AuthState, UserProfile};
pub use orders::{OrderForm, OrdersView};
pub use templates::TemplatesView;
pub use workshops::WorkshopsView;
