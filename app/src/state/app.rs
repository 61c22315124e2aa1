//! Routing state — stored at `app/route`.

use serde::{Deserialize, Serialize};

/// The route the renderer should display. Gated routes fall back to
/// `/login` when no session is present; the navigate handler enforces
/// that, the renderer just follows this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppRoute(pub String);

impl AppRoute {
    pub const PATH: &'static str = "app/route";

    pub const LOGIN: &'static str = "/login";
    pub const WORKSHOPS: &'static str = "/";
    pub const ORDERS: &'static str = "/orders";
    pub const TEMPLATES: &'static str = "/templates";

    /// Routes that require an authenticated session.
    pub fn is_gated(route: &str) -> bool {
        route != Self::LOGIN
    }
}
