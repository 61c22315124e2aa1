//! App lifecycle requests.

/// `app/initialize` — wires the session listener and seeds the route.
/// Emitted once at startup.
#[derive(Debug, Clone)]
pub struct InitializeReq;

impl InitializeReq {
    pub const PATH: &'static str = "app/initialize";
}

/// `app/navigate` — route change. Gated routes redirect to `/login`
/// when no session is present.
#[derive(Debug, Clone)]
pub struct NavigateReq {
    pub to: String,
}

impl NavigateReq {
    pub const PATH: &'static str = "app/navigate";
}
