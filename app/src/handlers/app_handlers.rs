//! App lifecycle handler implementations.

use std::sync::Arc;

use akis::StateStore;
use atolye_backend::Session;
use tracing::info;

use super::AppContext;
use crate::request::NavigateReq;
use crate::state::{AppRoute, AuthPhase, AuthState, UserProfile};

pub(super) fn profile(session: &Session) -> UserProfile {
    UserProfile {
        uid: session.uid.clone(),
        email: session.email.clone(),
        display_name: session.display_name.clone(),
    }
}

/// Handle `app/initialize`.
///
/// Registers the session-changed listener that keeps `auth/state`
/// aligned with the backend session, and seeds the initial route. A lost
/// session redirects to the login route from here, whatever screen is up.
pub async fn handle_initialize(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    let listener_store = Arc::clone(store);
    let watch = ctx.auth.on_session_changed(Arc::new(move |session| match session {
        Some(session) => {
            listener_store.set(
                AuthState::PATH,
                AuthState {
                    phase: AuthPhase::Authenticated,
                    user: Some(profile(&session)),
                    busy: false,
                    error: None,
                },
            );
        }
        None => {
            listener_store.set(AuthState::PATH, AuthState::signed_out());
            listener_store.set(AppRoute::PATH, AppRoute(AppRoute::LOGIN.to_string()));
        }
    }));

    if let Ok(mut watches) = ctx.watches.lock()
        && let Some(old) = watches.session.replace(watch)
    {
        ctx.auth.unsubscribe(old);
    }

    let route = if ctx.auth.current_session().is_some() {
        AppRoute::WORKSHOPS
    } else {
        AppRoute::LOGIN
    };
    store.set(AppRoute::PATH, AppRoute(route.to_string()));
    info!(route, "app initialized");
}

/// Handle `app/navigate`. Gated routes require a session.
pub async fn handle_navigate(req: &NavigateReq, store: &Arc<StateStore>) {
    let authenticated = store
        .get(AuthState::PATH)
        .and_then(|v| {
            v.downcast_ref::<AuthState>()
                .map(|a| a.phase == AuthPhase::Authenticated)
        })
        .unwrap_or(false);

    let to = if AppRoute::is_gated(&req.to) && !authenticated {
        AppRoute::LOGIN.to_string()
    } else {
        req.to.clone()
    };
    store.set(AppRoute::PATH, AppRoute(to));
}
