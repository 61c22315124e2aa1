//! Auth handler implementations.

use std::sync::Arc;

use akis::StateStore;
use atolye_backend::AuthError;
use tracing::warn;

use super::app_handlers::profile;
use super::AppContext;
use crate::request::{LoginReq, SignupReq};
use crate::state::{
    AppRoute, AuthPhase, AuthState, OrdersView, TemplatesView, WorkshopsView,
};

fn auth_error_message(err: &AuthError) -> String {
    match err {
        AuthError::InvalidCredentials => "E-posta veya şifre hatalı.",
        AuthError::EmailAlreadyInUse => "Bu e-posta adresi zaten kullanımda.",
        AuthError::Failed(_) => "Giriş yapılırken bir hata oluştu. Lütfen tekrar deneyin.",
    }
    .to_string()
}

fn current(store: &StateStore) -> AuthState {
    store
        .get(AuthState::PATH)
        .and_then(|v| v.downcast_ref::<AuthState>().cloned())
        .unwrap_or_else(AuthState::signed_out)
}

// Phase and user carry over: a failed re-login does not invalidate the
// session the auth client still holds. Only the session-changed stream
// and logout downgrade the phase.
fn busy(store: &StateStore) {
    let mut state = current(store);
    state.busy = true;
    state.error = None;
    store.set(AuthState::PATH, state);
}

fn failed(store: &StateStore, err: &AuthError) {
    warn!(error = %err, "auth request failed");
    let mut state = current(store);
    state.busy = false;
    state.error = Some(auth_error_message(err));
    store.set(AuthState::PATH, state);
}

/// Handle `auth/login`.
pub async fn handle_login(req: &LoginReq, ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    busy(store);
    match ctx.auth.login(&req.email, &req.password).await {
        Ok(session) => {
            store.set(
                AuthState::PATH,
                AuthState {
                    phase: AuthPhase::Authenticated,
                    user: Some(profile(&session)),
                    busy: false,
                    error: None,
                },
            );
            store.set(AppRoute::PATH, AppRoute(AppRoute::WORKSHOPS.to_string()));
        }
        Err(err) => failed(store, &err),
    }
}

/// Handle `auth/signup`.
pub async fn handle_signup(req: &SignupReq, ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    busy(store);
    match ctx
        .auth
        .signup(&req.email, &req.password, &req.display_name)
        .await
    {
        Ok(session) => {
            store.set(
                AuthState::PATH,
                AuthState {
                    phase: AuthPhase::Authenticated,
                    user: Some(profile(&session)),
                    busy: false,
                    error: None,
                },
            );
            store.set(AppRoute::PATH, AppRoute(AppRoute::WORKSHOPS.to_string()));
        }
        Err(err) => failed(store, &err),
    }
}

/// Handle `auth/logout`. Screen view state is dropped so nothing from
/// the old session survives into the next one.
pub async fn handle_logout(ctx: &Arc<AppContext>, store: &Arc<StateStore>) {
    if let Err(err) = ctx.auth.logout().await {
        warn!(error = %err, "logout failed");
    }
    store.set(AuthState::PATH, AuthState::signed_out());
    store.set(AppRoute::PATH, AppRoute(AppRoute::LOGIN.to_string()));
    store.remove(WorkshopsView::PATH);
    store.remove(OrdersView::PATH);
    store.remove(TemplatesView::PATH);
}
