use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::collection::WatchId;
use crate::error::AuthError;
use crate::types::new_id;

/// An authenticated user, as reported by the auth backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub uid: String,
    pub email: String,
    pub display_name: String,
}

/// Session-change callback. Fired with the current session at registration
/// time, then on every login and logout.
pub type SessionHandler = Arc<dyn Fn(Option<Session>) + Send + Sync>;

/// Contract against the credential backend.
#[async_trait]
pub trait AuthClient: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    async fn signup(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Session, AuthError>;

    async fn logout(&self) -> Result<(), AuthError>;

    fn on_session_changed(&self, handler: SessionHandler) -> WatchId;

    fn unsubscribe(&self, watch: WatchId);

    fn current_session(&self) -> Option<Session>;
}

struct UserRecord {
    uid: String,
    password: String,
    display_name: String,
}

/// In-process [`AuthClient`] backed by a plain user table.
#[derive(Default)]
pub struct MemoryAuth {
    users: Mutex<BTreeMap<String, UserRecord>>,
    current: Mutex<Option<Session>>,
    listeners: Mutex<Vec<(WatchId, SessionHandler)>>,
}

impl MemoryAuth {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a known account without signing it in.
    pub fn register_user(&self, email: &str, password: &str, display_name: &str) {
        if let Ok(mut users) = self.users.lock() {
            users.insert(
                email.to_string(),
                UserRecord {
                    uid: new_id(),
                    password: password.to_string(),
                    display_name: display_name.to_string(),
                },
            );
        }
    }

    fn set_session(&self, session: Option<Session>) {
        let handlers: Vec<SessionHandler> = {
            let Ok(mut current) = self.current.lock() else {
                return;
            };
            *current = session.clone();
            match self.listeners.lock() {
                Ok(listeners) => listeners.iter().map(|(_, h)| h.clone()).collect(),
                Err(_) => return,
            }
        };
        for handler in handlers {
            handler(session.clone());
        }
    }
}

#[async_trait]
impl AuthClient for MemoryAuth {
    async fn login(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let session = {
            let users = self
                .users
                .lock()
                .map_err(|_| AuthError::Failed("auth lock poisoned".into()))?;
            let user = users.get(email).ok_or(AuthError::InvalidCredentials)?;
            if user.password != password {
                return Err(AuthError::InvalidCredentials);
            }
            Session {
                uid: user.uid.clone(),
                email: email.to_string(),
                display_name: user.display_name.clone(),
            }
        };
        info!(email, "user logged in");
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    async fn signup(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
    ) -> Result<Session, AuthError> {
        let session = {
            let mut users = self
                .users
                .lock()
                .map_err(|_| AuthError::Failed("auth lock poisoned".into()))?;
            if users.contains_key(email) {
                return Err(AuthError::EmailAlreadyInUse);
            }
            let uid = new_id();
            users.insert(
                email.to_string(),
                UserRecord {
                    uid: uid.clone(),
                    password: password.to_string(),
                    display_name: display_name.to_string(),
                },
            );
            Session {
                uid,
                email: email.to_string(),
                display_name: display_name.to_string(),
            }
        };
        info!(email, "user signed up");
        self.set_session(Some(session.clone()));
        Ok(session)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        info!("user logged out");
        self.set_session(None);
        Ok(())
    }

    fn on_session_changed(&self, handler: SessionHandler) -> WatchId {
        let id = WatchId::next();
        let current = self.current_session();
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.push((id, handler.clone()));
        }
        handler(current);
        id
    }

    fn unsubscribe(&self, watch: WatchId) {
        if let Ok(mut listeners) = self.listeners.lock() {
            listeners.retain(|(id, _)| *id != watch);
        }
    }

    fn current_session(&self) -> Option<Session> {
        self.current.lock().ok().and_then(|s| s.clone())
    }
}

// ---------------------------------------------------------------------------
// tests
// ---------------------------------------------------------------------------
