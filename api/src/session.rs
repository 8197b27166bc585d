//! Process-wide sign-in session.
//!
//! The server serves a single signed-in user at a time. The session only holds
//! a user id; the profile is read from the store on every lookup so role
//! changes take effect without signing in again.

use crate::config::StoreConfig;
use crate::store::DocumentStore;
use crate::store::StoreError;
use crate::user::AuthUser;
use dioxus_logger::tracing::info;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
pub struct Session {
    uid: RwLock<Option<String>>,
}

impl Session {
    pub fn new(uid: Option<String>) -> Self {
        Self {
            uid: RwLock::new(uid),
        }
    }

    /// The signed-in user, `None` when signed out or the user no longer exists.
    pub async fn current_user(
        &self,
        store: &impl DocumentStore,
    ) -> Result<Option<AuthUser>, StoreError> {
        let Some(uid) = self.uid.read().await.clone() else {
            return Ok(None);
        };
        let snapshot = store.snapshot().await?;
        Ok(snapshot.user(&uid).cloned())
    }

    pub async fn sign_in(
        &self,
        store: &impl DocumentStore,
        uid: &str,
    ) -> Result<AuthUser, StoreError> {
        let uid = uid.trim();
        let snapshot = store.snapshot().await?;
        let user = snapshot
            .user(uid)
            .cloned()
            .ok_or_else(|| StoreError::UnknownUser(uid.to_string()))?;

        *self.uid.write().await = Some(user.uid.clone());
        info!("signed in {} as {:?}", user.uid, user.role);
        Ok(user)
    }

    pub async fn sign_out(&self) {
        if let Some(uid) = self.uid.write().await.take() {
            info!("signed out {}", uid);
        }
    }
}

/// The shared session, seeded from `PHARMACY_SESSION_UID` on first use.
pub async fn global() -> Arc<Session> {
    static SESSION: OnceCell<Arc<Session>> = OnceCell::const_new();

    SESSION
        .get_or_init(|| async { Arc::new(Session::new(StoreConfig::from_env().session_uid)) })
        .await
        .clone()
}
