//! In-memory session store
//!
//! Owned by the application state and shared across all request handlers.
//! Expiry is evaluated lazily on lookup; entries are only removed by an
//! explicit logout, so expired-but-unaccessed sessions stay in the map
//! until the process restarts.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::models::session::{Role, Session};

pub struct SessionStore {
    ttl: Duration,
    sessions: RwLock<HashMap<String, Session>>,
}

impl SessionStore {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Issue a fresh token for an authenticated identity.
    pub async fn create(&self, identity: &str, role: Role) -> (String, DateTime<Utc>) {
        let token = Uuid::new_v4().to_string();
        let expires_at = Utc::now() + self.ttl;
        let session = Session {
            identity: identity.to_string(),
            role,
            expires_at,
        };

        self.sessions.write().await.insert(token.clone(), session);
        (token, expires_at)
    }

    /// Look up a token. Returns `None` for unknown or expired tokens.
    ///
    /// Read-only: an expired entry is reported invalid but not evicted.
    pub async fn lookup(&self, token: &str) -> Option<Session> {
        let sessions = self.sessions.read().await;
        sessions
            .get(token)
            .filter(|s| Utc::now() < s.expires_at)
            .cloned()
    }

    /// Drop a token. Removing an absent token is not an error.
    pub async fn remove(&self, token: &str) {
        self.sessions.write().await.remove(token);
    }
}
