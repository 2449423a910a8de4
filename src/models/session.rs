//! Session model and role type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Application role, derived once at login and frozen for the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Reader,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Reader => "reader",
        }
    }
}

/// Server-held record binding a token to an identity, role and expiry.
///
/// Sessions are immutable once created; expiry is checked on every lookup.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub identity: String,
    pub role: Role,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Enforce the elevated role on admin-only routes.
    pub fn require_admin(&self) -> AppResult<()> {
        if self.role != Role::Admin {
            return Err(AppError::Forbidden("admin required".to_string()));
        }
        Ok(())
    }
}
