//! Credential verification and role resolution
//!
//! Identity is delegated entirely to PostgreSQL: a login attempt opens a
//! short-lived connection with the submitted credentials, and the role is
//! derived from membership in the configured database role.

use sqlx::postgres::PgConnection;
use sqlx::Connection;

use crate::{
    config::DatabaseConfig,
    error::{AppError, AppResult},
    models::session::Role,
};

#[derive(Clone)]
pub struct AuthService {
    database: DatabaseConfig,
    admin_role: String,
}

impl AuthService {
    pub fn new(database: DatabaseConfig, admin_role: String) -> Self {
        Self {
            database,
            admin_role,
        }
    }

    /// Verify credentials and derive the role in one step.
    ///
    /// The verification connection is closed before returning, on every path.
    pub async fn login(&self, user: &str, password: &str) -> AppResult<Role> {
        let mut conn = self.verify(user, password).await?;
        let role = self.resolve_role(&mut conn).await;
        let _ = conn.close().await;
        Ok(role)
    }

    /// Attempt to open a store connection as exactly the supplied identity.
    ///
    /// Every establishment failure collapses into one generic error so the
    /// response never reveals which part of the credential was wrong.
    async fn verify(&self, user: &str, password: &str) -> AppResult<PgConnection> {
        let options = self.database.connect_options_as(user, password);
        PgConnection::connect_with(&options).await.map_err(|e| {
            tracing::debug!("credential verification failed for {}: {:?}", user, e);
            AppError::Unauthenticated("invalid credentials".to_string())
        })
    }

    /// Check membership in the privileged database role.
    ///
    /// Fails closed: a resolver error must never grant elevated access.
    async fn resolve_role(&self, conn: &mut PgConnection) -> Role {
        let is_admin: bool =
            sqlx::query_scalar("SELECT pg_has_role(current_user, $1, 'member')")
                .bind(&self.admin_role)
                .fetch_one(conn)
                .await
                .unwrap_or(false);

        if is_admin {
            Role::Admin
        } else {
            Role::Reader
        }
    }
}
