//! Members repository for database operations

use sqlx::postgres::PgConnectOptions;
use sqlx::Connection;

use crate::{
    error::AppResult,
    models::member::{Member, UpdateMember},
};

#[derive(Clone)]
pub struct MembersRepository {
    options: PgConnectOptions,
}

impl MembersRepository {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// List all members, ascending by id
    pub async fn list(&self) -> AppResult<Vec<Member>> {
        let mut conn = super::connect(&self.options).await?;
        let rows = sqlx::query_as::<_, Member>(
            "SELECT id, name, kind, email FROM members ORDER BY id",
        )
        .fetch_all(&mut conn)
        .await;
        let _ = conn.close().await;
        Ok(rows?)
    }

    /// Insert a member and return the assigned id
    pub async fn create(
        &self,
        name: &str,
        kind: &str,
        email: Option<&str>,
    ) -> AppResult<i32> {
        let mut conn = super::connect(&self.options).await?;
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO members (name, kind, email) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(name)
        .bind(kind)
        .bind(email)
        .fetch_one(&mut conn)
        .await;
        let _ = conn.close().await;
        Ok(id?)
    }

    /// Partial update; absent fields keep their stored value
    pub async fn update(&self, id: i32, member: &UpdateMember) -> AppResult<()> {
        let mut conn = super::connect(&self.options).await?;
        let result = sqlx::query(
            "UPDATE members SET name = COALESCE($1, name), kind = COALESCE($2, kind), \
             email = COALESCE($3, email) WHERE id = $4",
        )
        .bind(&member.name)
        .bind(&member.kind)
        .bind(&member.email)
        .bind(id)
        .execute(&mut conn)
        .await;
        let _ = conn.close().await;
        result?;
        Ok(())
    }

    /// Delete by id; deleting an absent row is reported as success
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let mut conn = super::connect(&self.options).await?;
        let result = sqlx::query("DELETE FROM members WHERE id = $1")
            .bind(id)
            .execute(&mut conn)
            .await;
        let _ = conn.close().await;
        result?;
        Ok(())
    }
}
