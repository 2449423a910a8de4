//! Activity log repository (read-only)

use sqlx::postgres::PgConnectOptions;
use sqlx::Connection;

use crate::{error::AppResult, models::log_entry::LogEntry};

#[derive(Clone)]
pub struct LogsRepository {
    options: PgConnectOptions,
}

impl LogsRepository {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// Last 500 log rows, newest first
    pub async fn recent(&self) -> AppResult<Vec<LogEntry>> {
        let mut conn = super::connect(&self.options).await?;
        let rows = sqlx::query_as::<_, LogEntry>(
            "SELECT id, loan_id, member_id, book_id, action, logged_at \
             FROM loan_log ORDER BY id DESC LIMIT 500",
        )
        .fetch_all(&mut conn)
        .await;
        let _ = conn.close().await;
        Ok(rows?)
    }
}
