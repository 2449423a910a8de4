//! Loan activity log model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row from the trigger-maintained `loan_log` table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LogEntry {
    pub id: i32,
    pub loan_id: Option<i32>,
    pub member_id: Option<i32>,
    pub book_id: Option<i32>,
    pub action: String,
    pub logged_at: DateTime<Utc>,
}
