//! Loan model and related types

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Loan row joined with member and book names, from `vw_loans_overview`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LoanOverview {
    pub loan_id: i32,
    pub member_id: i32,
    pub member_name: String,
    pub book_id: i32,
    pub book_title: String,
    pub loan_date: DateTime<Utc>,
    pub returned: bool,
    pub return_date: Option<NaiveDate>,
}

/// Create loan request
#[derive(Debug, Deserialize)]
pub struct CreateLoan {
    pub member_id: Option<i32>,
    pub book_id: Option<i32>,
}

/// Partial update request; absent fields are left untouched
#[derive(Debug, Deserialize)]
pub struct UpdateLoan {
    pub member_id: Option<i32>,
    pub book_id: Option<i32>,
    pub return_date: Option<NaiveDate>,
}

/// Status filter for loan listings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoanStatus {
    InProgress,
    Returned,
}

impl LoanStatus {
    /// Parse a `?status=` value. Unrecognized values mean "no filter",
    /// so callers fall back to the full listing instead of rejecting.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "in_progress" => Some(LoanStatus::InProgress),
            "returned" => Some(LoanStatus::Returned),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LoanQuery {
    pub status: Option<String>,
}
