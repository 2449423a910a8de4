//! Loans repository for database operations

use chrono::Utc;
use sqlx::postgres::PgConnectOptions;
use sqlx::Connection;

use crate::{
    error::AppResult,
    models::loan::{LoanOverview, LoanStatus, UpdateLoan},
};

#[derive(Clone)]
pub struct LoansRepository {
    options: PgConnectOptions,
}

impl LoansRepository {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// List loans from the overview view, optionally narrowed by status
    pub async fn list(&self, status: Option<LoanStatus>) -> AppResult<Vec<LoanOverview>> {
        let sql = match status {
            Some(LoanStatus::InProgress) => {
                "SELECT * FROM vw_loans_overview WHERE returned = false ORDER BY loan_id"
            }
            Some(LoanStatus::Returned) => {
                "SELECT * FROM vw_loans_overview WHERE returned = true ORDER BY loan_id"
            }
            None => "SELECT * FROM vw_loans_overview ORDER BY loan_id",
        };

        let mut conn = super::connect(&self.options).await?;
        let rows = sqlx::query_as::<_, LoanOverview>(sql)
            .fetch_all(&mut conn)
            .await;
        let _ = conn.close().await;
        Ok(rows?)
    }

    /// Insert a loan and return the assigned id.
    ///
    /// Referential integrity is enforced by the schema; a violation surfaces
    /// as a database error carrying the constraint message.
    pub async fn create(&self, member_id: i32, book_id: i32) -> AppResult<i32> {
        let mut conn = super::connect(&self.options).await?;
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO loans (member_id, book_id) VALUES ($1, $2) RETURNING id",
        )
        .bind(member_id)
        .bind(book_id)
        .fetch_one(&mut conn)
        .await;
        let _ = conn.close().await;
        Ok(id?)
    }

    /// Partial update; absent fields keep their stored value
    pub async fn update(&self, id: i32, loan: &UpdateLoan) -> AppResult<()> {
        let mut conn = super::connect(&self.options).await?;
        let result = sqlx::query(
            "UPDATE loans SET member_id = COALESCE($1, member_id), \
             book_id = COALESCE($2, book_id), \
             return_date = COALESCE($3, return_date) WHERE id = $4",
        )
        .bind(loan.member_id)
        .bind(loan.book_id)
        .bind(loan.return_date)
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
        let result = sqlx::query("DELETE FROM loans WHERE id = $1")
            .bind(id)
            .execute(&mut conn)
            .await;
        let _ = conn.close().await;
        result?;
        Ok(())
    }

    /// Mark a loan returned with today's date.
    ///
    /// Unconditional: repeated calls keep overwriting the return date.
    pub async fn mark_returned(&self, id: i32) -> AppResult<()> {
        let today = Utc::now().date_naive();

        let mut conn = super::connect(&self.options).await?;
        let result = sqlx::query(
            "UPDATE loans SET returned = TRUE, return_date = $1 WHERE id = $2",
        )
        .bind(today)
        .bind(id)
        .execute(&mut conn)
        .await;
        let _ = conn.close().await;
        result?;
        Ok(())
    }
}
