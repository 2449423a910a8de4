//! Books repository for database operations

use sqlx::postgres::PgConnectOptions;
use sqlx::Connection;

use crate::{
    error::AppResult,
    models::book::{Book, UpdateBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    options: PgConnectOptions,
}

impl BooksRepository {
    pub fn new(options: PgConnectOptions) -> Self {
        Self { options }
    }

    /// List all books, ascending by id
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let mut conn = super::connect(&self.options).await?;
        let rows = sqlx::query_as::<_, Book>(
            "SELECT id, title, author, isbn, quantity FROM books ORDER BY id",
        )
        .fetch_all(&mut conn)
        .await;
        let _ = conn.close().await;
        Ok(rows?)
    }

    /// Insert a book and return the assigned id
    pub async fn create(
        &self,
        title: &str,
        author: Option<&str>,
        isbn: Option<&str>,
        quantity: i32,
    ) -> AppResult<i32> {
        let mut conn = super::connect(&self.options).await?;
        let id = sqlx::query_scalar::<_, i32>(
            "INSERT INTO books (title, author, isbn, quantity) VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(title)
        .bind(author)
        .bind(isbn)
        .bind(quantity)
        .fetch_one(&mut conn)
        .await;
        let _ = conn.close().await;
        Ok(id?)
    }

    /// Partial update; absent fields keep their stored value
    pub async fn update(&self, id: i32, book: &UpdateBook) -> AppResult<()> {
        let mut conn = super::connect(&self.options).await?;
        let result = sqlx::query(
            "UPDATE books SET title = COALESCE($1, title), author = COALESCE($2, author), \
             isbn = COALESCE($3, isbn), quantity = COALESCE($4, quantity) WHERE id = $5",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.isbn)
        .bind(book.quantity)
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
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&mut conn)
            .await;
        let _ = conn.close().await;
        result?;
        Ok(())
    }
}
