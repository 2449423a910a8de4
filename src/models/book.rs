//! Book model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Book row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub quantity: i32,
}

/// Create book request
#[derive(Debug, Deserialize)]
pub struct CreateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    /// Defaults to 1 when omitted
    pub quantity: Option<i32>,
}

/// Partial update request; absent fields are left untouched
#[derive(Debug, Deserialize)]
pub struct UpdateBook {
    pub title: Option<String>,
    pub author: Option<String>,
    pub isbn: Option<String>,
    pub quantity: Option<i32>,
}
