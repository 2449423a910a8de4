//! Library member model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Member row from the database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub email: Option<String>,
}

/// Create member request
#[derive(Debug, Deserialize)]
pub struct CreateMember {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub email: Option<String>,
}

/// Partial update request; absent fields are left untouched
#[derive(Debug, Deserialize)]
pub struct UpdateMember {
    pub name: Option<String>,
    pub kind: Option<String>,
    pub email: Option<String>,
}
