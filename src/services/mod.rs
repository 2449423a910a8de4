//! Authentication and session services

pub mod auth;
pub mod sessions;
