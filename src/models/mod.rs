//! Data models and request/response types

pub mod book;
pub mod loan;
pub mod log_entry;
pub mod member;
pub mod session;
