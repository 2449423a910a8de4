//! Repository layer for database operations
//!
//! Every operation opens a fresh connection with the service credentials,
//! runs exactly one parameterized statement and releases the connection
//! before returning. There is no pool and no reuse across requests.

pub mod books;
pub mod loans;
pub mod logs;
pub mod members;

use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::Connection;

use crate::error::AppResult;

/// Main repository struct holding the service connect options
#[derive(Clone)]
pub struct Repository {
    pub members: members::MembersRepository,
    pub books: books::BooksRepository,
    pub loans: loans::LoansRepository,
    pub logs: logs::LogsRepository,
}

impl Repository {
    /// Create a new repository for the given connect options
    pub fn new(options: PgConnectOptions) -> Self {
        Self {
            members: members::MembersRepository::new(options.clone()),
            books: books::BooksRepository::new(options.clone()),
            loans: loans::LoansRepository::new(options.clone()),
            logs: logs::LogsRepository::new(options),
        }
    }
}

pub(crate) async fn connect(options: &PgConnectOptions) -> AppResult<PgConnection> {
    Ok(PgConnection::connect_with(options).await?)
}
