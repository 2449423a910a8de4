//! Biblioteca Library Management Backend
//!
//! A Rust REST API server for a small library: members, books, loans and
//! an activity log, with sessions authenticated against role-based
//! PostgreSQL credentials.

use std::sync::Arc;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use chrono::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::Repository;
use services::{auth::AuthService, sessions::SessionStore};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub sessions: Arc<SessionStore>,
    pub auth: AuthService,
    pub repository: Repository,
}

impl AppState {
    /// Build the state for a loaded configuration.
    ///
    /// The session store is created here, once per process, and lives for
    /// the lifetime of the server.
    pub fn new(config: AppConfig) -> Self {
        let sessions = SessionStore::new(Duration::seconds(config.auth.token_ttl_secs as i64));
        let auth = AuthService::new(config.database.clone(), config.auth.admin_role.clone());
        let repository = Repository::new(config.database.connect_options());

        Self {
            config: Arc::new(config),
            sessions: Arc::new(sessions),
            auth,
            repository,
        }
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        // Health check
        .route("/health", get(api::health::health_check))
        // Members
        .route("/users", get(api::members::list_members))
        .route("/users", post(api::members::create_member))
        .route("/users/:id", put(api::members::update_member))
        .route("/users/:id", delete(api::members::delete_member))
        // Books
        .route("/books", get(api::books::list_books))
        .route("/books", post(api::books::create_book))
        .route("/books/:id", put(api::books::update_book))
        .route("/books/:id", delete(api::books::delete_book))
        // Loans
        .route("/loans", get(api::loans::list_loans))
        .route("/loans", post(api::loans::create_loan))
        .route("/loans/:id", put(api::loans::update_loan))
        .route("/loans/:id", delete(api::loans::delete_loan))
        .route("/loans/:id/return", post(api::loans::return_loan))
        // Activity log
        .route("/logs", get(api::logs::list_logs));

    Router::new()
        // Authentication
        .route("/auth/login", post(api::auth::login))
        .route("/auth/logout", post(api::auth::logout))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
