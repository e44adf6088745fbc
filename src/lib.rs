//! Polls: a small poll service with scheduled publication
//!
//! This library provides the data models, database access, and web API of a
//! poll application. Questions carry a publication date: until that date is
//! reached a question is hidden from every public view, and for one day after
//! it the question is flagged as recently published.
//!
//! ### Modules
//!
//! - `db`: Database connection management
//! - `models`: Questions and their choices
//! - `visibility`: The publication rules
//! - `repo`: Repository layer for database operations
//! - `handlers`: HTTP handlers
//! - `schema`: Database schema definitions
//!
//! ### Web API
//!
//! - `GET /polls`: Latest published questions
//! - `POST /polls`: Create a question
//! - `GET /polls/{id}`: Detail of a published question
//! - `GET /polls/{id}/results`: Vote counts of a published question
//! - `POST /polls/{id}/vote`: Vote for a choice
//! - `POST /polls/{id}/choices`: Add a choice to a question
//! - `GET /admin/questions`: Every question, including unpublished ones

/// Configuration module
pub mod config;

/// Database connection module
pub mod db;

/// Data transfer objects
pub mod dto;

/// API error type
pub mod errors;

/// Web API handlers
pub mod handlers;

/// Data models module
pub mod models;

/// Repository module for database operations
pub mod repo;

/// Database schema module
pub mod schema;

/// Publication rules
pub mod visibility;

#[cfg(test)]
pub mod test_utils;

use axum::{
    routing::{get, post},
    Router,
};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Embedded database migrations
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Creates the application router
///
/// ### Arguments
///
/// * `pool` - The database connection pool shared by all handlers
///
/// ### Returns
///
/// An Axum Router configured with all routes and the database pool as state
pub fn create_app(pool: Arc<db::DbPool>) -> Router {
    Router::new()
        // Public poll views
        .route("/polls", get(handlers::index_handler).post(handlers::create_question_handler))
        .route("/polls/{id}", get(handlers::detail_handler))
        .route("/polls/{id}/results", get(handlers::results_handler))
        .route("/polls/{id}/vote", post(handlers::vote_handler))
        .route("/polls/{id}/choices", post(handlers::create_choice_handler))
        // Administration
        .route("/admin/questions", get(handlers::list_all_questions_handler))
        .layer(CorsLayer::permissive())
        .with_state(pool)
}

/// Runs the embedded migrations
///
/// ### Arguments
///
/// * `conn` - A mutable reference to a SQLite connection
///
/// ### Errors
///
/// Returns an error if any pending migration fails to apply
pub fn run_migrations(conn: &mut diesel::SqliteConnection) -> anyhow::Result<()> {
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| anyhow::anyhow!("Failed to run migrations: {}", e))?;
    Ok(())
}
