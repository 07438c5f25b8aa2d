//! Library checkout server
//!
//! Patrons log in with their name and card number, browse the catalog, and
//! check books out or return them through a JSON API backed by SQLite.

use std::sync::Arc;

use sqlx::SqlitePool;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}

impl AppState {
    /// Wire repositories and services on top of a database pool
    pub fn new(config: AppConfig, pool: SqlitePool) -> Self {
        let repository = repository::Repository::new(pool);
        let services = services::Services::new(repository, config.auth.clone());

        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }
}
