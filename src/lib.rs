//! Libris Book Catalog Service
//!
//! A REST JSON API for managing a library catalog: books, authors,
//! libraries, an immutable audit trail of book mutations, and explicit
//! historical snapshots.

use std::sync::Arc;

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
