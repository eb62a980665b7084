//! Grandao Biblioteca catalog server
//!
//! REST JSON API over four stores: books in PostgreSQL, authors as JSON
//! documents, categories in a text file and users in an XML file. Book
//! ISBNs are checked (ISBN-10 and ISBN-13 checksums) before anything is
//! written.

use std::sync::Arc;

use sqlx::{Pool, Postgres};

pub mod api;
pub mod config;
pub mod error;
pub mod isbn;
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
    pub pool: Pool<Postgres>,
}
