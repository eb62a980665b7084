//! Storage layer: one store per entity, each behind an async trait

pub mod authors;
pub mod books;
pub mod categories;
pub mod users;

use std::sync::Arc;

use sqlx::{Pool, Postgres};

use crate::config::StorageConfig;

pub use authors::AuthorStore;
pub use books::BookStore;
pub use categories::CategoryStore;
pub use users::UserStore;

/// Main repository struct holding every store
#[derive(Clone)]
pub struct Repository {
    pub books: Arc<dyn BookStore>,
    pub authors: Arc<dyn AuthorStore>,
    pub categories: Arc<dyn CategoryStore>,
    pub users: Arc<dyn UserStore>,
}

impl Repository {
    /// Create a repository backed by the database pool and the configured files
    pub fn new(pool: Pool<Postgres>, storage: &StorageConfig) -> Self {
        Self {
            books: Arc::new(books::BooksRepository::new(pool.clone())),
            authors: Arc::new(authors::AuthorsRepository::new(pool)),
            categories: Arc::new(categories::CategoriesFile::new(
                storage.categories_file.clone(),
            )),
            users: Arc::new(users::UsersXmlFile::new(storage.users_file.clone())),
        }
    }
}
