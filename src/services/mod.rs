//! Business logic services

pub mod authors;
pub mod books;
pub mod categories;
pub mod users;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub books: books::BooksService,
    pub authors: authors::AuthorsService,
    pub categories: categories::CategoriesService,
    pub users: users::UsersService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            books: books::BooksService::new(repository.books),
            authors: authors::AuthorsService::new(repository.authors),
            categories: categories::CategoriesService::new(repository.categories),
            users: users::UsersService::new(repository.users),
        }
    }
}
