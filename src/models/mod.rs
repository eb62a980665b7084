//! Data models for the Biblioteca catalog

pub mod author;
pub mod book;
pub mod category;
pub mod user;

use once_cell::sync::Lazy;
use regex::Regex;

// Re-export commonly used types
pub use author::{Author, AuthorRequest};
pub use book::{Book, BookDraft, BookRequest};
pub use category::{Category, CreateCategory};
pub use user::User;

/// Words made of ASCII letters separated by single spaces
pub(crate) static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z]+( [A-Za-z]+)*$").unwrap());
