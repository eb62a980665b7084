//! Book model (relational store)

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::NAME_REGEX;
use crate::{
    error::{AppError, AppResult},
    isbn::Isbn,
};

/// Book record as stored in the `books` table
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub genre: String,
    /// Verified ISBN-10 or ISBN-13, as supplied by the client
    #[sqlx(try_from = "String")]
    #[schema(value_type = String, example = "978-0-306-40615-7")]
    pub isbn: Isbn,
    /// Number of copies held
    pub quantity: i32,
}

/// Create/update book request
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BookRequest {
    #[serde(default)]
    #[validate(
        length(max = 255, message = "Book title must be at most 255 characters"),
        regex(path = *NAME_REGEX, message = "Invalid book title")
    )]
    pub title: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 100, message = "Book genre is required (at most 100 characters)"))]
    pub genre: String,
    #[serde(default)]
    #[validate(length(min = 1, max = 20, message = "Book ISBN is required (at most 20 characters)"))]
    pub isbn: String,
    #[validate(required(message = "Book quantity is required"))]
    pub quantity: Option<i32>,
}

/// Book fields that passed validation, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct BookDraft {
    pub title: String,
    pub genre: String,
    pub isbn: Isbn,
    pub quantity: i32,
}

impl TryFrom<BookRequest> for BookDraft {
    type Error = AppError;

    fn try_from(request: BookRequest) -> AppResult<Self> {
        request.validate()?;
        let isbn = Isbn::parse(request.isbn)?;
        let quantity = request
            .quantity
            .ok_or_else(|| AppError::Validation("Book quantity is required".to_string()))?;

        Ok(Self {
            title: request.title,
            genre: request.genre,
            isbn,
            quantity,
        })
    }
}
