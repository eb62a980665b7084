//! Book catalog service
//!
//! Every write goes through `BookDraft::try_from`, so a book is never stored
//! with an ISBN that failed verification.

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::book::{Book, BookDraft, BookRequest},
    repository::BookStore,
};

#[derive(Clone)]
pub struct BooksService {
    store: Arc<dyn BookStore>,
}

impl BooksService {
    pub fn new(store: Arc<dyn BookStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Option<Book>> {
        self.store.find_by_id(id).await
    }

    pub async fn create(&self, request: BookRequest) -> AppResult<Book> {
        let draft = BookDraft::try_from(request)?;
        let book = self.store.insert(&draft).await?;
        tracing::info!("Book created: id={} isbn={}", book.id, book.isbn);
        Ok(book)
    }

    /// Replace a book; `None` when no book has this id
    pub async fn update(&self, id: i32, request: BookRequest) -> AppResult<Option<Book>> {
        let draft = BookDraft::try_from(request)?;
        if !self.store.exists(id).await? {
            return Ok(None);
        }
        let book = self.store.update(id, &draft).await?;
        if book.is_some() {
            tracing::info!("Book updated: id={}", id);
        }
        Ok(book)
    }

    /// `false` when no book has this id
    pub async fn delete(&self, id: i32) -> AppResult<bool> {
        if !self.store.exists(id).await? {
            return Ok(false);
        }
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!("Book deleted: id={}", id);
        }
        Ok(deleted)
    }
}
