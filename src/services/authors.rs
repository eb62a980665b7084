//! Author service

use std::sync::Arc;

use validator::Validate;

use crate::{
    error::AppResult,
    models::author::{Author, AuthorRequest},
    repository::AuthorStore,
};

#[derive(Clone)]
pub struct AuthorsService {
    store: Arc<dyn AuthorStore>,
}

impl AuthorsService {
    pub fn new(store: Arc<dyn AuthorStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Author>> {
        self.store.list().await
    }

    pub async fn get_by_id(&self, id: &str) -> AppResult<Option<Author>> {
        self.store.find_by_id(id).await
    }

    /// Save a new author document. A blank or missing id gets a fresh UUID;
    /// an id that already exists is overwritten.
    pub async fn create(&self, request: AuthorRequest) -> AppResult<Author> {
        request.validate()?;
        let id = request
            .id
            .filter(|id| !id.trim().is_empty())
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());

        let author = self
            .store
            .save(&Author {
                id,
                name: request.name,
                country_of_origin: request.country_of_origin,
            })
            .await?;
        tracing::info!("Author created: id={}", author.id);
        Ok(author)
    }

    /// Replace an author document; `None` when no author has this id
    pub async fn update(&self, id: &str, request: AuthorRequest) -> AppResult<Option<Author>> {
        request.validate()?;
        if !self.store.exists(id).await? {
            return Ok(None);
        }
        let author = self
            .store
            .save(&Author {
                id: id.to_string(),
                name: request.name,
                country_of_origin: request.country_of_origin,
            })
            .await?;
        tracing::info!("Author updated: id={}", author.id);
        Ok(Some(author))
    }

    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        if !self.store.exists(id).await? {
            return Ok(false);
        }
        let deleted = self.store.delete(id).await?;
        if deleted {
            tracing::info!("Author deleted: id={}", id);
        }
        Ok(deleted)
    }
}
