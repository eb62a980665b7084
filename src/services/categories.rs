//! Category service

use std::sync::Arc;

use crate::{
    error::AppResult,
    models::category::{Category, CreateCategory},
    repository::CategoryStore,
};

#[derive(Clone)]
pub struct CategoriesService {
    store: Arc<dyn CategoryStore>,
}

impl CategoriesService {
    pub fn new(store: Arc<dyn CategoryStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<Category>> {
        self.store.list().await
    }

    pub async fn add(&self, request: CreateCategory) -> AppResult<Category> {
        let category = Category::try_from(request)?;
        self.store.append(&category).await?;
        tracing::info!("Category added: id={}", category.id);
        Ok(category)
    }
}
