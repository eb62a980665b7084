//! User service

use std::sync::Arc;

use validator::Validate;

use crate::{error::AppResult, models::user::User, repository::UserStore};

#[derive(Clone)]
pub struct UsersService {
    store: Arc<dyn UserStore>,
}

impl UsersService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub async fn list(&self) -> AppResult<Vec<User>> {
        self.store.list().await
    }

    pub async fn add(&self, user: User) -> AppResult<()> {
        user.validate()?;
        self.store.append(&user).await?;
        tracing::info!("User added: id={:?}", user.id);
        Ok(())
    }
}
