//! Users stored in a single XML document:
//!
//! ```xml
//! <users>
//!   <user><id>1</id><name>Ana Torres</name><email>ana@example.org</email><phone>612 34 56 78</phone></user>
//! </users>
//! ```
//!
//! Every write reads the whole document and rewrites the whole file, with no
//! locking. Two concurrent adds can lose one of the users (last writer wins).

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::{
    error::{AppError, AppResult},
    models::user::User,
};

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<User>>;
    async fn append(&self, user: &User) -> AppResult<()>;
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename = "users")]
struct UsersDocument {
    #[serde(rename = "user", default)]
    users: Vec<User>,
}

#[derive(Clone)]
pub struct UsersXmlFile {
    path: PathBuf,
}

impl UsersXmlFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    async fn read_document(&self) -> AppResult<UsersDocument> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Users file {} not found, no users", self.path.display());
                return Ok(UsersDocument::default());
            }
            Err(e) => return Err(e.into()),
        };

        if contents.trim().is_empty() {
            return Ok(UsersDocument::default());
        }

        quick_xml::de::from_str(&contents)
            .map_err(|e| AppError::Xml(format!("{}: {}", self.path.display(), e)))
    }

    async fn write_document(&self, document: &UsersDocument) -> AppResult<()> {
        let body = quick_xml::se::to_string(document)
            .map_err(|e| AppError::Xml(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, format!("{}\n{}\n", XML_DECLARATION, body)).await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for UsersXmlFile {
    async fn list(&self) -> AppResult<Vec<User>> {
        Ok(self.read_document().await?.users)
    }

    async fn append(&self, user: &User) -> AppResult<()> {
        let mut document = self.read_document().await?;
        document.users.push(user.clone());
        self.write_document(&document).await
    }
}
