//! Categories stored in a flat text file, one `<id>;<name>` line each.
//!
//! Reads load the whole file and writes append a single line. There is no
//! locking: concurrent writers may interleave and the last write wins.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::{fs, io::AsyncWriteExt};

use crate::{error::AppResult, models::category::Category};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Category>>;
    async fn append(&self, category: &Category) -> AppResult<()>;
}

#[derive(Clone)]
pub struct CategoriesFile {
    path: PathBuf,
}

impl CategoriesFile {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait]
impl CategoryStore for CategoriesFile {
    async fn list(&self) -> AppResult<Vec<Category>> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("Categories file {} not found, empty catalog", self.path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let categories = contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .filter_map(|(n, line)| {
                let category = Category::from_line(line);
                if category.is_none() {
                    tracing::warn!(
                        "Skipping malformed line {} in {}: {:?}",
                        n + 1,
                        self.path.display(),
                        line
                    );
                }
                category
            })
            .collect();
        Ok(categories)
    }

    async fn append(&self, category: &Category) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(format!("{}\n", category.to_line()).as_bytes())
            .await?;
        file.flush().await?;
        Ok(())
    }
}
