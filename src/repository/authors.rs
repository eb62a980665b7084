//! Authors repository: schemaless JSON documents keyed by a string id,
//! kept in the `author_documents` table.

use async_trait::async_trait;
use sqlx::{types::Json, FromRow, Pool, Postgres};

use crate::{
    error::AppResult,
    models::author::{Author, AuthorDocument},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthorStore: Send + Sync {
    async fn list(&self) -> AppResult<Vec<Author>>;
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Author>>;
    async fn exists(&self, id: &str) -> AppResult<bool>;
    /// Insert or replace the document with the author's id
    async fn save(&self, author: &Author) -> AppResult<Author>;
    async fn delete(&self, id: &str) -> AppResult<bool>;
}

#[derive(FromRow)]
struct AuthorRow {
    id: String,
    doc: Json<AuthorDocument>,
}

impl From<AuthorRow> for Author {
    fn from(row: AuthorRow) -> Self {
        Author::from_document(row.id, row.doc.0)
    }
}

#[derive(Clone)]
pub struct AuthorsRepository {
    pool: Pool<Postgres>,
}

impl AuthorsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorStore for AuthorsRepository {
    async fn list(&self) -> AppResult<Vec<Author>> {
        let rows = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, doc FROM author_documents ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(rows.into_iter().map(Author::from).collect())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Author>> {
        let row = sqlx::query_as::<_, AuthorRow>(
            "SELECT id, doc FROM author_documents WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Author::from))
    }

    async fn exists(&self, id: &str) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM author_documents WHERE id = $1)",
        )
        .bind(id)
        .fetch_one(&self.pool)
        .await?;
        Ok(exists)
    }

    async fn save(&self, author: &Author) -> AppResult<Author> {
        let row = sqlx::query_as::<_, AuthorRow>(
            r#"
            INSERT INTO author_documents (id, doc)
            VALUES ($1, $2)
            ON CONFLICT (id) DO UPDATE SET doc = EXCLUDED.doc, updated_at = NOW()
            RETURNING id, doc
            "#,
        )
        .bind(&author.id)
        .bind(Json(author.document()))
        .fetch_one(&self.pool)
        .await?;
        Ok(row.into())
    }

    async fn delete(&self, id: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM author_documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
