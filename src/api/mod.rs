//! API handlers for the Biblioteca REST endpoints

pub mod authors;
pub mod books;
pub mod categories;
pub mod health;
pub mod openapi;
pub mod users;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::AppState;

/// 200 with the list, or 204 when there is nothing to return
pub(crate) fn list_response<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        Json(items).into_response()
    }
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API v1 routes
    let api_v1 = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Authors
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route(
            "/authors/:id",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        // Categories
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        // Users
        .route("/users", get(users::list_users).post(users::create_user))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api/v1", api_v1)
        .merge(openapi)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use sqlx::postgres::PgPoolOptions;
    use tower::ServiceExt;

    use super::*;
    use crate::{
        config::AppConfig,
        models::{author::Author, book::Book},
        repository::{
            authors::MockAuthorStore, books::MockBookStore, categories::MockCategoryStore,
            users::MockUserStore, Repository,
        },
        services::Services,
    };

    fn app(books: MockBookStore, authors: MockAuthorStore, categories: MockCategoryStore) -> Router {
        let repository = Repository {
            books: Arc::new(books),
            authors: Arc::new(authors),
            categories: Arc::new(categories),
            users: Arc::new(MockUserStore::new()),
        };
        let config = AppConfig::default();
        let pool = PgPoolOptions::new()
            .connect_lazy(&config.database.url)
            .expect("lazy pool");
        create_router(AppState {
            config: Arc::new(config),
            services: Arc::new(Services::new(repository)),
            pool,
        })
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let app = app(MockBookStore::new(), MockAuthorStore::new(), MockCategoryStore::new());
        let response = app
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "healthy");
    }

    #[tokio::test]
    async fn test_empty_book_list_is_no_content() {
        let mut books = MockBookStore::new();
        books.expect_list().returning(|| Ok(vec![]));

        let response = app(books, MockAuthorStore::new(), MockCategoryStore::new())
            .oneshot(Request::get("/api/v1/books").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn test_create_book() {
        let mut books = MockBookStore::new();
        books.expect_insert().returning(|draft| {
            Ok(Book {
                id: 10,
                title: draft.title.clone(),
                genre: draft.genre.clone(),
                isbn: draft.isbn.clone(),
                quantity: draft.quantity,
            })
        });

        let response = app(books, MockAuthorStore::new(), MockCategoryStore::new())
            .oneshot(json_request(
                "POST",
                "/api/v1/books",
                serde_json::json!({
                    "title": "Dune",
                    "genre": "Science Fiction",
                    "isbn": "0-9752298-0-X",
                    "quantity": 4
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["id"], 10);
        assert_eq!(body["isbn"], "0-9752298-0-X");
    }

    #[tokio::test]
    async fn test_create_book_with_invalid_isbn() {
        let response = app(MockBookStore::new(), MockAuthorStore::new(), MockCategoryStore::new())
            .oneshot(json_request(
                "POST",
                "/api/v1/books",
                serde_json::json!({
                    "title": "Dune",
                    "genre": "Science Fiction",
                    "isbn": "097522980x",
                    "quantity": 4
                }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "InvalidIsbnFormat");
    }

    #[tokio::test]
    async fn test_missing_book_is_not_found() {
        let mut books = MockBookStore::new();
        books.expect_find_by_id().returning(|_| Ok(None));
        books.expect_exists().returning(|_| Ok(false));

        let app = app(books, MockAuthorStore::new(), MockCategoryStore::new());

        let response = app
            .clone()
            .oneshot(Request::get("/api/v1/books/999").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = app
            .oneshot(
                Request::delete("/api/v1/books/999")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_get_author() {
        let mut authors = MockAuthorStore::new();
        authors.expect_find_by_id().returning(|id| {
            Ok(Some(Author {
                id: id.to_string(),
                name: "Borges".into(),
                country_of_origin: "Argentina".into(),
            }))
        });

        let response = app(MockBookStore::new(), authors, MockCategoryStore::new())
            .oneshot(Request::get("/api/v1/authors/abc").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["id"], "abc");
    }

    #[tokio::test]
    async fn test_create_category() {
        let mut categories = MockCategoryStore::new();
        categories
            .expect_append()
            .withf(|c| c.id == 3 && c.name == "History")
            .times(1)
            .returning(|_| Ok(()));

        let response = app(MockBookStore::new(), MockAuthorStore::new(), categories)
            .oneshot(json_request(
                "POST",
                "/api/v1/categories",
                serde_json::json!({ "id": 3, "name": "History" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_category_without_id_is_rejected() {
        let response = app(MockBookStore::new(), MockAuthorStore::new(), MockCategoryStore::new())
            .oneshot(json_request(
                "POST",
                "/api/v1/categories",
                serde_json::json!({ "name": "History" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
