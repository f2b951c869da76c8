//! # API REST
//!
//! REST API implementation for the article wiki.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (form bodies, response mapping, CORS, static files)
//!
//! Uses `api-shared` for common types and `wiki-core` for article operations.

#![warn(rust_2018_idioms)]

pub mod handlers;
pub mod response;

use axum::{routing::get, Router};
use std::path::Path;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use wiki_core::{Article, ArticleForm, ArticlePatch, ArticleService};

use api_shared::HealthRes;
use response::StoreErrorBody;

/// Application state shared across REST API handlers
///
/// Holds the article service; the store handle inside it is created once at
/// startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub articles: ArticleService,
}

impl AppState {
    pub fn new(articles: ArticleService) -> Self {
        Self { articles }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::health,
        handlers::list_articles,
        handlers::create_article,
        handlers::delete_all_articles,
        handlers::fetch_article,
        handlers::replace_article,
        handlers::update_article,
        handlers::delete_article,
    ),
    components(schemas(HealthRes, Article, ArticleForm, ArticlePatch, StoreErrorBody))
)]
pub struct ApiDoc;

/// Builds the REST router.
///
/// Binds the collection path `/articles` (GET, POST, DELETE) and the item path
/// `/articles/:title` (GET, PUT, PATCH, DELETE), plus `/health` and the Swagger
/// UI. When `public_dir` exists it is served as the fallback for every other
/// path; otherwise unmatched requests get axum's default 404.
pub fn app(state: AppState, public_dir: Option<&Path>) -> Router {
    use handlers::*;

    let mut router = Router::new()
        .route("/health", get(health))
        .route(
            "/articles",
            get(list_articles)
                .post(create_article)
                .delete(delete_all_articles),
        )
        .route(
            "/articles/:title",
            get(fetch_article)
                .put(replace_article)
                .patch(update_article)
                .delete(delete_article),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    if let Some(dir) = public_dir.filter(|d| d.is_dir()) {
        tracing::info!("-- Serving static files from {}", dir.display());
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api_shared::messages;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use std::sync::Arc;
    use tower::ServiceExt;
    use wiki_core::{ArticleStore, InMemoryStore, StoreError, StoreResult};

    fn test_app() -> Router {
        let service = ArticleService::new(Arc::new(InMemoryStore::new()));
        app(AppState::new(service), None)
    }

    async fn send(app: &Router, method: Method, uri: &str, form: Option<&str>) -> (StatusCode, String) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match form {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request should build");

        let response = app
            .clone()
            .oneshot(request)
            .await
            .expect("router should not fail");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");
        (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
    }

    fn json(body: &str) -> serde_json::Value {
        serde_json::from_str(body).expect("body should be JSON")
    }

    /// Store double whose every call fails.
    #[derive(Debug)]
    struct FailingStore;

    #[async_trait::async_trait]
    impl ArticleStore for FailingStore {
        async fn find_all(&self) -> StoreResult<Vec<Article>> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn insert_one(&self, _article: Article) -> StoreResult<()> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn delete_all(&self) -> StoreResult<()> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn find_one_by_title(&self, _title: &str) -> StoreResult<Option<Article>> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn replace_one_by_title(&self, _title: &str, _form: ArticleForm) -> StoreResult<()> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn update_one_by_title(&self, _title: &str, _patch: ArticlePatch) -> StoreResult<()> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
        async fn delete_one_by_title(&self, _title: &str) -> StoreResult<()> {
            Err(StoreError::Unavailable("connection refused".into()))
        }
    }

    #[tokio::test]
    async fn test_biology_scenario() {
        let app = test_app();

        let (status, body) = send(
            &app,
            Method::POST,
            "/articles",
            Some("title=Biology&content=Study+of+life"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, messages::ARTICLE_CREATED);

        let (status, body) = send(&app, Method::GET, "/articles/Biology", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json(&body),
            serde_json::json!({ "title": "Biology", "content": "Study of life" })
        );

        let (_, body) = send(&app, Method::PATCH, "/articles/Biology", Some("content=Updated")).await;
        assert_eq!(body, messages::ARTICLE_UPDATED);

        let (_, body) = send(&app, Method::GET, "/articles/Biology", None).await;
        assert_eq!(
            json(&body),
            serde_json::json!({ "title": "Biology", "content": "Updated" })
        );

        let (_, body) = send(&app, Method::DELETE, "/articles/Biology", None).await;
        assert_eq!(body, messages::ARTICLE_DELETED);

        let (status, body) = send(&app, Method::GET, "/articles/Biology", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body), serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_fetch_unknown_title_is_null_with_ok_status() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/articles/Nothing", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body), serde_json::Value::Null);
    }

    #[tokio::test]
    async fn test_list_then_delete_all() {
        let app = test_app();
        send(&app, Method::POST, "/articles", Some("title=A&content=a")).await;
        send(&app, Method::POST, "/articles", Some("title=B&content=b")).await;

        let (_, body) = send(&app, Method::GET, "/articles", None).await;
        assert_eq!(
            json(&body),
            serde_json::json!([
                { "title": "A", "content": "a" },
                { "title": "B", "content": "b" },
            ])
        );

        let (_, body) = send(&app, Method::DELETE, "/articles", None).await;
        assert_eq!(body, messages::ALL_ARTICLES_DELETED);

        let (_, body) = send(&app, Method::GET, "/articles", None).await;
        assert_eq!(json(&body), serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_put_replaces_whole_field_set() {
        let app = test_app();
        send(&app, Method::POST, "/articles", Some("title=Biology&content=Study+of+life")).await;

        let (_, body) = send(&app, Method::PUT, "/articles/Biology", Some("title=Ecology")).await;
        assert_eq!(body, messages::ARTICLE_UPDATED);

        let (_, body) = send(&app, Method::GET, "/articles/Ecology", None).await;
        assert_eq!(json(&body), serde_json::json!({ "title": "Ecology" }));
    }

    #[tokio::test]
    async fn test_put_without_match_reports_success_and_creates_nothing() {
        let app = test_app();

        let (status, body) = send(
            &app,
            Method::PUT,
            "/articles/Ghost",
            Some("title=Ghost&content=boo"),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, messages::ARTICLE_UPDATED);

        let (_, body) = send(&app, Method::GET, "/articles", None).await;
        assert_eq!(json(&body), serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_post_without_body_stores_empty_document() {
        let app = test_app();

        let (_, body) = send(&app, Method::POST, "/articles", None).await;
        assert_eq!(body, messages::ARTICLE_CREATED);

        let (_, body) = send(&app, Method::GET, "/articles", None).await;
        assert_eq!(json(&body), serde_json::json!([{}]));
    }

    #[tokio::test]
    async fn test_title_path_is_percent_decoded() {
        let app = test_app();
        send(&app, Method::POST, "/articles", Some("title=Cell+Biology&content=x")).await;

        let (_, body) = send(&app, Method::GET, "/articles/Cell%20Biology", None).await;
        assert_eq!(
            json(&body),
            serde_json::json!({ "title": "Cell Biology", "content": "x" })
        );
    }

    #[tokio::test]
    async fn test_store_failures_are_ok_with_error_body() {
        let app = app(
            AppState::new(ArticleService::new(Arc::new(FailingStore))),
            None,
        );
        let expected = serde_json::json!({
            "name": "StoreUnavailableError",
            "message": "store unavailable: connection refused",
        });

        for (method, uri, form) in [
            (Method::GET, "/articles", None),
            (Method::POST, "/articles", Some("title=A&content=a")),
            (Method::DELETE, "/articles", None),
            (Method::GET, "/articles/A", None),
            (Method::PUT, "/articles/A", Some("title=B")),
            (Method::PATCH, "/articles/A", Some("content=b")),
            (Method::DELETE, "/articles/A", None),
        ] {
            let (status, body) = send(&app, method.clone(), uri, form).await;
            assert_eq!(status, StatusCode::OK, "{} {} should answer 200", method, uri);
            assert_eq!(json(&body), expected, "{} {} should return the error body", method, uri);
        }
    }

    #[tokio::test]
    async fn test_post_with_repeated_key_is_rejected_and_stores_nothing() {
        let app = test_app();

        let (status, body) = send(&app, Method::POST, "/articles", Some("title=A&title=B&content=x")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["name"], "CastError");

        let (_, body) = send(&app, Method::GET, "/articles", None).await;
        assert_eq!(json(&body), serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_put_with_repeated_key_leaves_document_untouched() {
        let app = test_app();
        send(&app, Method::POST, "/articles", Some("title=Bio&content=x")).await;

        let (status, body) = send(&app, Method::PUT, "/articles/Bio", Some("title=Bio&title=Q")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["name"], "CastError");

        let (_, body) = send(&app, Method::GET, "/articles", None).await;
        assert_eq!(json(&body), serde_json::json!([{ "title": "Bio", "content": "x" }]));
    }

    #[tokio::test]
    async fn test_patch_with_repeated_key_leaves_document_untouched() {
        let app = test_app();
        send(&app, Method::POST, "/articles", Some("title=Bio&content=x")).await;

        let (status, body) = send(&app, Method::PATCH, "/articles/Bio", Some("content=y&content=z")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["name"], "CastError");

        let (_, body) = send(&app, Method::GET, "/articles/Bio", None).await;
        assert_eq!(json(&body), serde_json::json!({ "title": "Bio", "content": "x" }));
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let app = test_app();

        let (status, _) = send(&app, Method::GET, "/nope", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_unsupported_method_is_rejected() {
        let app = test_app();

        let (status, _) = send(&app, Method::PUT, "/articles", Some("title=A")).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_static_files_are_served_from_public_dir() {
        let public = tempfile::TempDir::new().expect("Failed to create temp dir");
        std::fs::write(public.path().join("styles.css"), "body {}").expect("write css");

        let service = ArticleService::new(Arc::new(InMemoryStore::new()));
        let app = app(AppState::new(service), Some(public.path()));

        let (status, body) = send(&app, Method::GET, "/styles.css", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "body {}");

        let (_, body) = send(&app, Method::GET, "/articles", None).await;
        assert_eq!(json(&body), serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let app = test_app();

        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json(&body)["ok"], serde_json::Value::Bool(true));
    }
}
