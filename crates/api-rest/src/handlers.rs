//! Article route handlers.
//!
//! Each handler extracts path and form parameters, calls exactly one
//! `ArticleService` operation and maps the outcome through [`crate::response`].
//! Form bodies are optional: a missing body is treated as an empty field set,
//! while a form body that fails to decode is answered with an error body and
//! never reaches the store.

use axum::{
    extract::{rejection::FormRejection, Path, State},
    response::{IntoResponse, Json, Response},
    Form,
};
use api_shared::{messages, HealthRes, HealthService};
use wiki_core::{Article, ArticleForm, ArticlePatch};

use crate::response::{confirm, form_or_default, store_failure};
use crate::AppState;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Returns the liveness of the process. The article store is not consulted.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    get,
    path = "/articles",
    responses(
        (status = 200, description = "Every stored article, or the store error", body = [Article])
    )
)]
/// List all articles in the collection
///
/// # Returns
/// * JSON array of articles in store order
/// * `StoreErrorBody` with status 200 if the store call fails
#[axum::debug_handler]
pub async fn list_articles(State(state): State<AppState>) -> Response {
    match state.articles.list_all().await {
        Ok(articles) => Json(articles).into_response(),
        Err(e) => store_failure("List articles", e),
    }
}

#[utoipa::path(
    post,
    path = "/articles",
    request_body(content = ArticleForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Confirmation text, or the store error", body = String)
    )
)]
/// Create a new article
///
/// Stores exactly the `title` and `content` present in the form. Absent
/// fields are left out of the document.
#[axum::debug_handler]
pub async fn create_article(
    State(state): State<AppState>,
    form: Result<Form<ArticleForm>, FormRejection>,
) -> Response {
    let form = match form_or_default("Create article", form) {
        Ok(form) => form,
        Err(response) => return response,
    };
    confirm(
        "Create article",
        state.articles.create(form).await,
        messages::ARTICLE_CREATED,
    )
}

#[utoipa::path(
    delete,
    path = "/articles",
    responses(
        (status = 200, description = "Confirmation text, or the store error", body = String)
    )
)]
/// Delete every article in the collection
#[axum::debug_handler]
pub async fn delete_all_articles(State(state): State<AppState>) -> Response {
    confirm(
        "Delete all articles",
        state.articles.delete_all().await,
        messages::ALL_ARTICLES_DELETED,
    )
}

#[utoipa::path(
    get,
    path = "/articles/{title}",
    params(("title" = String, Path, description = "Exact article title")),
    responses(
        (status = 200, description = "The first matching article, `null` if none, or the store error", body = Article)
    )
)]
/// Fetch an article by title
///
/// Finding nothing is not an error: the body is JSON `null` with status 200.
#[axum::debug_handler]
pub async fn fetch_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Response {
    match state.articles.fetch_by_title(&title).await {
        Ok(found) => Json(found).into_response(),
        Err(e) => store_failure("Fetch article", e),
    }
}

#[utoipa::path(
    put,
    path = "/articles/{title}",
    params(("title" = String, Path, description = "Exact title of the article to replace")),
    request_body(content = ArticleForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Confirmation text, or the store error", body = String)
    )
)]
/// Replace an article by title
///
/// The first matching document's whole field set becomes the form's fields.
/// Reports success even when no document matched; nothing is created.
#[axum::debug_handler]
pub async fn replace_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
    form: Result<Form<ArticleForm>, FormRejection>,
) -> Response {
    let form = match form_or_default("Replace article", form) {
        Ok(form) => form,
        Err(response) => return response,
    };
    confirm(
        "Replace article",
        state.articles.replace_by_title(&title, form).await,
        messages::ARTICLE_UPDATED,
    )
}

#[utoipa::path(
    patch,
    path = "/articles/{title}",
    params(("title" = String, Path, description = "Exact title of the article to update")),
    request_body(content = ArticlePatch, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Confirmation text, or the store error", body = String)
    )
)]
/// Partially update an article by title
///
/// Only the supplied fields change; everything else keeps its value.
#[axum::debug_handler]
pub async fn update_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
    patch: Result<Form<ArticlePatch>, FormRejection>,
) -> Response {
    let patch = match form_or_default("Update article", patch) {
        Ok(patch) => patch,
        Err(response) => return response,
    };
    confirm(
        "Update article",
        state.articles.update_by_title(&title, patch).await,
        messages::ARTICLE_UPDATED,
    )
}

#[utoipa::path(
    delete,
    path = "/articles/{title}",
    params(("title" = String, Path, description = "Exact title of the article to delete")),
    responses(
        (status = 200, description = "Confirmation text, or the store error", body = String)
    )
)]
/// Delete an article by title
///
/// Removes the first matching document only.
#[axum::debug_handler]
pub async fn delete_article(
    State(state): State<AppState>,
    Path(title): Path<String>,
) -> Response {
    confirm(
        "Delete article",
        state.articles.delete_by_title(&title).await,
        messages::ARTICLE_DELETED,
    )
}
