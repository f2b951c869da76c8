//! Article operations.
//!
//! `ArticleService` is the only thing API layers talk to. Each method issues
//! exactly one call against the injected [`ArticleStore`] and hands the
//! outcome back unchanged: no retries, no timeouts, no transactions.

use crate::article::{Article, ArticleForm, ArticlePatch};
use crate::error::StoreResult;
use crate::store::ArticleStore;
use std::sync::Arc;

/// Pure article data operations - no API concerns
#[derive(Clone, Debug)]
pub struct ArticleService {
    store: Arc<dyn ArticleStore>,
}

impl ArticleService {
    /// Creates a service over an already connected store handle.
    pub fn new(store: Arc<dyn ArticleStore>) -> Self {
        Self { store }
    }

    /// Lists every article in the collection.
    pub async fn list_all(&self) -> StoreResult<Vec<Article>> {
        let articles = self.store.find_all().await?;
        tracing::debug!(count = articles.len(), "listed articles");
        Ok(articles)
    }

    /// Inserts a new article with exactly the fields in `form`.
    pub async fn create(&self, form: ArticleForm) -> StoreResult<()> {
        self.store.insert_one(Article::from(form)).await
    }

    /// Removes every article.
    pub async fn delete_all(&self) -> StoreResult<()> {
        self.store.delete_all().await
    }

    /// Returns the first article titled `title`, or `None`.
    pub async fn fetch_by_title(&self, title: &str) -> StoreResult<Option<Article>> {
        self.store.find_one_by_title(title).await
    }

    /// Overwrites the first article titled `title` with `form`.
    ///
    /// Succeeds without effect when no article matches.
    pub async fn replace_by_title(&self, title: &str, form: ArticleForm) -> StoreResult<()> {
        self.store.replace_one_by_title(title, form).await
    }

    /// Merges `patch` into the first article titled `title`.
    pub async fn update_by_title(&self, title: &str, patch: ArticlePatch) -> StoreResult<()> {
        self.store.update_one_by_title(title, patch).await
    }

    /// Removes the first article titled `title`.
    pub async fn delete_by_title(&self, title: &str) -> StoreResult<()> {
        self.store.delete_one_by_title(title).await
    }
}
