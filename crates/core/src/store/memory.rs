use super::ArticleStore;
use crate::article::{Article, ArticleForm, ArticlePatch};
use crate::error::StoreResult;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
/// An in-memory article store.
///
/// # Limitations
///
/// Records are kept in insertion order and lost when the process exits.
/// Nothing is shared between server instances. It is primarily intended for
/// testing and local development.
pub struct InMemoryStore(Arc<Mutex<Vec<Article>>>);

impl std::fmt::Debug for InMemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryStore").finish_non_exhaustive()
    }
}

impl InMemoryStore {
    /// Creates a new (empty) in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    fn position_of(records: &[Article], title: &str) -> Option<usize> {
        records
            .iter()
            .position(|a| a.title.as_deref() == Some(title))
    }
}

#[async_trait::async_trait]
impl ArticleStore for InMemoryStore {
    #[tracing::instrument(name = "Find all articles", level = tracing::Level::TRACE, skip_all)]
    async fn find_all(&self) -> StoreResult<Vec<Article>> {
        let guard = self.0.lock().await;
        Ok(guard.clone())
    }

    #[tracing::instrument(name = "Insert article", level = tracing::Level::TRACE, skip_all)]
    async fn insert_one(&self, article: Article) -> StoreResult<()> {
        let mut guard = self.0.lock().await;
        guard.push(article);
        Ok(())
    }

    #[tracing::instrument(name = "Delete all articles", level = tracing::Level::TRACE, skip_all)]
    async fn delete_all(&self) -> StoreResult<()> {
        self.0.lock().await.clear();
        Ok(())
    }

    #[tracing::instrument(name = "Find article by title", level = tracing::Level::TRACE, skip(self))]
    async fn find_one_by_title(&self, title: &str) -> StoreResult<Option<Article>> {
        let guard = self.0.lock().await;
        Ok(Self::position_of(&guard, title).map(|i| guard[i].clone()))
    }

    #[tracing::instrument(name = "Replace article by title", level = tracing::Level::TRACE, skip(self, form))]
    async fn replace_one_by_title(&self, title: &str, form: ArticleForm) -> StoreResult<()> {
        let mut guard = self.0.lock().await;
        if let Some(i) = Self::position_of(&guard, title) {
            guard[i].replace_with(form);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Update article by title", level = tracing::Level::TRACE, skip(self, patch))]
    async fn update_one_by_title(&self, title: &str, patch: ArticlePatch) -> StoreResult<()> {
        let mut guard = self.0.lock().await;
        if let Some(i) = Self::position_of(&guard, title) {
            guard[i].apply_patch(patch);
        }
        Ok(())
    }

    #[tracing::instrument(name = "Delete article by title", level = tracing::Level::TRACE, skip(self))]
    async fn delete_one_by_title(&self, title: &str) -> StoreResult<()> {
        let mut guard = self.0.lock().await;
        if let Some(i) = Self::position_of(&guard, title) {
            guard.remove(i);
        }
        Ok(())
    }
}
