//! Article storage backends.
//!
//! The article service talks to the document store through [`ArticleStore`].
//! Two backends are provided:
//!
//! - [`MongoStore`], the production backend, one shared driver client per process
//! - [`InMemoryStore`], for tests and local development
//!
//! Every method maps to exactly one store call. "By title" operations match on
//! exact equality and act on the first matching document only; finding no
//! match is never an error.

mod memory;
mod mongo;

pub use memory::InMemoryStore;
pub use mongo::MongoStore;

use crate::article::{Article, ArticleForm, ArticlePatch};
use crate::config::{CoreConfig, StoreBackend};
use crate::error::{ConfigError, ConfigResult, StoreResult};
use std::sync::Arc;

#[async_trait::async_trait]
/// The interface of an article storage backend.
pub trait ArticleStore: std::fmt::Debug + Send + Sync {
    /// Returns every stored article.
    async fn find_all(&self) -> StoreResult<Vec<Article>>;

    /// Inserts one new document with exactly the supplied fields.
    async fn insert_one(&self, article: Article) -> StoreResult<()>;

    /// Removes every document in the collection.
    async fn delete_all(&self) -> StoreResult<()>;

    /// Finds the first document whose title equals `title`.
    async fn find_one_by_title(&self, title: &str) -> StoreResult<Option<Article>>;

    /// Overwrites the whole field set of the first document titled `title`.
    ///
    /// Nothing is created when no document matches.
    async fn replace_one_by_title(&self, title: &str, form: ArticleForm) -> StoreResult<()>;

    /// Merges the supplied fields into the first document titled `title`.
    async fn update_one_by_title(&self, title: &str, patch: ArticlePatch) -> StoreResult<()>;

    /// Removes the first document titled `title`.
    async fn delete_one_by_title(&self, title: &str) -> StoreResult<()>;
}

/// Builds the store handle selected by `cfg`.
///
/// Called once at startup; the returned handle is shared by every request.
pub async fn connect(cfg: &CoreConfig) -> ConfigResult<Arc<dyn ArticleStore>> {
    match cfg.store_backend() {
        StoreBackend::Memory => {
            tracing::warn!("using in-memory article store, data will not survive a restart");
            Ok(Arc::new(InMemoryStore::new()))
        }
        StoreBackend::Mongo => {
            let store = MongoStore::connect(
                cfg.mongodb_uri(),
                cfg.database_name(),
                cfg.collection_name(),
            )
            .await
            .map_err(ConfigError::Connect)?;
            Ok(Arc::new(store))
        }
    }
}
