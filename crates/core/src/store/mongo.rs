use super::ArticleStore;
use crate::article::{Article, ArticleForm, ArticlePatch};
use crate::error::StoreResult;
use futures::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::{Client, Collection};

/// MongoDB-backed article store.
///
/// Holds a single driver client; cloning the store clones the handle, not the
/// connection pool.
#[derive(Clone, Debug)]
pub struct MongoStore {
    collection: Collection<Article>,
}

impl MongoStore {
    /// Connects to `uri` and binds the `database.collection` namespace.
    ///
    /// A failed ping is logged rather than returned: the driver reconnects on
    /// demand, and each request reports its own store error.
    pub async fn connect(uri: &str, database: &str, collection: &str) -> StoreResult<Self> {
        let client = Client::with_uri_str(uri).await?;
        let db = client.database(database);

        match db.run_command(doc! { "ping": 1 }).await {
            Ok(_) => tracing::info!("-- Connected to MongoDB database {}", database),
            Err(e) => tracing::warn!("MongoDB ping failed, continuing: {}", e),
        }

        Ok(Self {
            collection: db.collection(collection),
        })
    }

    fn by_title(title: &str) -> Document {
        doc! { "title": title }
    }

    fn set_document(patch: ArticlePatch) -> Document {
        let mut set = Document::new();
        if let Some(title) = patch.title {
            set.insert("title", title);
        }
        if let Some(content) = patch.content {
            set.insert("content", content);
        }
        set
    }
}

#[async_trait::async_trait]
impl ArticleStore for MongoStore {
    #[tracing::instrument(name = "Find all articles", level = tracing::Level::TRACE, skip_all)]
    async fn find_all(&self) -> StoreResult<Vec<Article>> {
        let cursor = self.collection.find(doc! {}).await?;
        let articles: Vec<Article> = cursor.try_collect().await?;
        Ok(articles)
    }

    #[tracing::instrument(name = "Insert article", level = tracing::Level::TRACE, skip_all)]
    async fn insert_one(&self, article: Article) -> StoreResult<()> {
        self.collection.insert_one(article).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Delete all articles", level = tracing::Level::TRACE, skip_all)]
    async fn delete_all(&self) -> StoreResult<()> {
        self.collection.delete_many(doc! {}).await?;
        Ok(())
    }

    #[tracing::instrument(name = "Find article by title", level = tracing::Level::TRACE, skip(self))]
    async fn find_one_by_title(&self, title: &str) -> StoreResult<Option<Article>> {
        Ok(self.collection.find_one(Self::by_title(title)).await?)
    }

    #[tracing::instrument(name = "Replace article by title", level = tracing::Level::TRACE, skip(self, form))]
    async fn replace_one_by_title(&self, title: &str, form: ArticleForm) -> StoreResult<()> {
        let replacement = Article::from(form);
        let result = self
            .collection
            .replace_one(Self::by_title(title), replacement)
            .await?;
        tracing::debug!(matched = result.matched_count, "replace finished");
        Ok(())
    }

    #[tracing::instrument(name = "Update article by title", level = tracing::Level::TRACE, skip(self, patch))]
    async fn update_one_by_title(&self, title: &str, patch: ArticlePatch) -> StoreResult<()> {
        // The server rejects an empty `$set`, so an empty patch never leaves the process.
        if patch.is_empty() {
            return Ok(());
        }
        let update = doc! { "$set": Self::set_document(patch) };
        let result = self
            .collection
            .update_one(Self::by_title(title), update)
            .await?;
        tracing::debug!(matched = result.matched_count, "update finished");
        Ok(())
    }

    #[tracing::instrument(name = "Delete article by title", level = tracing::Level::TRACE, skip(self))]
    async fn delete_one_by_title(&self, title: &str) -> StoreResult<()> {
        self.collection.delete_one(Self::by_title(title)).await?;
        Ok(())
    }
}
