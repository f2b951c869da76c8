//! Article documents.
//!
//! An article has two declared fields, `title` and `content`. Neither is
//! required: a field missing from a request body stays missing in the stored
//! document rather than becoming an empty string. The store's own record id is
//! not part of the model, so it never leaves the service.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A stored article.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// Field set sent when creating or fully replacing an article.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticleForm {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// Field set sent when partially updating an article.
///
/// Keys other than the declared article fields are dropped during
/// deserialisation and never reach the store.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ArticlePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl Article {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Overwrites the entire field set. Fields absent from `form` are removed.
    pub fn replace_with(&mut self, form: ArticleForm) {
        *self = Article::from(form);
    }

    /// Merges only the fields present in `patch`.
    pub fn apply_patch(&mut self, patch: ArticlePatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(content) = patch.content {
            self.content = Some(content);
        }
    }
}

impl From<ArticleForm> for Article {
    fn from(form: ArticleForm) -> Self {
        Self {
            title: form.title,
            content: form.content,
        }
    }
}

impl ArticlePatch {
    /// True when no declared field was supplied.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}
