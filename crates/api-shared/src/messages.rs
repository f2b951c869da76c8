//! Confirmation texts sent back by mutating article operations.
//!
//! Clients match on these strings, so they must not change.

pub const ARTICLE_CREATED: &str = "Successfully added a new article";

pub const ALL_ARTICLES_DELETED: &str = "Successfully deleted all articles";

/// Shared by full replace and partial update.
pub const ARTICLE_UPDATED: &str = "Successfully updated article.";

pub const ARTICLE_DELETED: &str = "Successfully deleted article.";
