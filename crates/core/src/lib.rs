//! # Wiki Core
//!
//! Core data operations for the article wiki.
//!
//! This crate contains the article model and everything needed to persist it:
//! - `Article` documents with optional `title` and `content`
//! - the `ArticleStore` trait with MongoDB and in-memory backends
//! - `ArticleService`, one store call per operation
//! - startup configuration
//!
//! **No API concerns**: HTTP routing, response shapes and servers belong in `api-rest` or
//! `api-shared`.

pub mod article;
pub mod config;
pub mod constants;
pub mod error;
pub mod service;
pub mod store;

pub use article::{Article, ArticleForm, ArticlePatch};
pub use config::{CoreConfig, StoreBackend};
pub use error::{ConfigError, ConfigResult, StoreError, StoreResult};
pub use service::ArticleService;
pub use store::{ArticleStore, InMemoryStore, MongoStore};
