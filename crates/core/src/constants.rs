//! Constants used throughout the wiki core crate.
//!
//! Store names and default connection settings live here so the binary, the
//! configuration layer and the tests agree on them.

/// Default MongoDB connection string when `MONGODB_URI` is not set.
pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";

/// Default database holding the article collection.
pub const DEFAULT_DATABASE_NAME: &str = "wikiDB";

/// Default collection name for articles.
pub const ARTICLES_COLLECTION: &str = "articles";

/// Default directory for static files served next to the API.
pub const DEFAULT_PUBLIC_DIR: &str = "public";

/// Default REST listen address.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";
