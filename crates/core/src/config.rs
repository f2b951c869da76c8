//! Core runtime configuration.
//!
//! This module defines configuration that should be resolved once at process startup and then
//! passed into core services. Request handlers never read process-wide environment variables.

use crate::constants::{
    ARTICLES_COLLECTION, DEFAULT_DATABASE_NAME, DEFAULT_MONGODB_URI, DEFAULT_PUBLIC_DIR,
};
use crate::error::{ConfigError, ConfigResult};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Which article store backend to construct at startup.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StoreBackend {
    #[default]
    Mongo,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(StoreBackend::Mongo),
            "memory" | "in-memory" => Ok(StoreBackend::Memory),
            other => Err(ConfigError::UnknownBackend(other.to_string())),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    store_backend: StoreBackend,
    mongodb_uri: String,
    database_name: String,
    collection_name: String,
    public_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    pub fn new(
        store_backend: StoreBackend,
        mongodb_uri: String,
        database_name: String,
        collection_name: String,
        public_dir: PathBuf,
    ) -> ConfigResult<Self> {
        if database_name.trim().is_empty() {
            return Err(ConfigError::InvalidInput(
                "database name cannot be empty".into(),
            ));
        }
        if collection_name.trim().is_empty() {
            return Err(ConfigError::InvalidInput(
                "collection name cannot be empty".into(),
            ));
        }

        Ok(Self {
            store_backend,
            mongodb_uri,
            database_name,
            collection_name,
            public_dir,
        })
    }

    /// Build a configuration from optional raw values, as read from the environment.
    ///
    /// Missing or blank values fall back to the defaults in [`crate::constants`].
    pub fn from_env_values(
        store_backend: Option<String>,
        mongodb_uri: Option<String>,
        database_name: Option<String>,
        collection_name: Option<String>,
        public_dir: Option<String>,
    ) -> ConfigResult<Self> {
        fn non_blank(value: Option<String>) -> Option<String> {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        }

        let store_backend = non_blank(store_backend)
            .map(|v| v.parse::<StoreBackend>())
            .transpose()?
            .unwrap_or_default();

        Self::new(
            store_backend,
            non_blank(mongodb_uri).unwrap_or_else(|| DEFAULT_MONGODB_URI.into()),
            non_blank(database_name).unwrap_or_else(|| DEFAULT_DATABASE_NAME.into()),
            non_blank(collection_name).unwrap_or_else(|| ARTICLES_COLLECTION.into()),
            PathBuf::from(non_blank(public_dir).unwrap_or_else(|| DEFAULT_PUBLIC_DIR.into())),
        )
    }

    pub fn store_backend(&self) -> StoreBackend {
        self.store_backend
    }

    pub fn mongodb_uri(&self) -> &str {
        &self.mongodb_uri
    }

    pub fn database_name(&self) -> &str {
        &self.database_name
    }

    pub fn collection_name(&self) -> &str {
        &self.collection_name
    }

    pub fn public_dir(&self) -> &Path {
        &self.public_dir
    }
}
