use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use wiki_core::{constants::DEFAULT_REST_ADDR, store, ArticleService, CoreConfig};

/// Main entry point for the wiki application
///
/// Resolves configuration once, connects the article store and serves the REST API.
///
/// # Environment Variables
/// - `WIKI_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `WIKI_STORE`: store backend, `mongodb` or `memory` (default: "mongodb")
/// - `MONGODB_URI`: MongoDB connection string (default: "mongodb://localhost:27017")
/// - `WIKI_DATABASE`: database name (default: "wikiDB")
/// - `WIKI_COLLECTION`: collection name (default: "articles")
/// - `WIKI_PUBLIC_DIR`: static files directory (default: "public", skipped if missing)
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the store client cannot be created,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("wiki_run=info".parse()?)
                .add_directive("api_rest=info".parse()?)
                .add_directive("wiki_core=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let addr = std::env::var("WIKI_REST_ADDR").unwrap_or_else(|_| DEFAULT_REST_ADDR.into());

    let cfg = CoreConfig::from_env_values(
        std::env::var("WIKI_STORE").ok(),
        std::env::var("MONGODB_URI").ok(),
        std::env::var("WIKI_DATABASE").ok(),
        std::env::var("WIKI_COLLECTION").ok(),
        std::env::var("WIKI_PUBLIC_DIR").ok(),
    )?;

    let store = store::connect(&cfg).await?;
    let state = AppState::new(ArticleService::new(store));
    let app = api_rest::app(state, Some(cfg.public_dir()));

    tracing::info!("++ Starting wiki REST API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
