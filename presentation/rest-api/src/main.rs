use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::{app_config::AppConfig, catalog_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Star rating service entry point
///
/// Loads the product catalog, wires the rating use cases and serves the
/// catalog, rating and widget endpoints.
/// - config/: Application configuration (server, CORS, catalog, rating)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers, DTOs and the HTML widget renderer
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Load configuration
    let config = AppConfig::from_env();

    // 4. Load the product catalog into the store
    let repository = catalog_config::init_repository(&config.catalog).await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(&config.rating, repository);

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
