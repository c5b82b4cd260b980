use dotenvy::dotenv;

mod api {
    pub mod error;
    pub mod tags;
    pub mod health {
        pub mod routes;
    }
    pub mod ingredient {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod recipe {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
    pub mod suggestion {
        pub mod dto;
        pub mod error_mapper;
        pub mod routes;
    }
}
mod config {
    pub mod app_config;
    pub mod cors_config;
    pub mod database_config;
    pub mod openai_config;
    pub mod server_config;
    pub mod suggestion_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod server;
}

use config::{app_config::AppConfig, database_config};
use setup::{dependency_injection::DependencyContainer, server::Server};

/// REST API Entry Point
///
/// Initializes the application, wires dependencies, and starts the HTTP server.
///
/// Hexagonal architecture with clear separation:
/// - config/: Application configuration (server, CORS, database, OpenAI, cache)
/// - setup/: Dependency injection and server setup
/// - api/: Route handlers and DTOs
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

    // 4. Initialize database and apply pending migrations
    let pool = database_config::init_database().await?;

    // 5. Wire dependencies
    let container = DependencyContainer::new(pool).await?;

    // 6. Run server
    Server::run(config, container).await?;

    Ok(())
}
