//! Task/notes manager server entry point.

use sqlx::postgres::PgPoolOptions;
use tasknotes::api::routes::create_router;
use tasknotes::infrastructure::{AppConfig, AppDependencies, PostgresStore};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tasknotes=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting task/notes manager...");

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Failed to load configuration: {error}");
            std::process::exit(1);
        }
    };

    tracing::info!(
        mode = ?config.access_mode,
        secret = %config.masked_secret(),
        "Configuration loaded: host={}, port={}",
        config.app_host,
        config.app_port
    );

    let bind_address = format!("{}:{}", config.app_host, config.app_port);

    // Select stores: Postgres when configured, in-memory otherwise.
    let dependencies = match config.database_url.clone() {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await
                .expect("Failed to connect to Postgres");
            let store = PostgresStore::new(pool.clone());
            store
                .run_migrations()
                .await
                .expect("Failed to apply schema");
            tracing::info!("Infrastructure initialized (Postgres)");
            AppDependencies::postgres(config, pool)
        }
        None => {
            tracing::info!("Infrastructure initialized (in-memory mode)");
            AppDependencies::in_memory(config)
        }
    };

    // Create router with middleware
    let app = create_router(dependencies).layer(TraceLayer::new_for_http());

    // Start server
    let listener = TcpListener::bind(&bind_address).await.unwrap();
    tracing::info!("Task/notes manager started on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  POST  /auth/signup       - Register and receive a token");
    tracing::info!("  POST  /auth/login        - Log in");
    tracing::info!("  GET   /tasks             - List tasks");
    tracing::info!("  POST  /tasks             - Create task");
    tracing::info!("  GET   /notes             - List notes");
    tracing::info!("  POST  /notes             - Create note");
    tracing::info!("  GET   /tags              - List tags");
    tracing::info!("  GET   /stats             - Aggregate statistics");
    tracing::info!("  GET   /health            - Health check");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    tracing::info!("Task/notes manager stopped");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install CTRL+C signal handler");
    tracing::info!("Shutdown signal received");
}
