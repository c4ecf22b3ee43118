//! In-process server harness for integration tests.
//!
//! Spawns the full router over fresh in-memory stores on an ephemeral port,
//! so every test gets an isolated instance and no external services.

use tasknotes::api::routes::create_router;
use tasknotes::infrastructure::{AccessMode, AppConfig, AppDependencies};

/// Signing secret shared by the harness and token-forging tests.
pub const TEST_SECRET: &str = "integration-test-secret";

/// A running application instance.
pub struct TestApp {
    pub base_url: String,
}

/// Spawns an enforced-mode instance.
pub async fn spawn_app() -> TestApp {
    spawn_app_in_mode(AccessMode::Enforced).await
}

/// Spawns an instance in the given access mode.
pub async fn spawn_app_in_mode(mode: AccessMode) -> TestApp {
    let config = AppConfig {
        jwt_secret: TEST_SECRET.to_string(),
        jwt_expiration_secs: 3600,
        access_mode: mode,
        cors_allowed_origins: vec![],
        database_url: None,
        app_host: "127.0.0.1".to_string(),
        app_port: 0,
    };
    let router = create_router(AppDependencies::in_memory(config));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let address = listener.local_addr().expect("Failed to read local address");
    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("Test server crashed");
    });

    TestApp {
        base_url: format!("http://{address}"),
    }
}
