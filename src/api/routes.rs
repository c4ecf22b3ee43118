//! Route configuration.
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | POST | /auth/signup | Register and issue a token |
//! | POST | /auth/login | Verify credentials and issue a token |
//! | GET | /tasks | List tasks (`?status=`, `?search=`) |
//! | GET | /tasks/{id} | Get one task |
//! | POST | /tasks | Create a task |
//! | PUT | /tasks/{id} | Partial update |
//! | PATCH | /tasks/{id}/toggle | Flip completion |
//! | DELETE | /tasks/{id} | Delete a task |
//! | GET | /notes | List notes (`?search=`) |
//! | GET | /notes/{id} | Get one note |
//! | POST | /notes | Create a note |
//! | PUT | /notes/{id} | Partial update |
//! | PATCH | /notes/{id}/pin | Flip pinned |
//! | DELETE | /notes/{id} | Delete a note |
//! | GET | /tags | List tags |
//! | GET | /tags/{id} | Get one tag |
//! | POST | /tags | Create a tag |
//! | PUT | /tags/{id} | Partial update |
//! | DELETE | /tags/{id} | Delete a tag |
//! | GET | /stats | Aggregate statistics |
//! | GET | / , /health , /public/test | Unauthenticated probes |
//!
//! The authentication gate wraps every route; the CORS layer sits outside
//! the gate so preflight requests never need a token.

use std::time::Duration;

use axum::extract::State;
use axum::http::{HeaderValue, Method, header};
use axum::routing::{get, patch, post};
use axum::{Json, Router, middleware};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::api::handlers::{auth, notes, stats, tags, tasks};
use crate::api::middleware::auth_gate::auth_gate;
use crate::infrastructure::{AppConfig, AppDependencies};

/// Root probe response.
#[derive(Debug, Clone, Serialize)]
pub struct RootResponse {
    pub status: String,
    pub message: String,
}

/// Health probe response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Public probe response.
#[derive(Debug, Clone, Serialize)]
pub struct PublicProbeResponse {
    pub message: String,
}

/// GET / - Unauthenticated liveness probe.
#[allow(clippy::unused_async)]
pub async fn root(State(_dependencies): State<AppDependencies>) -> Json<RootResponse> {
    Json(RootResponse {
        status: "OK".to_string(),
        message: "API is running!".to_string(),
    })
}

/// GET /health - Unauthenticated liveness probe.
#[allow(clippy::unused_async)]
pub async fn health_check(State(_dependencies): State<AppDependencies>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "UP".to_string(),
    })
}

/// GET /public/test - Static public probe.
#[allow(clippy::unused_async)]
pub async fn public_probe() -> Json<PublicProbeResponse> {
    Json(PublicProbeResponse {
        message: "This is a public endpoint".to_string(),
    })
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// Creates the Axum router with all API routes, the authentication gate,
/// and the CORS layer.
pub fn create_router(dependencies: AppDependencies) -> Router {
    let cors = cors_layer(dependencies.config());
    Router::new()
        // Probes
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/public/test", get(public_probe))
        // Auth routes
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        // Task routes
        .route("/tasks", get(tasks::list_tasks).post(tasks::create_task))
        .route(
            "/tasks/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .route("/tasks/{id}/toggle", patch(tasks::toggle_task))
        // Note routes
        .route("/notes", get(notes::list_notes).post(notes::create_note))
        .route(
            "/notes/{id}",
            get(notes::get_note)
                .put(notes::update_note)
                .delete(notes::delete_note),
        )
        .route("/notes/{id}/pin", patch(notes::toggle_note_pin))
        // Tag routes
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route(
            "/tags/{id}",
            get(tags::get_tag)
                .put(tags::update_tag)
                .delete(tags::delete_tag),
        )
        // Stats
        .route("/stats", get(stats::get_stats))
        // The gate runs for every route; CORS sits outside it.
        .layer(middleware::from_fn_with_state(
            dependencies.clone(),
            auth_gate,
        ))
        .layer(cors)
        .with_state(dependencies)
}
