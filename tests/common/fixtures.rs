//! Test data factories for integration tests.

use serde_json::{Value, json};
use uuid::Uuid;

use super::client::{ApiClient, AuthBody};
use super::server::TestApp;

/// A unique email per call so tests never collide on the signup conflict.
pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@example.com", Uuid::new_v4())
}

pub fn signup_body(email: &str) -> Value {
    json!({
        "email": email,
        "password": "password123",
        "fullName": "Test User"
    })
}

pub fn login_body(email: &str, password: &str) -> Value {
    json!({ "email": email, "password": password })
}

pub fn task_body(title: &str) -> Value {
    json!({ "title": title })
}

pub fn note_body(title: &str) -> Value {
    json!({ "title": title })
}

pub fn tag_body(name: &str) -> Value {
    json!({ "name": name })
}

/// Signs up a fresh user and returns a client that authenticates as them.
pub async fn authenticated_client(app: &TestApp) -> ApiClient {
    authenticated_client_as(app, &unique_email("user")).await
}

/// Signs up the given email and returns a client that authenticates as them.
pub async fn authenticated_client_as(app: &TestApp, email: &str) -> ApiClient {
    let client = ApiClient::new(&app.base_url);
    let (status, envelope) = client
        .post::<AuthBody>("/auth/signup", &signup_body(email))
        .await;
    assert!(status.is_success(), "signup failed during fixture setup");
    let auth = envelope.data.expect("signup returned no data");
    client.with_token(&auth.token)
}
