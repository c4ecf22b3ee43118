//! Integration tests for the unauthenticated probes.

use crate::common::*;
use reqwest::StatusCode;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn health_responds_without_a_token() {
    let app = spawn_app().await;
    let client = ApiClient::new(&app.base_url);

    let (status, body) = client.get_raw("/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "UP");
}

#[rstest]
#[tokio::test]
async fn root_responds_without_a_token() {
    let app = spawn_app().await;
    let client = ApiClient::new(&app.base_url);

    let (status, body) = client.get_raw("/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "API is running!");
}

#[rstest]
#[tokio::test]
async fn public_probe_responds_without_a_token() {
    let app = spawn_app().await;
    let client = ApiClient::new(&app.base_url);

    let (status, body) = client.get_raw("/public/test").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "This is a public endpoint");
}
