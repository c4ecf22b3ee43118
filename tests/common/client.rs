//! HTTP client wrapper for integration tests.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// The `{success, message?, data}` envelope every endpoint responds with.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default = "default_data")]
    pub data: Option<T>,
}

fn default_data<T>() -> Option<T> {
    None
}

/// Auth payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthBody {
    pub token: String,
    pub email: String,
    pub full_name: Option<String>,
    pub user_id: String,
}

/// Tag payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TagBody {
    pub id: String,
    pub name: String,
    pub color: String,
    pub created_at: String,
}

/// Task payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskBody {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub priority: String,
    pub completed: bool,
    pub due_date: Option<String>,
    pub tags: Vec<TagBody>,
    pub created_at: String,
}

/// Note payload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteBody {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub is_pinned: bool,
    pub tags: Vec<TagBody>,
    pub created_at: String,
}

/// Stats payload.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsBody {
    pub tasks: TaskStatsBody,
    pub notes: NoteStatsBody,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatsBody {
    pub total: u64,
    pub completed: u64,
    pub active: u64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NoteStatsBody {
    pub total: u64,
    pub pinned: u64,
}

/// API client carrying an optional bearer token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
            token: None,
        }
    }

    /// Returns a client that sends `Authorization: Bearer <token>`.
    pub fn with_token(&self, token: &str) -> Self {
        let mut client = self.clone();
        client.token = Some(token.to_string());
        client
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> (StatusCode, Envelope<T>) {
        let request = self.client.get(format!("{}{path}", self.base_url));
        self.send(request).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> (StatusCode, Envelope<T>) {
        let request = self.client.post(format!("{}{path}", self.base_url)).json(body);
        self.send(request).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &Value,
    ) -> (StatusCode, Envelope<T>) {
        let request = self.client.put(format!("{}{path}", self.base_url)).json(body);
        self.send(request).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> (StatusCode, Envelope<T>) {
        let request = self.client.patch(format!("{}{path}", self.base_url));
        self.send(request).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> (StatusCode, Envelope<T>) {
        let request = self.client.delete(format!("{}{path}", self.base_url));
        self.send(request).await
    }

    /// GET without envelope parsing, for the probe endpoints.
    pub async fn get_raw(&self, path: &str) -> (StatusCode, Value) {
        let response = self
            .client
            .get(format!("{}{path}", self.base_url))
            .send()
            .await
            .expect("Request failed");
        let status = response.status();
        let body = response.json().await.expect("Probe body was not JSON");
        (status, body)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> (StatusCode, Envelope<T>) {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await.expect("Request failed");
        let status = response.status();
        let envelope = response
            .json()
            .await
            .expect("Response body was not an envelope");
        (status, envelope)
    }
}
