//! Assertion helpers for the response envelope.

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use super::client::Envelope;

/// Asserts a 200 success envelope and returns its payload.
pub fn assert_success<T: DeserializeOwned>(status: StatusCode, envelope: Envelope<T>) -> T {
    assert_eq!(status, StatusCode::OK, "expected 200 OK");
    assert!(envelope.success, "expected success envelope");
    envelope.data.expect("success envelope carried no data")
}

/// Asserts the uniform 400 failure envelope and returns its message.
pub fn assert_failure<T: DeserializeOwned>(status: StatusCode, envelope: Envelope<T>) -> String {
    assert_eq!(
        status,
        StatusCode::BAD_REQUEST,
        "every handled error is a 400"
    );
    assert!(!envelope.success, "expected failure envelope");
    envelope.message.expect("failure envelope carried no message")
}
