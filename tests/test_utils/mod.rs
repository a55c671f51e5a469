//! Test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use axum::{Router, body::Body};
use serde_json::json;
use tempfile::TempDir;

use chatrelay::api::AppState;
use chatrelay::api::app;
use chatrelay::core::AppConfig;

pub const TEST_SYSTEM_MESSAGE: &str = "You are a test assistant.";
pub const TEST_MODEL: &str = "llama3-8b-8192";

/// A test application and the temporary directory its static files
/// are served from. The directory is removed when this is dropped so
/// keep it alive for the duration of the test.
pub struct TestApp {
    pub router: Router,
    _static_dir: TempDir,
}

/// Creates a test application router that relays to `api_hostname`,
/// usually a `mockito` server url.
pub fn test_app(api_hostname: &str) -> TestApp {
    test_app_with(api_hostname, false)
}

pub fn test_app_with(api_hostname: &str, strict_errors: bool) -> TestApp {
    let static_dir = tempfile::tempdir().expect("Failed to create static directory");
    fs::write(
        static_dir.path().join("index.html"),
        "<!DOCTYPE html><html><body><h1>Chat</h1></body></html>",
    )
    .expect("Failed to write index.html");

    let app_config = AppConfig {
        host: String::from("127.0.0.1"),
        port: String::from("5000"),
        api_hostname: api_hostname.to_string(),
        api_key: String::from("test-api-key"),
        model: String::from(TEST_MODEL),
        system_message: String::from(TEST_SYSTEM_MESSAGE),
        static_dir: static_dir.path().display().to_string(),
        request_timeout: Duration::from_secs(5),
        strict_errors,
    };
    let app_state = AppState::new(app_config);

    TestApp {
        router: app(Arc::new(RwLock::new(app_state))),
        _static_dir: static_dir,
    }
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not utf8")
}

/// A successful chat completion response body with the given content
pub fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": TEST_MODEL,
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }],
        "usage": {"prompt_tokens": 10, "completion_tokens": 5, "total_tokens": 15}
    })
    .to_string()
}
