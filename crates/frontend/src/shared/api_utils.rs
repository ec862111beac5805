//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs and making
//! authenticated JSON requests through `gloo-net`.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::system::session::storage;

/// Get the base URL for API requests
///
/// `HRMS_API_URL` set at build time wins; otherwise the backend is assumed
/// to live on the window origin.
///
/// # Returns
/// - API base URL like "https://acme.hrms.example" or the configured override
/// - Empty string if window is not available
pub fn api_base() -> String {
    if let Some(configured) = option_env!("HRMS_API_URL") {
        return configured.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Arguments
/// * `path` - The API path (should start with "/api/")
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    match storage::get_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Extract the server-reported `message` field from an error response,
/// falling back to a generic HTTP-status message.
async fn error_message(response: Response) -> String {
    let status = response.status();
    if let Ok(text) = response.text().await {
        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&text) {
            if let Some(message) = value.get("message").and_then(|m| m.as_str()) {
                return message.to_string();
            }
        }
    }
    format!("Request failed: HTTP {}", status)
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response).await
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = with_auth(Request::put(&api_url(path)))
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response).await
}

/// POST without a body, for transition endpoints like `/activate`.
pub async fn post_empty<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = with_auth(Request::post(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    decode(response).await
}

pub async fn delete(path: &str) -> Result<(), String> {
    let response = with_auth(Request::delete(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    Ok(())
}

/// GET returning raw bytes, for backend-generated file downloads.
pub async fn get_binary(path: &str) -> Result<Vec<u8>, String> {
    let response = with_auth(Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))
}
