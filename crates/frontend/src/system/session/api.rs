use contracts::system::auth::{LoginRequest, LoginResponse, UserProfile};
use gloo_net::http::Request;

use crate::shared::api_utils::api_base;

/// Login with email and password against the tenant-scoped auth endpoint
pub async fn login(email: String, password: String, tenant: String) -> Result<LoginResponse, String> {
    let request = LoginRequest {
        email,
        password,
        tenant,
    };

    let response = Request::post(&format!("{}/api/auth/login", api_base()))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Login failed: {}", response.status()));
    }

    response
        .json::<LoginResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Logout (revoke the session token)
pub async fn logout(token: String) -> Result<(), String> {
    let response = Request::post(&format!("{}/api/auth/logout", api_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Logout failed: {}", response.status()));
    }

    Ok(())
}

/// Validate the stored token by fetching the current profile
pub async fn get_current_user(token: &str) -> Result<UserProfile, String> {
    let response = Request::get(&format!("{}/api/auth/me", api_base()))
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Get current user failed: {}", response.status()));
    }

    response
        .json::<UserProfile>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
