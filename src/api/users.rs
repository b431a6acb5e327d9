//! Users Endpoint
//!
//! Dashboard listing of all registered users.

use serde_json::Value;

use super::{request, ApiError, Body};
use crate::config;
use crate::models::User;

/// GET /users — everyone with an account.
pub async fn index() -> Result<Vec<User>, ApiError> {
    let url = format!("{}/users", config::server_url());
    let value = request("GET", &url, Body::None, "Failed to load users").await?;
    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map_err(|_| ApiError::RequestFailed("Failed to load users".to_string())),
        _ => Ok(Vec::new()),
    }
}
