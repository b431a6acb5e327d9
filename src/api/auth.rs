//! Auth Endpoints
//!
//! Sign-up and sign-in against `{server}/auth/*`. The server replies with
//! a JWT whose payload carries the user; the token is persisted so every
//! later request can attach it.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::Serialize;
use serde_json::Value;

use super::{request, ApiError, Body};
use crate::config;
use crate::models::User;
use crate::storage;

/// Username/password pair for both auth forms.
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Decode the user from a JWT's payload segment. The backend nests the
/// user under a `payload` field; tolerate a flat payload too.
pub fn decode_user(token: &str) -> Result<User, ApiError> {
    let segment = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ApiError::RequestFailed("Malformed token".to_string()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| ApiError::RequestFailed("Malformed token".to_string()))?;
    let value: Value = serde_json::from_slice(&bytes)
        .map_err(|_| ApiError::RequestFailed("Malformed token".to_string()))?;
    let user = value.get("payload").cloned().unwrap_or(value);
    serde_json::from_value(user).map_err(|_| ApiError::RequestFailed("Malformed token".to_string()))
}

async fn auth_request(path: &str, creds: &Credentials, default_err: &str) -> Result<User, ApiError> {
    let url = format!("{}{}", config::server_url(), path);
    let json = serde_json::to_string(creds)
        .map_err(|e| ApiError::RequestFailed(e.to_string()))?;
    let value = request("POST", &url, Body::Json(json), default_err).await?;
    let token = value
        .get("token")
        .and_then(Value::as_str)
        .ok_or_else(|| ApiError::RequestFailed(default_err.to_string()))?;
    let user = decode_user(token)?;
    storage::set_token(token);
    Ok(user)
}

/// POST /auth/sign-up — create an account and sign straight in.
pub async fn sign_up(creds: &Credentials) -> Result<User, ApiError> {
    auth_request("/auth/sign-up", creds, "Sign up failed. Please try again.").await
}

/// POST /auth/sign-in
pub async fn sign_in(creds: &Credentials) -> Result<User, ApiError> {
    auth_request("/auth/sign-in", creds, "Sign in failed. Please try again.").await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_token(payload: &str) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{}.{}.sig", header, body)
    }

    #[test]
    fn test_decode_user_from_nested_payload() {
        let token = fake_token(r#"{"payload":{"id":3,"username":"mvwebb"},"exp":1}"#);
        let user = decode_user(&token).unwrap();
        assert_eq!(user.id, 3);
        assert_eq!(user.username, "mvwebb");
    }

    #[test]
    fn test_decode_user_from_flat_payload() {
        let token = fake_token(r#"{"id":8,"username":"sam"}"#);
        let user = decode_user(&token).unwrap();
        assert_eq!(user.id, 8);
    }

    #[test]
    fn test_decode_user_rejects_malformed_tokens() {
        assert!(decode_user("not-a-jwt").is_err());
        assert!(decode_user("a.%%%.c").is_err());
        let token = fake_token(r#"{"payload":{"name":"missing fields"}}"#);
        assert!(decode_user(&token).is_err());
    }
}
