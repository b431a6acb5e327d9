//! Resource Client
//!
//! Fetch plumbing shared by the auth, registry, and users endpoints:
//! bearer-credential headers, defensive response-body parsing, and the
//! single `RequestFailed` error kind.

mod auth;
mod registry;
mod users;

pub use auth::{decode_user, sign_in, sign_up, Credentials};
pub use registry::{create, create_comment, index, remove, show, update};
pub use users::index as list_users;

use serde_json::Value;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::storage;

/// The one failure kind crossing the resource boundary: a human-readable
/// message from the server's error body, a default, or a transport error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    RequestFailed(String),
}

impl ApiError {
    fn from_js(err: JsValue) -> Self {
        let msg = err
            .as_string()
            .unwrap_or_else(|| format!("{:?}", err));
        ApiError::RequestFailed(msg)
    }
}

/// Request body variants the backend accepts.
pub(crate) enum Body {
    None,
    /// JSON text; sets `Content-Type: application/json`.
    Json(String),
    /// Multipart form; the browser sets the boundary header itself.
    Form(web_sys::FormData),
}

/// Parse a response body defensively: empty text becomes an empty mapping,
/// non-JSON text is wrapped as `{"error": text}` so that error-message
/// extraction never itself fails.
pub(crate) fn parse_body(text: &str) -> Value {
    if text.is_empty() {
        return Value::Object(Default::default());
    }
    serde_json::from_str(text).unwrap_or_else(|_| serde_json::json!({ "error": text }))
}

/// Error message for a failed response: the body's `error` field if
/// present, otherwise the per-operation default.
pub(crate) fn error_message(body: &Value, default: &str) -> String {
    body.get("error")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| default.to_string())
}

/// Issue a request and normalize the response into a parsed JSON value.
/// Every request carries the persisted bearer credential.
pub(crate) async fn request(
    method: &str,
    url: &str,
    body: Body,
    default_err: &str,
) -> Result<Value, ApiError> {
    let headers = Headers::new().map_err(ApiError::from_js)?;
    let token = storage::token().unwrap_or_default();
    headers
        .append("Authorization", &format!("Bearer {}", token))
        .map_err(ApiError::from_js)?;

    let opts = RequestInit::new();
    opts.set_method(method);
    match body {
        Body::None => {}
        Body::Json(json) => {
            headers
                .append("Content-Type", "application/json")
                .map_err(ApiError::from_js)?;
            opts.set_body(&JsValue::from_str(&json));
        }
        Body::Form(form) => {
            // No Content-Type here: the browser adds the multipart boundary.
            opts.set_body(form.as_ref());
        }
    }
    opts.set_headers(headers.as_ref());

    let request = Request::new_with_str_and_init(url, &opts).map_err(ApiError::from_js)?;
    let window = web_sys::window()
        .ok_or_else(|| ApiError::RequestFailed("no window".to_string()))?;
    let resp: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(ApiError::from_js)?
        .dyn_into()
        .map_err(ApiError::from_js)?;

    let text = JsFuture::from(resp.text().map_err(ApiError::from_js)?)
        .await
        .map_err(ApiError::from_js)?
        .as_string()
        .unwrap_or_default();
    let value = parse_body(&text);

    if resp.ok() {
        Ok(value)
    } else {
        Err(ApiError::RequestFailed(error_message(&value, default_err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_body_parses_to_empty_mapping() {
        let value = parse_body("");
        assert_eq!(value, json!({}));
    }

    #[test]
    fn test_non_json_body_is_wrapped_as_error() {
        let value = parse_body("Internal Server Error");
        assert_eq!(value, json!({ "error": "Internal Server Error" }));
    }

    #[test]
    fn test_json_body_parses_through() {
        let value = parse_body(r#"{"id": 3, "item_name": "Crib"}"#);
        assert_eq!(value["id"], 3);
    }

    #[test]
    fn test_error_message_prefers_body_error_field() {
        let body = json!({ "error": "Item not found" });
        assert_eq!(error_message(&body, "Failed to update item"), "Item not found");
    }

    #[test]
    fn test_error_message_falls_back_to_default() {
        assert_eq!(
            error_message(&json!({}), "Failed to load items"),
            "Failed to load items"
        );
        assert_eq!(
            error_message(&json!({ "error": "" }), "Failed to load items"),
            "Failed to load items"
        );
        assert_eq!(
            error_message(&json!({ "error": 42 }), "Failed to load items"),
            "Failed to load items"
        );
    }

    #[test]
    fn test_plain_text_error_body_round_trips_into_message() {
        // Non-JSON error body -> wrapped -> extracted, never a parse failure.
        let value = parse_body("upstream timed out");
        assert_eq!(
            error_message(&value, "Failed to delete item"),
            "upstream timed out"
        );
    }
}
