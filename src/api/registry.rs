//! Registry Item Endpoints
//!
//! CRUD against `{server}/items` plus nested comment creation. Items are
//! submitted as multipart form data; comments as JSON.

use serde_json::Value;

use super::{request, ApiError, Body};
use crate::config;
use crate::models::{CommentReply, ItemForm, RegistryItem};

fn form_data(form: &ItemForm) -> Result<web_sys::FormData, ApiError> {
    let data = web_sys::FormData::new().map_err(ApiError::from_js)?;
    for (key, value) in form.fields() {
        data.append_with_str(key, &value).map_err(ApiError::from_js)?;
    }
    Ok(data)
}

fn parse_item(value: Value, default_err: &str) -> Result<RegistryItem, ApiError> {
    serde_json::from_value(value).map_err(|_| ApiError::RequestFailed(default_err.to_string()))
}

/// A non-array collection body degrades to an empty collection rather
/// than an error.
fn parse_items(value: Value) -> Result<Vec<RegistryItem>, ApiError> {
    match value {
        Value::Array(_) => serde_json::from_value(value)
            .map_err(|_| ApiError::RequestFailed("Failed to load items".to_string())),
        _ => Ok(Vec::new()),
    }
}

/// GET /items — the full collection, server order.
pub async fn index() -> Result<Vec<RegistryItem>, ApiError> {
    let value = request("GET", &config::items_url(), Body::None, "Failed to load items").await?;
    parse_items(value)
}

/// GET /items/{id} — one item with its nested comments.
pub async fn show(id: u32) -> Result<RegistryItem, ApiError> {
    let url = format!("{}/{}", config::items_url(), id);
    let value = request("GET", &url, Body::None, "Failed to load item").await?;
    parse_item(value, "Failed to load item")
}

/// POST /items — multipart create; returns the item with its server-assigned
/// id and timestamp.
pub async fn create(form: &ItemForm) -> Result<RegistryItem, ApiError> {
    let body = Body::Form(form_data(form)?);
    let value = request("POST", &config::items_url(), body, "Failed to create item").await?;
    parse_item(value, "Failed to create item")
}

/// PUT /items/{id} — multipart update; a nonexistent id surfaces as the
/// server's error message, not distinguished locally.
pub async fn update(id: u32, form: &ItemForm) -> Result<RegistryItem, ApiError> {
    let url = format!("{}/{}", config::items_url(), id);
    let body = Body::Form(form_data(form)?);
    let value = request("PUT", &url, body, "Failed to update item").await?;
    parse_item(value, "Failed to update item")
}

/// DELETE /items/{id} — returns the deleted item's identity.
pub async fn remove(id: u32) -> Result<RegistryItem, ApiError> {
    let url = format!("{}/{}", config::items_url(), id);
    let value = request("DELETE", &url, Body::None, "Failed to delete item").await?;
    parse_item(value, "Failed to delete item")
}

/// POST /items/{id}/comments — JSON body; the server replies with either
/// the full updated item or just the new comment.
pub async fn create_comment(item_id: u32, comment_text: &str) -> Result<CommentReply, ApiError> {
    let url = format!("{}/{}/comments", config::items_url(), item_id);
    let json = serde_json::json!({ "comment_text": comment_text }).to_string();
    let value = request("POST", &url, Body::Json(json), "Failed to create comment").await?;
    CommentReply::from_value(value)
        .map_err(|_| ApiError::RequestFailed("Failed to create comment".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_items_accepts_a_sequence() {
        let items = parse_items(json!([
            { "id": 1, "item_name": "Crib" },
            { "id": 2, "item_name": "Stroller" }
        ]))
        .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, 1);
    }

    #[test]
    fn test_parse_items_degrades_non_array_to_empty() {
        assert!(parse_items(json!({ "message": "nothing here" })).unwrap().is_empty());
        assert!(parse_items(json!(null)).unwrap().is_empty());
        assert!(parse_items(json!([])).unwrap().is_empty());
    }
}
