//! Frontend Models
//!
//! Data structures matching the backend's registry entities.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Signed-in user identity (decoded from the auth token payload)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
}

/// Item priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: &'static [Priority] = &[Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == s)
            .unwrap_or_default()
    }
}

/// Item categories (fixed backend set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    Diapering,
    Feeding,
    Clothing,
    Nursery,
    Bath,
    Travel,
    #[serde(rename = "Health & Safety")]
    HealthSafety,
    Toys,
    #[default]
    Other,
}

impl Category {
    pub const ALL: &'static [Category] = &[
        Category::Diapering,
        Category::Feeding,
        Category::Clothing,
        Category::Nursery,
        Category::Bath,
        Category::Travel,
        Category::HealthSafety,
        Category::Toys,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Diapering => "Diapering",
            Category::Feeding => "Feeding",
            Category::Clothing => "Clothing",
            Category::Nursery => "Nursery",
            Category::Bath => "Bath",
            Category::Travel => "Travel",
            Category::HealthSafety => "Health & Safety",
            Category::Toys => "Toys",
            Category::Other => "Other",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .unwrap_or_default()
    }
}

/// Purchase status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Status {
    #[default]
    Needed,
    Purchased,
}

impl Status {
    pub const ALL: &'static [Status] = &[Status::Needed, Status::Purchased];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Needed => "Needed",
            Status::Purchased => "Purchased",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        Self::ALL
            .iter()
            .copied()
            .find(|s2| s2.as_str() == s)
            .unwrap_or_default()
    }
}

/// Comment on a registry item (newest-first, never reordered)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: u32,
    pub comment_text: String,
    #[serde(default)]
    pub comment_author_username: String,
    #[serde(default)]
    pub comment_created_at: String,
}

fn default_quantity() -> u32 {
    1
}

/// Registry item (matches backend). Identity is `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryItem {
    pub id: u32,
    pub item_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
    #[serde(default)]
    pub store: String,
    /// Decimal text or empty; the backend is loose about this field.
    #[serde(default)]
    pub price: String,
    #[serde(default)]
    pub status: Status,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub item_owner_id: u32,
    #[serde(default)]
    pub owner_username: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

impl RegistryItem {
    /// USD display label for the price; empty or unparseable text degrades gracefully.
    pub fn price_label(&self) -> String {
        let raw = self.price.trim();
        if raw.is_empty() {
            return "—".to_string();
        }
        match raw.parse::<f64>() {
            Ok(n) => format!("${:.2}", n),
            Err(_) => raw.to_string(),
        }
    }

    /// Product link normalized to an absolute URL; None when blank.
    pub fn safe_link(&self) -> Option<String> {
        let raw = self.link.trim();
        if raw.is_empty() {
            return None;
        }
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Some(raw.to_string())
        } else {
            Some(format!("https://{}", raw))
        }
    }

    /// Short date label for `created_at` (RFC 3339 or bare date).
    pub fn created_date_label(&self) -> String {
        crate::countdown::date_label(&self.created_at)
            .unwrap_or_else(|| "Unknown date".to_string())
    }
}

/// Editable form state for creating or updating an item.
///
/// User inputs are kept as strings; coercion (quantity to number) happens
/// when building the multipart payload.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    pub item_name: String,
    pub description: String,
    pub quantity: String,
    pub priority: Priority,
    pub category: Category,
    pub store: String,
    pub price: String,
    pub status: Status,
    pub link: String,
    pub image_url: String,
    pub notes: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            item_name: String::new(),
            description: String::new(),
            quantity: "1".to_string(),
            priority: Priority::Medium,
            category: Category::Other,
            store: String::new(),
            price: String::new(),
            status: Status::Needed,
            link: String::new(),
            image_url: String::new(),
            notes: String::new(),
        }
    }
}

impl ItemForm {
    /// Pre-populate the form from an existing item (edit mode).
    pub fn from_item(item: &RegistryItem) -> Self {
        Self {
            item_name: item.item_name.clone(),
            description: item.description.clone(),
            quantity: item.quantity.to_string(),
            priority: item.priority,
            category: item.category,
            store: item.store.clone(),
            price: item.price.clone(),
            status: item.status,
            link: item.link.clone(),
            image_url: item.image_url.clone(),
            notes: item.notes.clone(),
        }
    }

    /// Quantity coerced to a number, clamped to at least 1.
    pub fn quantity_value(&self) -> u32 {
        self.quantity.trim().parse::<u32>().unwrap_or(1).max(1)
    }

    /// Multipart field (key, value) pairs, in backend field order.
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("item_name", self.item_name.clone()),
            ("description", self.description.clone()),
            ("quantity", self.quantity_value().to_string()),
            ("priority", self.priority.as_str().to_string()),
            ("category", self.category.as_str().to_string()),
            ("store", self.store.clone()),
            ("price", self.price.clone()),
            ("status", self.status.as_str().to_string()),
            ("link", self.link.clone()),
            ("image_url", self.image_url.clone()),
            ("notes", self.notes.clone()),
        ]
    }
}

/// The comment endpoint replies with either the full updated item or just
/// the new comment; callers must branch on which arrived.
#[derive(Debug, Clone, PartialEq)]
pub enum CommentReply {
    Item(RegistryItem),
    Comment(Comment),
}

impl CommentReply {
    /// Classify a raw reply value: an object carrying `id` and a `comments`
    /// array is the full item, anything else is a bare comment.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let is_item =
            value.get("id").is_some() && value.get("comments").map_or(false, Value::is_array);
        if is_item {
            serde_json::from_value(value).map(CommentReply::Item)
        } else {
            serde_json::from_value(value).map(CommentReply::Comment)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_item_deserializes_with_defaults() {
        let item: RegistryItem =
            serde_json::from_value(json!({ "id": 7, "item_name": "Crib" })).unwrap();
        assert_eq!(item.id, 7);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.priority, Priority::Medium);
        assert_eq!(item.category, Category::Other);
        assert_eq!(item.status, Status::Needed);
        assert!(item.comments.is_empty());
    }

    #[test]
    fn test_category_round_trips_health_and_safety() {
        let json = serde_json::to_string(&Category::HealthSafety).unwrap();
        assert_eq!(json, "\"Health & Safety\"");
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::HealthSafety);
        assert_eq!(
            Category::from_str_or_default("Health & Safety"),
            Category::HealthSafety
        );
    }

    #[test]
    fn test_enum_fallbacks_use_defaults() {
        assert_eq!(Priority::from_str_or_default("Urgent"), Priority::Medium);
        assert_eq!(Category::from_str_or_default("Gadgets"), Category::Other);
        assert_eq!(Status::from_str_or_default(""), Status::Needed);
    }

    #[test]
    fn test_price_label_formats_currency() {
        let mut item: RegistryItem =
            serde_json::from_value(json!({ "id": 1, "item_name": "x", "price": "129.5" }))
                .unwrap();
        assert_eq!(item.price_label(), "$129.50");
        item.price = String::new();
        assert_eq!(item.price_label(), "—");
        item.price = "TBD".to_string();
        assert_eq!(item.price_label(), "TBD");
    }

    #[test]
    fn test_safe_link_normalizes_scheme() {
        let mut item: RegistryItem =
            serde_json::from_value(json!({ "id": 1, "item_name": "x" })).unwrap();
        assert_eq!(item.safe_link(), None);
        item.link = "target.com/crib".to_string();
        assert_eq!(item.safe_link().as_deref(), Some("https://target.com/crib"));
        item.link = "http://target.com".to_string();
        assert_eq!(item.safe_link().as_deref(), Some("http://target.com"));
    }

    #[test]
    fn test_form_coerces_quantity() {
        let mut form = ItemForm::default();
        assert_eq!(form.quantity_value(), 1);
        form.quantity = "3".to_string();
        assert_eq!(form.quantity_value(), 3);
        form.quantity = "0".to_string();
        assert_eq!(form.quantity_value(), 1);
        form.quantity = "many".to_string();
        assert_eq!(form.quantity_value(), 1);
    }

    #[test]
    fn test_form_fields_cover_all_item_fields() {
        let form = ItemForm::default();
        let fields = form.fields();
        assert_eq!(fields.len(), 11);
        assert_eq!(fields[0], ("item_name", String::new()));
        assert_eq!(fields[2], ("quantity", "1".to_string()));
        assert_eq!(fields[3], ("priority", "Medium".to_string()));
    }

    #[test]
    fn test_form_round_trips_core_item_fields() {
        let item: RegistryItem = serde_json::from_value(json!({
            "id": 42,
            "item_name": "Bottle warmer",
            "description": "Keeps milk at temperature",
            "quantity": 2,
            "priority": "High",
            "category": "Feeding",
            "store": "Target",
            "price": "34.99",
            "status": "Purchased",
            "link": "https://target.com/warmer",
            "notes": "Any color"
        }))
        .unwrap();
        let form = ItemForm::from_item(&item);
        let fields: std::collections::HashMap<_, _> = form.fields().into_iter().collect();
        assert_eq!(fields["item_name"], item.item_name);
        assert_eq!(fields["description"], item.description);
        assert_eq!(fields["quantity"], "2");
        assert_eq!(fields["priority"], "High");
        assert_eq!(fields["category"], "Feeding");
        assert_eq!(fields["price"], item.price);
        assert_eq!(fields["status"], "Purchased");
    }

    #[test]
    fn test_comment_reply_classifies_full_item() {
        let reply = CommentReply::from_value(json!({
            "id": 4,
            "item_name": "Stroller",
            "comments": [
                { "comment_id": 9, "comment_text": "love it" }
            ]
        }))
        .unwrap();
        match reply {
            CommentReply::Item(item) => {
                assert_eq!(item.id, 4);
                assert_eq!(item.comments.len(), 1);
            }
            CommentReply::Comment(_) => panic!("expected full item"),
        }
    }

    #[test]
    fn test_comment_reply_classifies_bare_comment() {
        let reply = CommentReply::from_value(json!({
            "comment_id": 12,
            "comment_text": "so cute",
            "comment_author_username": "ana"
        }))
        .unwrap();
        match reply {
            CommentReply::Comment(c) => assert_eq!(c.comment_id, 12),
            CommentReply::Item(_) => panic!("expected bare comment"),
        }
    }
}
