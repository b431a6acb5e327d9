//! Local Storage Access
//!
//! Thin wrappers over `window.localStorage`: the bearer token and the
//! per-user due-date fallback used by the countdown pill.

const TOKEN_KEY: &str = "token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Persisted bearer token, if any.
pub fn token() -> Option<String> {
    local_storage().and_then(|s| s.get_item(TOKEN_KEY).ok().flatten())
}

pub fn set_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Storage key for a user's due date; namespaced so users on a shared
/// device never see each other's countdown.
pub fn due_date_key(username: &str) -> String {
    format!("dueDate_{}", username)
}

/// Stored `YYYY-MM-DD` due date for the given user.
pub fn due_date(username: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(&due_date_key(username)).ok().flatten())
}

pub fn set_due_date(username: &str, date: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(&due_date_key(username), date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_due_date_key_is_namespaced_per_user() {
        assert_eq!(due_date_key("mvwebb"), "dueDate_mvwebb");
        assert_ne!(due_date_key("a"), due_date_key("b"));
    }
}
