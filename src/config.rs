//! Backend Configuration
//!
//! Base URL of the registry backend, overridable at build time.

/// Backend server URL, without a trailing slash.
pub fn server_url() -> &'static str {
    option_env!("REGISTRY_SERVER_URL").unwrap_or("http://localhost:3000")
}

/// Base URL of the item collection endpoint.
pub fn items_url() -> String {
    format!("{}/items", server_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_url_appends_collection_path() {
        assert!(items_url().ends_with("/items"));
        assert!(!server_url().ends_with('/'));
    }
}
