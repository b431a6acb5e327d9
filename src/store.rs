//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store owns
//! the authoritative in-memory item collection; mutations go through the
//! helpers below, which apply the single-element merge operations from
//! `collection` instead of re-fetching the whole list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::collection;
use crate::models::RegistryItem;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The registry item collection (empty when signed out)
    pub items: Vec<RegistryItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole collection (initial load / session change).
pub fn store_set_items(store: &AppStore, items: Vec<RegistryItem>) {
    *store.items().write() = items;
}

/// Reset to the empty collection (logout, failed initial load).
pub fn store_clear_items(store: &AppStore) {
    store.items().write().clear();
}

/// Prepend a freshly created item.
pub fn store_prepend_item(store: &AppStore, item: RegistryItem) {
    collection::prepend_item(&mut store.items().write(), item);
}

/// Swap in the server's representation of an updated item, in place.
pub fn store_replace_item(store: &AppStore, item: RegistryItem) {
    collection::replace_item(&mut store.items().write(), item);
}

/// Remove a deleted item by id.
pub fn store_remove_item(store: &AppStore, id: u32) {
    collection::remove_item(&mut store.items().write(), id);
}
