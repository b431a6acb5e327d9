//! Registry Client App
//!
//! Root component: session restore, route switching, and the session-driven
//! item collection lifecycle.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::context::{AppContext, Route};
use crate::components::{
    Dashboard, Landing, NavBar, RegistryDetails, RegistryForm, RegistryList, SignInForm,
    SignUpForm,
};
use crate::models::User;
use crate::storage;
use crate::store::{store_clear_items, store_set_items, AppState};

/// Restore the session from a previously persisted token, if one decodes.
fn restore_session() -> Option<User> {
    let token = storage::token()?;
    api::decode_user(&token).ok()
}

#[component]
pub fn App() -> impl IntoView {
    // State
    let (user, set_user) = signal(restore_session());
    let (route, set_route) = signal(Route::Home);
    let store = Store::new(AppState::default());

    // Provide context to all children
    provide_context(AppContext::new((user, set_user), (route, set_route)));
    provide_context(store);

    // Session lifecycle: a session appearing (re)loads the collection; the
    // session disappearing empties it synchronously, regardless of any
    // response still in flight. The generation counter discards responses
    // superseded by a later session change.
    let load_gen = StoredValue::new(0u32);
    Effect::new(move |_| {
        load_gen.update_value(|g| *g += 1);
        let gen = load_gen.get_value();
        if user.get().is_none() {
            store_clear_items(&store);
            return;
        }
        spawn_local(async move {
            let result = api::index().await;
            if load_gen.get_value() != gen {
                return; // stale load
            }
            match result {
                Ok(items) => store_set_items(&store, items),
                Err(err) => {
                    // Load failure degrades to "no items", never a crash.
                    web_sys::console::log_1(&format!("[APP] load items failed: {}", err).into());
                    store_clear_items(&store);
                }
            }
        });
    });

    view! {
        <NavBar />

        <div class="app-content">
            {move || {
                let signed_in = user.get().is_some();
                match (route.get(), signed_in) {
                    (Route::Home, true) => view! { <Dashboard /> }.into_any(),
                    (Route::Home, false) => view! { <Landing /> }.into_any(),
                    (Route::SignIn, false) => view! { <SignInForm /> }.into_any(),
                    (Route::SignUp, false) => view! { <SignUpForm /> }.into_any(),
                    (Route::Items, true) => view! { <RegistryList /> }.into_any(),
                    (Route::ItemNew, true) => {
                        view! { <RegistryForm item_id=None /> }.into_any()
                    }
                    (Route::ItemDetail(id), true) => {
                        view! { <RegistryDetails item_id=id /> }.into_any()
                    }
                    (Route::ItemEdit(id), true) => {
                        view! { <RegistryForm item_id=Some(id) /> }.into_any()
                    }
                    // Anything unreachable in the current session falls back
                    // to the landing/dashboard split.
                    (_, false) => view! { <Landing /> }.into_any(),
                    (_, true) => view! { <Dashboard /> }.into_any(),
                }
            }}
        </div>
    }
}
