//! Dashboard Component
//!
//! Signed-in home view: greeting plus the list of registered users.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::use_app_context;
use crate::models::User;

#[component]
pub fn Dashboard() -> impl IntoView {
    let ctx = use_app_context();

    let (users, set_users) = signal(Vec::<User>::new());

    Effect::new(move |_| {
        if ctx.user.get().is_none() {
            set_users.set(Vec::new());
            return;
        }
        spawn_local(async move {
            match api::list_users().await {
                Ok(fetched) => set_users.set(fetched),
                Err(err) => {
                    web_sys::console::log_1(&format!("[DASHBOARD] {}", err).into());
                }
            }
        });
    });

    view! {
        <main class="dashboard">
            <h1>
                {move || {
                    let name = ctx.user.get().map(|u| u.username).unwrap_or_default();
                    format!("Welcome, {}", name)
                }}
            </h1>

            <For
                each=move || users.get()
                key=|u| u.id
                children=move |u: User| {
                    view! { <p class="dashboard-user">{u.username}</p> }
                }
            />
        </main>
    }
}
