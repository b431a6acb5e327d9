//! Registry List Component
//!
//! Card grid of all registry items; clicking a card opens the detail view.

use leptos::prelude::*;

use crate::context::{use_app_context, Route};
use crate::models::{RegistryItem, Status};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn ItemCard(item: RegistryItem) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let status_class = match item.status {
        Status::Purchased => "pill pill-purchased",
        Status::Needed => "pill pill-needed",
    };
    let price = item.price_label();
    let image_url = item.image_url.clone();
    let has_image = !image_url.trim().is_empty();
    let image_alt = item.item_name.clone();

    view! {
        <div class="item-card" on:click=move |_| ctx.navigate(Route::ItemDetail(id))>
            <Show when=move || has_image>
                <img class="item-card-image" src=image_url.clone() alt=image_alt.clone() />
            </Show>
            <div class="item-card-body">
                <h2 class="item-card-name">{item.item_name.clone()}</h2>
                <p class="item-card-meta">
                    {item.category.as_str()} " · " {price.clone()}
                </p>
                <span class=status_class>{item.status.as_str()}</span>
            </div>
        </div>
    }
}

#[component]
pub fn RegistryList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <main class="registry-list">
            <h1>"Registry"</h1>

            <Show
                when=move || !store.items().read().is_empty()
                fallback=|| view! { <p class="empty-note">"No items yet."</p> }
            >
                <div class="item-grid">
                    <For
                        each=move || store.items().get()
                        key=|item| item.id
                        children=move |item: RegistryItem| view! { <ItemCard item /> }
                    />
                </div>
            </Show>

            <p class="item-count">
                {move || format!("{} items", store.items().read().len())}
            </p>
        </main>
    }
}
