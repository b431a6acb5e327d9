//! Registry Form Component
//!
//! Shared create/edit form for registry items. Edit mode pre-populates
//! from the backend; submission goes through the optimistic single-element
//! merge in the store, never a full re-fetch.

use leptos::prelude::*;
use leptos::task::spawn_local;
use crate::api;
use crate::context::{use_app_context, Route};
use crate::models::{Category, ItemForm, Priority, Status};
use crate::store::{store_prepend_item, store_replace_item, use_app_store};

#[component]
pub fn RegistryForm(item_id: Option<u32>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (form, set_form) = signal(ItemForm::default());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Edit mode: pre-populate from the backend.
    if let Some(id) = item_id {
        Effect::new(move |_| {
            spawn_local(async move {
                match api::show(id).await {
                    Ok(item) => set_form.set(ItemForm::from_item(&item)),
                    Err(err) => {
                        web_sys::console::log_1(&format!("[FORM] load item failed: {}", err).into());
                    }
                }
            });
        });
    }

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let data = form.get();
        if data.item_name.trim().is_empty() || data.description.trim().is_empty() {
            set_message.set("Item name and description are required.".to_string());
            return;
        }
        set_message.set(String::new());
        set_submitting.set(true);

        spawn_local(async move {
            let result = match item_id {
                Some(id) => api::update(id, &data).await.map(|item| {
                    store_replace_item(&store, item.clone());
                    Route::ItemDetail(item.id)
                }),
                None => api::create(&data).await.map(|item| {
                    store_prepend_item(&store, item);
                    Route::Items
                }),
            };
            match result {
                Ok(route) => ctx.navigate(route),
                Err(err) => {
                    web_sys::console::log_1(&format!("[FORM] save failed: {}", err).into());
                    set_message.set(err.to_string());
                    set_submitting.set(false);
                }
            }
        });
    };

    view! {
        <main class="registry-form-page">
            <h1>{if item_id.is_some() { "Edit Registry Item" } else { "Add Registry Item" }}</h1>

            <Show when=move || !message.get().is_empty()>
                <p class="form-message">{move || message.get()}</p>
            </Show>

            <form class="registry-form" on:submit=on_submit>
                <div class="form-row">
                    <div class="field">
                        <label>"Item Name"</label>
                        <input
                            type="text"
                            required
                            prop:value=move || form.get().item_name
                            on:input=move |ev| set_form.update(|f| f.item_name = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Quantity"</label>
                        <input
                            type="number"
                            min="1"
                            prop:value=move || form.get().quantity
                            on:input=move |ev| set_form.update(|f| f.quantity = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="field">
                    <label>"Description"</label>
                    <textarea
                        required
                        prop:value=move || form.get().description
                        on:input=move |ev| set_form.update(|f| f.description = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-row">
                    <div class="field">
                        <label>"Priority"</label>
                        <select on:change=move |ev| {
                            let v = event_target_value(&ev);
                            set_form.update(|f| f.priority = Priority::from_str_or_default(&v));
                        }>
                            {Priority::ALL.iter().map(|p| {
                                let p = *p;
                                view! {
                                    <option
                                        value=p.as_str()
                                        prop:selected=move || form.get().priority == p
                                    >
                                        {p.as_str()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                    <div class="field">
                        <label>"Category"</label>
                        <select on:change=move |ev| {
                            let v = event_target_value(&ev);
                            set_form.update(|f| f.category = Category::from_str_or_default(&v));
                        }>
                            {Category::ALL.iter().map(|c| {
                                let c = *c;
                                view! {
                                    <option
                                        value=c.as_str()
                                        prop:selected=move || form.get().category == c
                                    >
                                        {c.as_str()}
                                    </option>
                                }
                            }).collect_view()}
                        </select>
                    </div>
                </div>

                <div class="form-row">
                    <div class="field">
                        <label>"Store"</label>
                        <input
                            type="text"
                            placeholder="Target, Amazon, Walmart..."
                            prop:value=move || form.get().store
                            on:input=move |ev| set_form.update(|f| f.store = event_target_value(&ev))
                        />
                    </div>
                    <div class="field">
                        <label>"Price"</label>
                        <input
                            type="number"
                            step="0.01"
                            prop:value=move || form.get().price
                            on:input=move |ev| set_form.update(|f| f.price = event_target_value(&ev))
                        />
                    </div>
                </div>

                <div class="field">
                    <label>"Status"</label>
                    <select on:change=move |ev| {
                        let v = event_target_value(&ev);
                        set_form.update(|f| f.status = Status::from_str_or_default(&v));
                    }>
                        {Status::ALL.iter().map(|s| {
                            let s = *s;
                            view! {
                                <option
                                    value=s.as_str()
                                    prop:selected=move || form.get().status == s
                                >
                                    {s.as_str()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>

                <div class="field">
                    <label>"Product Link (optional)"</label>
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || form.get().link
                        on:input=move |ev| set_form.update(|f| f.link = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label>"Image URL (optional)"</label>
                    <input
                        type="url"
                        placeholder="https://..."
                        prop:value=move || form.get().image_url
                        on:input=move |ev| set_form.update(|f| f.image_url = event_target_value(&ev))
                    />
                </div>

                <div class="field">
                    <label>"Notes (optional)"</label>
                    <textarea
                        placeholder="Any extra notes..."
                        prop:value=move || form.get().notes
                        on:input=move |ev| set_form.update(|f| f.notes = event_target_value(&ev))
                    ></textarea>
                </div>

                <div class="form-actions">
                    <button class="button-primary" type="submit" prop:disabled=move || submitting.get()>
                        {move || if submitting.get() { "Saving..." } else { "Submit" }}
                    </button>
                    <button
                        type="button"
                        class="button-ghost"
                        prop:disabled=move || submitting.get()
                        on:click=move |_| ctx.navigate(Route::Items)
                    >
                        "Cancel"
                    </button>
                </div>
            </form>
        </main>
    }
}
