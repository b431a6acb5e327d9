//! Registry Details Component
//!
//! Full detail for one item, independent of the list view's shallow copy:
//! owner-only edit/delete controls, the comment sequence, and the
//! dual-shape comment merge.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::collection;
use crate::components::{CommentForm, DeleteConfirmButton};
use crate::context::{use_app_context, Route};
use crate::countdown;
use crate::models::{Comment, Priority, RegistryItem, Status};
use crate::store::{store_remove_item, use_app_store};

#[component]
pub fn RegistryDetails(item_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (item, set_item) = signal::<Option<RegistryItem>>(None);
    let (commenting, set_commenting) = signal(false);
    let (comment_error, set_comment_error) = signal(String::new());
    let (comment_clear, set_comment_clear) = signal(0u32);
    let (deleting, set_deleting) = signal(false);

    // Load the active detail; the generation counter discards a stale
    // response when the user has already navigated elsewhere.
    let load_gen = StoredValue::new(0u32);
    Effect::new(move |_| {
        load_gen.update_value(|g| *g += 1);
        let gen = load_gen.get_value();
        spawn_local(async move {
            let result = api::show(item_id).await;
            if load_gen.get_value() != gen {
                return;
            }
            match result {
                Ok(fetched) => set_item.set(Some(fetched)),
                Err(err) => {
                    web_sys::console::log_1(&format!("[DETAILS] load failed: {}", err).into());
                }
            }
        });
    });

    // Owner check, recomputed from current detail + session on every render.
    let is_owner = move || match (ctx.user.get(), item.get()) {
        (Some(user), Some(item)) => item.item_owner_id == user.id,
        _ => false,
    };

    let on_delete = move |_| {
        if deleting.get() {
            return;
        }
        set_deleting.set(true);
        spawn_local(async move {
            match api::remove(item_id).await {
                Ok(deleted) => {
                    store_remove_item(&store, deleted.id);
                    ctx.navigate(Route::Items);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[DETAILS] delete failed: {}", err).into());
                    set_deleting.set(false);
                }
            }
        });
    };

    let on_comment = move |text: String| {
        set_commenting.set(true);
        set_comment_error.set(String::new());
        spawn_local(async move {
            match api::create_comment(item_id, &text).await {
                Ok(reply) => {
                    set_item.update(|detail| {
                        if let Some(detail) = detail {
                            collection::merge_comment_reply(detail, reply);
                        }
                    });
                    // Tells the form its text made it to the server.
                    set_comment_clear.update(|n| *n += 1);
                }
                Err(err) => {
                    web_sys::console::log_1(&format!("[DETAILS] comment failed: {}", err).into());
                    set_comment_error
                        .set("Comment failed to submit. Please try again.".to_string());
                }
            }
            set_commenting.set(false);
        });
    };

    view! {
        <main class="registry-details">
            {move || match item.get() {
                None => view! { <p class="loading">"Loading..."</p> }.into_any(),
                Some(item) => {
                    let status_class = match item.status {
                        Status::Purchased => "pill pill-purchased",
                        Status::Needed => "pill pill-needed",
                    };
                    let priority_class = match item.priority {
                        Priority::High => "pill pill-high",
                        Priority::Medium => "pill pill-medium",
                        Priority::Low => "pill pill-low",
                    };
                    let owner = if item.owner_username.is_empty() {
                        "Someone".to_string()
                    } else {
                        item.owner_username.clone()
                    };
                    let name = item.item_name.clone();
                    let added_line = format!("{} added this on {}", owner, item.created_date_label());
                    let status_str = item.status.as_str();
                    let priority_line = format!("{} priority", item.priority.as_str());
                    let category_str = item.category.as_str();
                    let image_url = item.image_url.clone();
                    let has_image = !image_url.trim().is_empty();
                    let image_alt = name.clone();
                    let description = item.description.clone();
                    let quantity = item.quantity;
                    let price = item.price_label();
                    let store_label = if item.store.trim().is_empty() {
                        "—".to_string()
                    } else {
                        item.store.clone()
                    };
                    let link = item.safe_link();
                    let notes = if item.notes.trim().is_empty() {
                        "—".to_string()
                    } else {
                        item.notes.clone()
                    };
                    let comments = item.comments.clone();
                    let has_comments = !comments.is_empty();

                    view! {
                        <div class="detail-card">
                            <div class="detail-header">
                                <div>
                                    <h1>{name}</h1>
                                    <p class="detail-meta">{added_line}</p>
                                    <div class="pill-row">
                                        <span class=status_class>{status_str}</span>
                                        <span class=priority_class>{priority_line}</span>
                                        <span class="pill">{category_str}</span>
                                    </div>
                                </div>

                                <Show when=is_owner>
                                    <div class="detail-actions">
                                        <button
                                            class="edit-btn"
                                            on:click=move |_| ctx.navigate(Route::ItemEdit(item_id))
                                        >
                                            "Edit"
                                        </button>
                                        <DeleteConfirmButton
                                            button_class="delete-btn"
                                            on_confirm=Callback::new(on_delete)
                                            busy=deleting
                                        />
                                    </div>
                                </Show>
                            </div>

                            <div class="detail-hero">
                                <Show
                                    when=move || has_image
                                    fallback=|| view! { <p class="detail-description">"No image added yet."</p> }
                                >
                                    <img
                                        class="detail-image"
                                        src=image_url.clone()
                                        alt=image_alt.clone()
                                    />
                                </Show>
                                <p class="detail-description">{description}</p>
                            </div>

                            <section class="detail-info">
                                <h2>"Item Details"</h2>
                                <div class="info-grid">
                                    <div class="info-item">
                                        <span class="info-label">"Quantity"</span>
                                        <span class="info-value">{quantity}</span>
                                    </div>
                                    <div class="info-item">
                                        <span class="info-label">"Price"</span>
                                        <span class="info-value">{price}</span>
                                    </div>
                                    <div class="info-item">
                                        <span class="info-label">"Store"</span>
                                        <span class="info-value">{store_label}</span>
                                    </div>
                                    <div class="info-item">
                                        <span class="info-label">"Product Link"</span>
                                        <span class="info-value">
                                            {match link {
                                                Some(href) => view! {
                                                    <a href=href target="_blank" rel="noreferrer">"Open"</a>
                                                }.into_any(),
                                                None => view! { "—" }.into_any(),
                                            }}
                                        </span>
                                    </div>
                                    <div class="info-item info-item-wide">
                                        <span class="info-label">"Notes"</span>
                                        <span class="info-value">{notes}</span>
                                    </div>
                                </div>
                            </section>

                            <section class="comments-section">
                                <h2>"Comments"</h2>

                                <CommentForm
                                    on_submit=Callback::new(on_comment)
                                    submitting=commenting
                                    error=comment_error
                                    clear=comment_clear
                                />

                                <Show
                                    when=move || has_comments
                                    fallback=|| view! { <p class="detail-meta">"No comments yet."</p> }
                                >
                                    <For
                                        each={
                                            let comments = comments.clone();
                                            move || comments.clone()
                                        }
                                        key=|c| c.comment_id
                                        children=move |comment: Comment| {
                                            let date = countdown::date_label(&comment.comment_created_at)
                                                .unwrap_or_else(|| "Unknown date".to_string());
                                            view! {
                                                <div class="comment-card">
                                                    <div class="comment-meta">
                                                        {format!("{} • {}", comment.comment_author_username, date)}
                                                    </div>
                                                    <div>{comment.comment_text.clone()}</div>
                                                </div>
                                            }
                                        }
                                    />
                                </Show>
                            </section>
                        </div>
                    }
                    .into_any()
                }
            }}
        </main>
    }
}
