//! Delete Confirm Button Component
//!
//! Reusable inline delete confirmation with confirm/cancel actions.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows a Delete button initially. When clicked, swaps to "Delete?" with
/// confirm/cancel buttons so a single stray click never destroys an item.
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Callback to execute when the user confirms deletion
/// * `busy` - Outstanding-delete flag; disables controls against double-fire
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
    busy: ReadSignal<bool>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "Delete"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    prop:disabled=move || busy.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        if !busy.get() {
                            on_confirm.run(());
                        }
                    }
                >
                    "✓"
                </button>
                <button
                    class="cancel-btn"
                    prop:disabled=move || busy.get()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
