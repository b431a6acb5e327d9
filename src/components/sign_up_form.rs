//! Sign Up Form Component
//!
//! Username/password/confirm/due-date with synchronous validation before
//! any request is sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Credentials};
use crate::context::{use_app_context, Route};
use crate::storage;

#[component]
pub fn SignUpForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (password_conf, set_password_conf) = signal(String::new());
    let (due_date, set_due_date) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    // Only flag a mismatch once both fields have content.
    let password_mismatch = move || {
        let p = password.get();
        let c = password_conf.get();
        !p.is_empty() && !c.is_empty() && p != c
    };

    let form_invalid = move || {
        username.get().is_empty()
            || password.get().is_empty()
            || password_conf.get().is_empty()
            || due_date.get().is_empty()
            || password_mismatch()
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_message.set(String::new());

        if password.get() != password_conf.get() {
            set_message.set("Passwords do not match.".to_string());
            return;
        }
        set_submitting.set(true);

        let creds = Credentials {
            username: username.get(),
            password: password.get(),
        };
        let date = due_date.get();
        spawn_local(async move {
            match api::sign_up(&creds).await {
                Ok(user) => {
                    // Persist the due date for the countdown pill before the
                    // navbar recomputes on the session change.
                    storage::set_due_date(&user.username, &date);
                    ctx.sign_in(user);
                    ctx.navigate(Route::Items);
                }
                Err(err) => {
                    set_message.set(err.to_string());
                    set_submitting.set(false);
                }
            }
        });
    };

    let text_input = move |ev: &web_sys::Event| -> String {
        // Clear any prior message as the user edits
        set_message.set(String::new());
        event_target_value(ev)
    };

    view! {
        <main class="auth-page">
            <section class="auth-card">
                <h1>"Sign Up"</h1>
                <p class="auth-subtitle">"Create an account to start your registry."</p>

                <Show when=move || !message.get().is_empty()>
                    <p class="form-message">{move || message.get()}</p>
                </Show>

                <form class="auth-form" autocomplete="off" on:submit=on_submit>
                    <div class="field">
                        <label for="username">"Username"</label>
                        <input
                            type="text"
                            id="username"
                            required
                            prop:value=move || username.get()
                            prop:disabled=move || submitting.get()
                            on:input=move |ev| set_username.set(text_input(&ev))
                        />
                    </div>

                    <div class="field">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            required
                            prop:value=move || password.get()
                            prop:disabled=move || submitting.get()
                            on:input=move |ev| set_password.set(text_input(&ev))
                        />
                    </div>

                    <div class="field">
                        <label for="password-conf">"Confirm Password"</label>
                        <input
                            type="password"
                            id="password-conf"
                            required
                            prop:value=move || password_conf.get()
                            prop:disabled=move || submitting.get()
                            on:input=move |ev| set_password_conf.set(text_input(&ev))
                        />
                    </div>

                    <div class="field">
                        <label for="due-date">"Due Date"</label>
                        <input
                            type="date"
                            id="due-date"
                            required
                            prop:value=move || due_date.get()
                            prop:disabled=move || submitting.get()
                            on:input=move |ev| set_due_date.set(text_input(&ev))
                        />
                    </div>

                    <Show when=password_mismatch>
                        <p class="form-message">"Passwords do not match."</p>
                    </Show>

                    <div class="form-actions">
                        <button
                            class="button-primary"
                            type="submit"
                            prop:disabled=move || form_invalid() || submitting.get()
                        >
                            {move || if submitting.get() { "Creating Account..." } else { "Sign Up" }}
                        </button>
                        <button
                            type="button"
                            class="button-ghost"
                            prop:disabled=move || submitting.get()
                            on:click=move |_| ctx.navigate(Route::Home)
                        >
                            "Cancel"
                        </button>
                    </div>
                </form>

                <p class="footer-text">
                    "Already have an account? "
                    <a href="#" on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.navigate(Route::SignIn);
                    }>"Sign In"</a>
                </p>
            </section>
        </main>
    }
}
