//! Sign In Form Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, Credentials};
use crate::context::{use_app_context, Route};

#[component]
pub fn SignInForm() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_message.set(String::new());
        set_submitting.set(true);

        let creds = Credentials {
            username: username.get(),
            password: password.get(),
        };
        spawn_local(async move {
            match api::sign_in(&creds).await {
                Ok(user) => {
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

    view! {
        <main class="auth-page">
            <section class="auth-card">
                <h1>"Sign In"</h1>
                <p class="auth-subtitle">"Welcome back — sign in to manage your registry."</p>

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
                            on:input=move |ev| {
                                // Clear any prior message as the user edits
                                set_message.set(String::new());
                                set_username.set(event_target_value(&ev));
                            }
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
                            on:input=move |ev| {
                                set_message.set(String::new());
                                set_password.set(event_target_value(&ev));
                            }
                        />
                    </div>

                    <div class="form-actions">
                        <button
                            class="button-primary"
                            type="submit"
                            prop:disabled=move || submitting.get()
                        >
                            {move || if submitting.get() { "Signing In..." } else { "Sign In" }}
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
                    "Don't have an account? "
                    <a href="#" on:click=move |ev: web_sys::MouseEvent| {
                        ev.prevent_default();
                        ctx.navigate(Route::SignUp);
                    }>"Sign Up"</a>
                </p>
            </section>
        </main>
    }
}
