//! Landing Component
//!
//! Logged-out home view.

use leptos::prelude::*;

use crate::context::{use_app_context, Route};

#[component]
pub fn Landing() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <main class="landing">
            <h1>"Baby Registry"</h1>
            <p class="landing-subtitle">
                "Keep every crib, stroller, and onesie in one shared list."
            </p>
            <div class="landing-actions">
                <button class="button-primary" on:click=move |_| ctx.navigate(Route::SignUp)>
                    "Sign Up"
                </button>
                <button class="button-ghost" on:click=move |_| ctx.navigate(Route::SignIn)>
                    "Sign In"
                </button>
            </div>
        </main>
    }
}
