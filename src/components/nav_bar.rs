//! Nav Bar Component
//!
//! Brand, due-date countdown pill, route links, user pill, and logout.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::context::{use_app_context, Route};
use crate::countdown;
use crate::storage;

// Recompute the countdown hourly so a tab left open overnight stays right.
const COUNTDOWN_REFRESH_MS: u32 = 60 * 60 * 1000;

fn due_date_for(username: &str) -> chrono::NaiveDate {
    storage::due_date(username)
        .and_then(|s| countdown::parse_due_date(&s))
        .unwrap_or_else(countdown::fallback_due_date)
}

#[component]
fn NavLink(
    route: Route,
    label: &'static str,
) -> impl IntoView {
    let ctx = use_app_context();
    let is_active = move || ctx.route.get() == route;
    view! {
        <button
            class=move || if is_active() { "nav-link active" } else { "nav-link" }
            on:click=move |_| ctx.navigate(route)
        >
            {label}
        </button>
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();

    let (days_left, set_days_left) = signal::<Option<i64>>(None);

    // Countdown pill state: recompute on session change and hourly after.
    Effect::new(move |_| {
        match ctx.user.get() {
            Some(user) => {
                let due = due_date_for(&user.username);
                set_days_left.set(Some(countdown::days_left_from_today(due)));
                let interval = send_wrapper::SendWrapper::new(Interval::new(
                    COUNTDOWN_REFRESH_MS,
                    move || {
                        set_days_left.set(Some(countdown::days_left_from_today(due)));
                    },
                ));
                on_cleanup(move || drop(interval));
            }
            None => set_days_left.set(None),
        }
    });

    let countdown_pill = move || {
        let user = ctx.user.get()?;
        let days = days_left.get()?;
        let due = due_date_for(&user.username);
        let due_label = format!("Due {}", countdown::short_date(due));
        Some(view! {
            <span class="countdown-pill">
                <span class="countdown-strong">{countdown::countdown_label(days)}</span>
                <span class="countdown-sub">{due_label}</span>
            </span>
        })
    };

    let user_initial = move || {
        ctx.user
            .get()
            .and_then(|u| u.username.trim().chars().next())
            .map(|c| c.to_uppercase().to_string())
            .unwrap_or_else(|| "U".to_string())
    };

    view! {
        <header class="nav-wrap">
            <nav class="nav">
                <div class="brand">
                    <span class="brand-title">"Baby Registry"</span>
                    {countdown_pill}
                </div>

                <div class="links">
                    <NavLink route=Route::Home label="Home" />
                    <Show when=move || ctx.user.get().is_some()>
                        <NavLink route=Route::Items label="Registry" />
                        <NavLink route=Route::ItemNew label="Add Item" />
                    </Show>
                    <Show when=move || ctx.user.get().is_none()>
                        <NavLink route=Route::SignUp label="Sign Up" />
                        <NavLink route=Route::SignIn label="Sign In" />
                    </Show>
                </div>

                <div class="nav-right">
                    {move || ctx.user.get().map(|user| view! {
                        <span class="user-pill">
                            <span class="avatar">{user_initial()}</span>
                            <span>{user.username.clone()}</span>
                        </span>
                        <button class="logout-btn" on:click=move |_| ctx.sign_out()>
                            "Logout"
                        </button>
                    })}
                </div>
            </nav>
        </header>
    }
}
