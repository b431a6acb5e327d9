//! Application Context
//!
//! Session identity and the current route, provided via the Leptos
//! Context API. The session is an explicit signal threaded through the
//! context rather than an ambient global.

use leptos::prelude::*;

use crate::models::User;
use crate::storage;

/// Views reachable in the app. Which ones render depends on the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    SignIn,
    SignUp,
    Items,
    ItemNew,
    ItemDetail(u32),
    ItemEdit(u32),
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current signed-in user, or None - read
    pub user: ReadSignal<Option<User>>,
    /// Current signed-in user - write
    set_user: WriteSignal<Option<User>>,
    /// Current route - read
    pub route: ReadSignal<Route>,
    /// Current route - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(
        user: (ReadSignal<Option<User>>, WriteSignal<Option<User>>),
        route: (ReadSignal<Route>, WriteSignal<Route>),
    ) -> Self {
        Self {
            user: user.0,
            set_user: user.1,
            route: route.0,
            set_route: route.1,
        }
    }

    /// Switch to another view.
    pub fn navigate(&self, route: Route) {
        self.set_route.set(route);
    }

    /// Record a freshly signed-in user.
    pub fn sign_in(&self, user: User) {
        self.set_user.set(Some(user));
    }

    /// Clear the session: drop the persisted token, reset the user, and
    /// return to the landing view. The item collection resets via the
    /// session effect in `App`.
    pub fn sign_out(&self) {
        storage::clear_token();
        self.set_user.set(None);
        self.set_route.set(Route::Home);
    }
}

/// Get the app context from any component below `App`.
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
