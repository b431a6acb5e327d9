//! Registry Client Entry Point

mod api;
mod app;
mod collection;
mod components;
mod config;
mod context;
mod countdown;
mod models;
mod storage;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
