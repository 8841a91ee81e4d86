//! Mood Todo Frontend Entry Point

mod app;
mod components;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    web_sys::console::log_1(&"[APP] mounting mood-todo".into());
    mount_to_body(App);
}
