//! Vault Frontend Entry Point

mod actions;
mod api;
mod app;
mod browser;
mod components;
mod config;
mod context;
mod detail;
mod filter;
mod forms;
mod models;
mod notify;
mod search;
mod store;
mod strength;
mod theme;
mod view;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
