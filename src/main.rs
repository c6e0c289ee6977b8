//! Lost-Item Frontend Entry Point

mod models;
mod dates;
mod filter;
mod error;
mod config;
mod loader;
mod backend;
mod context;
mod store;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_logger::init(log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("[MAIN] Logger init failed: {}", e).into());
    }
    mount_to_body(App);
}
