//! To-Do Widget Entry Point

mod models;
mod error;
mod task_list;
mod config;
mod controller;
mod components;
mod app;

use app::App;
use config::UiConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let config = UiConfig::default();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"[APP] Logger already installed".into());
    }

    log::info!("[APP] Mounting to-do widget");
    mount_to_body(move || view! { <App config=config /> });
}
