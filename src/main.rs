//! Meal Planner Frontend Entry Point

mod models;
mod error;
mod config;
mod logging;
mod commands;
mod session;
mod shopping;
mod search;
mod preferences;
mod scroll;
mod store;
mod context;
mod page;
mod components;
mod app;

use app::App;
use config::PlannerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = PlannerConfig::from_window();
    let level = loaded.as_ref().map(PlannerConfig::log_filter).unwrap_or(log::LevelFilter::Info);
    logging::init(level);

    let config = loaded.unwrap_or_else(|e| {
        log::warn!("[APP] {}, using defaults", e);
        PlannerConfig::default()
    });
    log::info!("[APP] mounting planner (stale responses dropped: {})", config.discard_stale_responses);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
