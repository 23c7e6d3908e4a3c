//! Daily Checklist Frontend Entry Point

mod app;
mod board;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod log;
mod models;
mod progress;
mod render;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
