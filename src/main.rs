#![allow(warnings)]
//! Recipe Box Frontend Entry Point

mod models;
mod config;
mod error;
mod api;
mod store;
mod tasks;
mod snapshot;
mod context;
mod components;
mod app;
#[cfg(test)]
mod test_support;

use app::App;
use console_logger::LoggerConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    console_logger::init(LoggerConfig::default());
    mount_to_body(App);
}
