//! ParentDash desktop entry point

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use dioxus::desktop::{Config, WindowBuilder};
use dioxus::prelude::*;
use parentdash::app::App;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("parentdash=info")),
        )
        .init();

    tracing::info!("Starting ParentDash");

    let window = WindowBuilder::new()
        .with_title("ParentDash")
        .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 760.0));

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(App);
}
