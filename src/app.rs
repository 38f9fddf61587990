//! Root Dioxus application component
//!
//! This module contains the main App component that serves as the root of the UI tree.

use crate::storage::settings::{load_age_content_settings, load_privacy_settings};
use crate::types::{AgeContentSettings, PrivacySettings};
use crate::ui::Layout;
use dioxus::prelude::*;

/// Global application state shared across components
#[derive(Clone, Copy)]
pub struct AppState {
    pub age_settings: Signal<AgeContentSettings>,
    pub privacy_settings: Signal<PrivacySettings>,
}

impl AppState {
    pub fn new() -> Self {
        tracing::info!("AppState initialized");
        Self {
            age_settings: Signal::new(load_age_content_settings()),
            privacy_settings: Signal::new(load_privacy_settings()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

#[component]
pub fn App() -> Element {
    use_context_provider(AppState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        Layout {}
    }
}
