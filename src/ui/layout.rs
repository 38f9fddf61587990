//! Application shell
//!
//! Sidebar navigation across the four dashboard screens.

#![allow(non_snake_case)]

use crate::ui::age_content::AgeContentScreen;
use crate::ui::education::EducationScreen;
use crate::ui::mood::MoodScreen;
use crate::ui::privacy::PrivacyScreen;
use dioxus::prelude::*;

#[derive(PartialEq, Clone, Copy)]
enum Screen {
    AgeContent,
    Education,
    Mood,
    Privacy,
}

pub fn Layout() -> Element {
    let mut active_screen = use_signal(|| Screen::AgeContent);

    rsx! {
        div {
            class: "flex h-screen bg-[var(--bg-primary)] text-[var(--text-primary)]",

            // Sidebar
            div {
                class: "flex-none w-60 flex flex-col border-r border-[var(--border-subtle)] glass-md",

                div {
                    class: "px-5 py-6",
                    div { class: "text-lg font-bold", "🤖 ParentDash" }
                    div {
                        class: "text-xs text-[var(--text-tertiary)] mt-1",
                        "Companion robot controls"
                    }
                }

                nav {
                    class: "flex flex-col gap-1 px-3",

                    NavButton {
                        active: active_screen() == Screen::AgeContent,
                        onclick: move |_| active_screen.set(Screen::AgeContent),
                        icon: "🎚️",
                        label: "Age & Content",
                    }
                    NavButton {
                        active: active_screen() == Screen::Education,
                        onclick: move |_| active_screen.set(Screen::Education),
                        icon: "🎓",
                        label: "Learning Progress",
                    }
                    NavButton {
                        active: active_screen() == Screen::Mood,
                        onclick: move |_| active_screen.set(Screen::Mood),
                        icon: "📈",
                        label: "Mood Trends",
                    }
                    NavButton {
                        active: active_screen() == Screen::Privacy,
                        onclick: move |_| active_screen.set(Screen::Privacy),
                        icon: "🛡️",
                        label: "Privacy",
                    }
                }
            }

            // Content Area
            div {
                class: "flex-1 flex flex-col min-h-0 overflow-hidden",
                match active_screen() {
                    Screen::AgeContent => rsx! { AgeContentScreen {} },
                    Screen::Education => rsx! { EducationScreen {} },
                    Screen::Mood => rsx! { MoodScreen {} },
                    Screen::Privacy => rsx! { PrivacyScreen {} },
                }
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<MouseEvent>, icon: String, label: String) -> Element {
    let classes = if active {
        "text-[var(--text-primary)]"
    } else {
        "text-[var(--text-tertiary)] hover:text-[var(--text-secondary)]"
    };

    rsx! {
        button {
            class: "flex items-center gap-3 py-2.5 px-4 rounded-xl text-sm font-medium text-left transition-all {classes}",
            style: if active { "background: var(--accent-primary-10); border: 1px solid var(--border-subtle);" } else { "" },
            onclick: onclick,
            span { "{icon}" }
            span { "{label}" }
        }
    }
}
