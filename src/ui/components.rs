//! Shared dashboard widgets
//!
//! Cards, toggles, and the save-confirmation banner used across screens.

#![allow(non_snake_case)]

use dioxus::prelude::*;

/// Screen title bar with icon, subtitle, and a slot for action buttons
#[component]
pub fn ScreenHeader(icon: String, title: String, subtitle: String, children: Element) -> Element {
    rsx! {
        div {
            class: "flex-none px-6 py-5 border-b border-[var(--border-subtle)] glass-md",

            div {
                class: "flex items-center justify-between max-w-4xl mx-auto w-full",

                div {
                    div {
                        class: "flex items-center gap-3",
                        span { class: "text-2xl", "{icon}" }
                        h1 {
                            class: "text-2xl font-bold text-[var(--accent-primary)]",
                            "{title}"
                        }
                    }
                    p {
                        class: "text-sm text-[var(--text-tertiary)] mt-1",
                        "{subtitle}"
                    }
                }

                div { class: "flex items-center gap-2", {children} }
            }
        }
    }
}

/// Rounded section container with a heading and optional caption
#[component]
pub fn SectionCard(title: String, subtitle: Option<String>, children: Element) -> Element {
    let caption = subtitle.map(|text| {
        rsx! {
            p {
                class: "text-xs text-[var(--text-tertiary)] mt-1",
                "{text}"
            }
        }
    });

    rsx! {
        div {
            class: "p-5 rounded-2xl glass-md",

            h3 {
                class: "text-base font-semibold text-[var(--text-primary)]",
                "{title}"
            }
            {caption}

            div { class: "mt-4", {children} }
        }
    }
}

/// Compact emoji + value + label tile for overview rows
#[component]
pub fn StatCard(emoji: String, value: String, label: String, accent: String) -> Element {
    rsx! {
        div {
            class: "flex-1 flex flex-col items-center gap-1 p-4 rounded-xl",
            style: "background: color-mix(in srgb, {accent} 10%, transparent);",

            span { class: "text-2xl", "{emoji}" }
            span { class: "text-base font-semibold text-[var(--text-primary)]", "{value}" }
            span { class: "text-xs text-[var(--text-tertiary)]", "{label}" }
        }
    }
}

/// Labeled toggle-switch row
#[component]
pub fn ToggleRow(
    icon: String,
    title: String,
    description: String,
    value: bool,
    onchange: EventHandler<bool>,
) -> Element {
    rsx! {
        div {
            class: "flex items-center justify-between py-2",

            div {
                class: "flex items-center gap-3",
                span { class: "text-lg w-7 text-center", "{icon}" }
                div {
                    div { class: "text-sm font-medium text-[var(--text-primary)]", "{title}" }
                    div { class: "text-xs text-[var(--text-tertiary)] mt-0.5", "{description}" }
                }
            }

            button {
                onclick: move |_| onchange.call(!value),
                class: if value { "toggle-switch active" } else { "toggle-switch" },
                div { class: "toggle-switch-knob" }
            }
        }
    }
}

/// Transient "saved" confirmation shown after an explicit save
#[component]
pub fn SaveBanner(visible: bool, message: String) -> Element {
    if !visible {
        return rsx! { div {} };
    }

    rsx! {
        div {
            class: "fixed top-6 left-1/2 -translate-x-1/2 z-50 animate-fade-in-up",

            div {
                class: "flex items-center gap-2 px-4 py-2.5 rounded-xl text-white shadow-lg",
                style: "background: rgba(92,178,112,0.92);",
                span { "✓" }
                span { class: "text-sm font-medium", "{message}" }
            }
        }
    }
}
