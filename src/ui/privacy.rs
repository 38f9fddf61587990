//! Privacy settings screen

#![allow(non_snake_case)]

use crate::app::AppState;
use crate::storage::settings::save_privacy_settings;
use crate::types::{LoggingLevel, RETENTION_PRESETS};
use crate::ui::components::{SaveBanner, ScreenHeader, SectionCard, ToggleRow};
use dioxus::prelude::*;

pub fn PrivacyScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut draft = use_signal(|| app_state.privacy_settings.read().clone());
    let mut new_keyword = use_signal(String::new);
    let mut show_saved = use_signal(|| false);

    let settings = draft.read().clone();
    let retention_days = settings.data_retention_days;
    let retention_note = format!(
        "Data older than {retention_days} days will be automatically deleted"
    );
    let keywords = settings.custom_blocked_keywords.clone();
    let can_add = !new_keyword.read().trim().is_empty();

    let mut add_keyword = move || {
        let keyword = new_keyword.read().clone();
        if draft.write().add_keyword(&keyword) {
            new_keyword.set(String::new());
        }
    };

    let save = move |_| {
        let mut app_state = app_state;
        let settings = draft.read().clone();
        if let Err(error) = save_privacy_settings(&settings) {
            tracing::error!("Failed to save privacy settings: {}", error);
        }
        app_state.privacy_settings.set(settings);

        show_saved.set(true);
        spawn(async move {
            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
            show_saved.set(false);
        });
    };

    rsx! {
        div {
            class: "flex flex-col h-full min-h-0",

            ScreenHeader {
                icon: "🛡️",
                title: "Privacy Settings",
                subtitle: "Control what data is collected and how long it's stored",

                button {
                    onclick: save,
                    class: "btn-save",
                    "✓ Save"
                }
            }

            div {
                class: "flex-1 overflow-y-auto p-6 scrollbar-thin",

                div {
                    class: "space-y-6 max-w-4xl mx-auto animate-fade-in-up pb-8",

                    // Monitoring level
                    SectionCard {
                        title: "Monitoring Level",
                        subtitle: "Choose how much data the robot collects about your child's activity",

                        div {
                            class: "space-y-3",
                            for level in LoggingLevel::ALL {
                                LoggingLevelCard {
                                    level,
                                    selected: settings.logging_level == level,
                                    onselect: move |_| draft.write().logging_level = level,
                                }
                            }
                        }
                    }

                    // Data collection toggles
                    SectionCard {
                        title: "Data Collection",

                        div {
                            class: "space-y-1",

                            ToggleRow {
                                icon: "💬",
                                title: "Save Conversation Transcripts",
                                description: "Store full conversation text for review",
                                value: settings.save_conversation_transcripts,
                                onchange: move |value| draft.write().save_conversation_transcripts = value,
                            }
                            ToggleRow {
                                icon: "🙂",
                                title: "Sentiment Analysis",
                                description: "Analyze emotional tone of conversations",
                                value: settings.enable_sentiment_analysis,
                                onchange: move |value| draft.write().enable_sentiment_analysis = value,
                            }
                            ToggleRow {
                                icon: "🏷️",
                                title: "Topic Extraction",
                                description: "Identify topics your child discusses",
                                value: settings.enable_topic_extraction,
                                onchange: move |value| draft.write().enable_topic_extraction = value,
                            }
                            ToggleRow {
                                icon: "⚠️",
                                title: "Safety Flags",
                                description: "Flag concerning content for review",
                                value: settings.enable_safety_flags,
                                onchange: move |value| draft.write().enable_safety_flags = value,
                            }
                            ToggleRow {
                                icon: "📊",
                                title: "Anonymous Analytics",
                                description: "Help improve the robot with anonymous usage data",
                                value: settings.allow_anonymous_analytics,
                                onchange: move |value| draft.write().allow_anonymous_analytics = value,
                            }
                        }
                    }

                    // Retention
                    SectionCard {
                        title: "Data Retention",
                        subtitle: "How long to keep conversation history and logs",

                        div {
                            class: "grid grid-cols-4 gap-3",
                            for days in RETENTION_PRESETS {
                                button {
                                    onclick: move |_| draft.write().data_retention_days = days,
                                    class: retention_button_class(retention_days == days),
                                    div { class: "text-lg font-bold", "{days}" }
                                    div { class: "text-xs", "days" }
                                }
                            }
                        }

                        p {
                            class: "text-xs text-[var(--text-tertiary)] mt-3",
                            "{retention_note}"
                        }
                    }

                    // Blocked keywords
                    SectionCard {
                        title: "Custom Blocked Keywords",
                        subtitle: "Add words or phrases that should trigger safety flags",

                        div {
                            class: "flex items-center gap-2",

                            input {
                                r#type: "text",
                                placeholder: "Add keyword...",
                                value: "{new_keyword}",
                                oninput: move |evt| new_keyword.set(evt.value()),
                                onkeydown: move |evt: KeyboardEvent| {
                                    if evt.key() == Key::Enter {
                                        evt.prevent_default();
                                        add_keyword();
                                    }
                                },
                                class: "flex-1 p-3 rounded-lg bg-white/[0.05] border border-[var(--border-subtle)] text-[var(--text-primary)] focus:border-[var(--accent-primary)] transition-all outline-none",
                            }

                            button {
                                onclick: move |_| add_keyword(),
                                disabled: !can_add,
                                class: if can_add {
                                    "w-10 h-10 rounded-full flex items-center justify-center text-white transition-all"
                                } else {
                                    "w-10 h-10 rounded-full flex items-center justify-center text-white transition-all opacity-30 cursor-not-allowed"
                                },
                                style: "background: var(--accent-primary);",
                                "+"
                            }
                        }

                        if keywords.is_empty() {
                            p {
                                class: "text-xs text-[var(--text-tertiary)] mt-4",
                                "No custom keywords added"
                            }
                        } else {
                            div {
                                class: "flex flex-wrap gap-2 mt-4",
                                for keyword in keywords {
                                    KeywordTag {
                                        keyword,
                                        onremove: move |removed: String| draft.write().remove_keyword(&removed),
                                    }
                                }
                            }
                        }
                    }

                    // Data management
                    SectionCard {
                        title: "Data Management",

                        div {
                            class: "grid grid-cols-2 gap-3",

                            button {
                                onclick: move |_| {
                                    // TODO: wire to the conversation exporter once robot telemetry lands
                                    tracing::info!("Export requested");
                                },
                                class: "flex flex-col items-center gap-1 p-4 rounded-xl text-white transition-all",
                                style: "background: #5C8FE8;",
                                span { class: "text-lg", "📤" }
                                span { class: "text-xs font-semibold", "Export Data" }
                            }

                            button {
                                onclick: move |_| {
                                    tracing::info!("Delete-all requested");
                                },
                                class: "flex flex-col items-center gap-1 p-4 rounded-xl text-white transition-all",
                                style: "background: #D9534F;",
                                span { class: "text-lg", "🗑️" }
                                span { class: "text-xs font-semibold", "Delete All Data" }
                            }
                        }

                        p {
                            class: "text-xs mt-3",
                            style: "color: rgba(217,83,79,0.85);",
                            "Deleting data is permanent and cannot be undone"
                        }
                    }
                }
            }

            SaveBanner { visible: show_saved(), message: "Privacy settings saved" }
        }
    }
}

fn retention_button_class(selected: bool) -> &'static str {
    if selected {
        "py-3 px-4 rounded-xl border transition-all text-center border-[var(--accent-primary)] bg-[var(--accent-primary)] text-white"
    } else {
        "py-3 px-4 rounded-xl border transition-all text-center border-[var(--border-subtle)] bg-white/[0.02] text-[var(--text-secondary)] hover:border-[var(--border-medium)]"
    }
}

#[component]
fn LoggingLevelCard(
    level: LoggingLevel,
    selected: bool,
    onselect: EventHandler<MouseEvent>,
) -> Element {
    let accent = level.accent();
    let icon = level.icon();
    let name = level.display_name();
    let description = level.description();
    let card_style = if selected {
        format!("background: color-mix(in srgb, {accent} 10%, transparent); border: 2px solid {accent};")
    } else {
        "background: rgba(242,237,231,0.02); border: 2px solid transparent;".to_string()
    };
    let marker = if selected { "●" } else { "○" };

    rsx! {
        button {
            onclick: onselect,
            class: "w-full flex items-center gap-4 p-4 rounded-xl transition-all text-left",
            style: "{card_style}",

            span { class: "text-2xl w-10 text-center", "{icon}" }

            div {
                class: "flex-1 min-w-0",
                div { class: "text-sm font-semibold text-[var(--text-primary)]", "{name}" }
                div { class: "text-xs text-[var(--text-tertiary)] mt-0.5", "{description}" }
            }

            span {
                class: "text-lg",
                style: "color: {accent};",
                "{marker}"
            }
        }
    }
}

#[component]
fn KeywordTag(keyword: String, onremove: EventHandler<String>) -> Element {
    let removed = keyword.clone();

    rsx! {
        div {
            class: "flex items-center gap-1.5 px-3 py-1.5 rounded-full text-xs",
            style: "background: rgba(217,83,79,0.12); color: #D9534F;",

            span { "{keyword}" }
            button {
                onclick: move |_| onremove.call(removed.clone()),
                class: "opacity-70 hover:opacity-100 transition-all",
                "✕"
            }
        }
    }
}
