//! Age & content settings screen

#![allow(non_snake_case)]

use crate::app::AppState;
use crate::storage::settings::save_age_content_settings;
use crate::types::{AgeContentLevel, ConversationSpeed, TopicCategory, VocabularyLevel};
use crate::ui::components::{SaveBanner, ScreenHeader, SectionCard};
use dioxus::prelude::*;

pub fn AgeContentScreen() -> Element {
    let app_state = use_context::<AppState>();
    let mut draft = use_signal(|| app_state.age_settings.read().clone());
    let mut show_saved = use_signal(|| false);

    let settings = draft.read().clone();
    let preview = settings.content_level.preview_response();
    let auto_detect = settings.auto_detect_age;

    let save = move |_| {
        let mut app_state = app_state;
        let settings = draft.read().clone();
        if let Err(error) = save_age_content_settings(&settings) {
            tracing::error!("Failed to save age/content settings: {}", error);
        }
        app_state.age_settings.set(settings);

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
                icon: "🎚️",
                title: "Age-Appropriate Content",
                subtitle: "Customize content complexity for your child's age",

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

                    // Content level
                    SectionCard {
                        title: "Content Level",
                        subtitle: "Pick the tier that matches your child, or let the robot follow the profile",

                        div {
                            class: "flex items-center justify-between mb-4",
                            span {
                                class: "text-xs text-[var(--text-tertiary)]",
                                "Auto-detect from profile"
                            }
                            button {
                                onclick: move |_| draft.write().auto_detect_age = !auto_detect,
                                class: if auto_detect { "toggle-switch active" } else { "toggle-switch" },
                                div { class: "toggle-switch-knob" }
                            }
                        }

                        div {
                            class: "space-y-3",
                            for level in AgeContentLevel::ALL {
                                ContentLevelCard {
                                    level,
                                    selected: settings.content_level == level,
                                    onselect: move |_| draft.write().content_level = level,
                                }
                            }
                        }
                    }

                    // Vocabulary
                    SectionCard {
                        title: "Vocabulary Complexity",

                        div {
                            class: "grid grid-cols-3 gap-3",
                            for level in VocabularyLevel::ALL {
                                button {
                                    onclick: move |_| draft.write().vocabulary_level = level,
                                    class: option_button_class(settings.vocabulary_level == level),
                                    div { class: "text-sm font-medium", {level.display_name()} }
                                }
                            }
                        }
                    }

                    // Topics
                    SectionCard {
                        title: "Allowed Topics",
                        subtitle: "Select which topics the robot can discuss with your child",

                        div {
                            class: "grid grid-cols-3 gap-3",
                            for topic in TopicCategory::ALL {
                                TopicToggleCard {
                                    topic,
                                    enabled: settings.topic_allowed(topic),
                                    ontoggle: move |_| draft.write().toggle_topic(topic),
                                }
                            }
                        }
                    }

                    // Speed
                    SectionCard {
                        title: "Response Speed",
                        subtitle: "How quickly the robot speaks (for attention span)",

                        div {
                            class: "grid grid-cols-3 gap-3",
                            for speed in ConversationSpeed::ALL {
                                button {
                                    onclick: move |_| draft.write().conversation_speed = speed,
                                    class: option_button_class(settings.conversation_speed == speed),
                                    div { class: "text-lg", {speed.icon()} }
                                    div { class: "text-sm font-medium mt-1", {speed.display_name()} }
                                }
                            }
                        }
                    }

                    // Preview
                    SectionCard {
                        title: "Example Response Preview",
                        subtitle: "Here's how the robot would explain \"Why is the sky blue?\" at your selected level",

                        div {
                            class: "text-sm text-[var(--text-secondary)] p-4 rounded-xl",
                            style: "background: var(--accent-primary-10);",
                            "{preview}"
                        }
                    }
                }
            }

            SaveBanner { visible: show_saved(), message: "Age settings saved" }
        }
    }
}

fn option_button_class(selected: bool) -> &'static str {
    if selected {
        "py-3 px-4 rounded-xl border transition-all text-center border-[var(--accent-primary)] bg-[var(--accent-primary-10)] text-[var(--accent-primary)]"
    } else {
        "py-3 px-4 rounded-xl border transition-all text-center border-[var(--border-subtle)] bg-white/[0.02] text-[var(--text-secondary)] hover:border-[var(--border-medium)]"
    }
}

#[component]
fn ContentLevelCard(
    level: AgeContentLevel,
    selected: bool,
    onselect: EventHandler<MouseEvent>,
) -> Element {
    let accent = level.accent();
    let icon = level.icon();
    let name = level.display_name();
    let description = level.description();
    let features = level.features();
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

            div {
                class: "hidden lg:flex flex-col items-end gap-0.5",
                for feature in features.iter().take(2) {
                    span { class: "text-[11px] text-[var(--text-tertiary)]", "• {feature}" }
                }
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
fn TopicToggleCard(topic: TopicCategory, enabled: bool, ontoggle: EventHandler<MouseEvent>) -> Element {
    let card_class = if enabled {
        "flex flex-col items-center gap-2 p-4 rounded-xl transition-all text-white"
    } else {
        "flex flex-col items-center gap-2 p-4 rounded-xl transition-all text-[var(--text-secondary)]"
    };
    let card_style = if enabled {
        "background: var(--accent-primary);"
    } else {
        "background: rgba(242,237,231,0.04);"
    };
    let icon = topic.icon();
    let name = topic.display_name();

    rsx! {
        button {
            onclick: ontoggle,
            class: "{card_class}",
            style: "{card_style}",

            span { class: "text-xl", "{icon}" }
            span { class: "text-xs font-medium", "{name}" }
        }
    }
}
