//! Mood trends screen

#![allow(non_snake_case)]

use crate::analytics::mood::{
    average_mood, best_weekday, classify_score, generate_mood_data, mood_distribution, mood_trend,
    weekday_name, MoodDataPoint, MoodPeriod, Sentiment,
};
use crate::ui::components::{ScreenHeader, SectionCard, StatCard};
use dioxus::prelude::*;

// Chart geometry: fixed-viewBox SVG, emoji scale on the left
const CHART_WIDTH: f64 = 640.0;
const CHART_HEIGHT: f64 = 220.0;
const PLOT_LEFT: f64 = 50.0;
const PLOT_RIGHT: f64 = 630.0;
const PLOT_TOP: f64 = 10.0;
const PLOT_BOTTOM: f64 = 210.0;

fn chart_coords(data: &[MoodDataPoint]) -> Vec<(f64, f64, &'static str)> {
    if data.len() < 2 {
        return Vec::new();
    }

    data.iter()
        .enumerate()
        .map(|(i, point)| {
            let x = PLOT_LEFT + i as f64 / (data.len() - 1) as f64 * (PLOT_RIGHT - PLOT_LEFT);
            let y = PLOT_BOTTOM - point.mood_score / 5.0 * (PLOT_BOTTOM - PLOT_TOP);
            (x, y, classify_score(point.mood_score).accent())
        })
        .collect()
}

fn score_scale_emoji(score: u32) -> &'static str {
    match score {
        5 => "😄",
        4 => "🙂",
        3 => "😐",
        2 => "😕",
        1 => "😟",
        _ => "",
    }
}

pub fn MoodScreen() -> Element {
    let mut selected_period = use_signal(|| MoodPeriod::Week);
    let mut mood_data = use_signal(|| generate_mood_data(MoodPeriod::Week));

    let period = selected_period();
    let data = mood_data.read().clone();

    let average = average_mood(&data);
    let trend = mood_trend(&data);
    let best_day = best_weekday(&data).map(weekday_name).unwrap_or("N/A");
    let conversations = data.len();
    let distribution = mood_distribution(&data);

    let coords = chart_coords(&data);
    let polyline: String = coords
        .iter()
        .map(|(x, y, _)| format!("{x:.1},{y:.1}"))
        .collect::<Vec<_>>()
        .join(" ");
    let view_box = format!("0 0 {CHART_WIDTH} {CHART_HEIGHT}");

    rsx! {
        div {
            class: "flex flex-col h-full min-h-0",

            ScreenHeader {
                icon: "📈",
                title: "Mood Trends",
                subtitle: "Track your child's emotional patterns over time",
                div {}
            }

            div {
                class: "flex-1 overflow-y-auto p-6 scrollbar-thin",

                div {
                    class: "space-y-6 max-w-4xl mx-auto animate-fade-in-up pb-8",

                    // Period selector
                    div {
                        class: "flex gap-2",
                        for option in MoodPeriod::ALL {
                            button {
                                onclick: move |_| {
                                    selected_period.set(option);
                                    mood_data.set(generate_mood_data(option));
                                },
                                class: if period == option {
                                    "py-2 px-4 rounded-full text-sm font-medium text-white transition-all"
                                } else {
                                    "py-2 px-4 rounded-full text-sm font-medium text-[var(--text-secondary)] bg-white/[0.04] hover:bg-white/[0.08] transition-all"
                                },
                                style: if period == option { "background: var(--accent-primary);" } else { "" },
                                {option.label()}
                            }
                        }
                    }

                    // Summary cards
                    div {
                        class: "flex gap-4",
                        StatCard {
                            emoji: average.emoji(),
                            value: average.display_name(),
                            label: "Average Mood",
                            accent: average.accent(),
                        }
                        StatCard {
                            emoji: trend.emoji(),
                            value: trend.label(),
                            label: "Trend",
                            accent: trend.accent(),
                        }
                        StatCard {
                            emoji: "📅",
                            value: best_day,
                            label: "Best Day",
                            accent: "#5CB270",
                        }
                        StatCard {
                            emoji: "💬",
                            value: "{conversations}",
                            label: "Conversations",
                            accent: "#5C8FE8",
                        }
                    }

                    // Chart
                    SectionCard {
                        title: "Mood Over Time",

                        svg {
                            class: "w-full",
                            view_box: "{view_box}",

                            // Grid rows, one per score step
                            for step in 1..=5u32 {
                                line {
                                    x1: "{PLOT_LEFT}",
                                    y1: grid_y(step),
                                    x2: "{PLOT_RIGHT}",
                                    y2: grid_y(step),
                                    stroke: "rgba(242,237,231,0.12)",
                                    stroke_width: "1",
                                }
                                text {
                                    x: "18",
                                    y: grid_label_y(step),
                                    style: "font-size: 14px;",
                                    {score_scale_emoji(step)}
                                }
                            }

                            if !polyline.is_empty() {
                                polyline {
                                    points: "{polyline}",
                                    fill: "none",
                                    stroke: "var(--accent-primary)",
                                    stroke_width: "2",
                                }
                            }

                            for (x, y, color) in coords {
                                circle {
                                    cx: "{x:.1}",
                                    cy: "{y:.1}",
                                    r: "4",
                                    fill: "{color}",
                                }
                            }
                        }
                    }

                    // Distribution
                    SectionCard {
                        title: "Mood Distribution",

                        div {
                            class: "flex gap-4",
                            for sentiment in Sentiment::ALL {
                                DistributionBar {
                                    sentiment,
                                    fraction: distribution.get(&sentiment).copied().unwrap_or(0.0),
                                }
                            }
                        }
                    }

                    // Patterns
                    SectionCard {
                        title: "Patterns Detected",

                        div {
                            class: "space-y-3",
                            PatternRow {
                                icon: "🌅",
                                title: "Morning Moods",
                                description: "Your child tends to be happiest in the morning conversations.",
                            }
                            PatternRow {
                                icon: "📆",
                                title: "Weekend Effect",
                                description: "Mood is generally higher on weekends vs weekdays.",
                            }
                            PatternRow {
                                icon: "📚",
                                title: "Learning Impact",
                                description: "Positive mood often follows learning activities.",
                            }
                        }
                    }

                    // Recommendations
                    SectionCard {
                        title: "Recommendations",

                        div {
                            class: "space-y-3",
                            RecommendationRow {
                                icon: "💡",
                                text: "Schedule robot time during morning hours for best engagement.",
                            }
                            RecommendationRow {
                                icon: "❤️",
                                text: "Consider discussing any negative mood days with your child.",
                            }
                            RecommendationRow {
                                icon: "⭐",
                                text: "Celebrate positive days with praise and recognition!",
                            }
                        }
                    }
                }
            }
        }
    }
}

fn grid_y(step: u32) -> String {
    let y = PLOT_BOTTOM - step as f64 / 5.0 * (PLOT_BOTTOM - PLOT_TOP);
    format!("{y:.1}")
}

fn grid_label_y(step: u32) -> String {
    let y = PLOT_BOTTOM - step as f64 / 5.0 * (PLOT_BOTTOM - PLOT_TOP) + 5.0;
    format!("{y:.1}")
}

#[component]
fn DistributionBar(sentiment: Sentiment, fraction: f64) -> Element {
    let emoji = sentiment.emoji();
    let accent = sentiment.accent();
    let percent = (fraction * 100.0).round() as u32;

    rsx! {
        div {
            class: "flex-1 flex flex-col items-center gap-2",

            span { class: "text-xl", "{emoji}" }

            div {
                class: "w-full h-24 flex flex-col justify-end rounded overflow-hidden",
                style: "background: rgba(242,237,231,0.05);",
                div {
                    style: "height: {percent}%; background: {accent}; border-radius: 4px 4px 0 0;",
                }
            }

            span { class: "text-xs text-[var(--text-tertiary)]", "{percent}%" }
        }
    }
}

#[component]
fn PatternRow(icon: String, title: String, description: String) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-3 p-3 rounded-xl",
            style: "background: rgba(242,237,231,0.03);",

            span { class: "text-lg w-8 text-center", "{icon}" }
            div {
                div { class: "text-sm font-medium text-[var(--text-primary)]", "{title}" }
                div { class: "text-xs text-[var(--text-tertiary)] mt-0.5", "{description}" }
            }
        }
    }
}

#[component]
fn RecommendationRow(icon: String, text: String) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-3 p-3 rounded-xl",
            style: "background: var(--accent-primary-10);",

            span { "{icon}" }
            span { class: "text-sm text-[var(--text-secondary)]", "{text}" }
        }
    }
}
