//! Learning progress screen

#![allow(non_snake_case)]

use crate::analytics::education::{
    format_duration, format_relative, sample_progress, score_accent, subject_accent,
    LearningActivity, SubjectProgress,
};
use crate::ui::components::{ScreenHeader, SectionCard, StatCard};
use dioxus::prelude::*;

pub fn EducationScreen() -> Element {
    let progress = use_signal(sample_progress);

    let data = progress.read().clone();
    let total_lessons = data.total_lessons;
    let average_score = format!("{}%", data.average_score.round() as u32);
    let subject_count = data.subjects.len();
    let this_week = data.activities_this_week();
    let streak = format!("{} Day Streak!", data.streak_days);
    let active_days = format!(
        "{} of 7 days with learning!",
        data.active_days_this_week()
    );
    let weekday_activity = data.weekday_activity;
    let subjects = data.subjects.clone();
    let recent: Vec<LearningActivity> = data.recent_activities.iter().take(5).cloned().collect();

    rsx! {
        div {
            class: "flex flex-col h-full min-h-0",

            ScreenHeader {
                icon: "🎓",
                title: "Learning Progress",
                subtitle: "Track your child's educational journey with the robot",
                div {}
            }

            div {
                class: "flex-1 overflow-y-auto p-6 scrollbar-thin",

                div {
                    class: "space-y-6 max-w-4xl mx-auto animate-fade-in-up pb-8",

                    // Overview
                    div {
                        class: "flex gap-4",
                        StatCard {
                            emoji: "📘",
                            value: "{total_lessons}",
                            label: "Total Lessons",
                            accent: "#5C8FE8",
                        }
                        StatCard {
                            emoji: "⭐",
                            value: average_score,
                            label: "Average Score",
                            accent: "#D9B23D",
                        }
                        StatCard {
                            emoji: "🗂️",
                            value: "{subject_count}",
                            label: "Subjects",
                            accent: "#9D4EDD",
                        }
                        StatCard {
                            emoji: "📆",
                            value: "{this_week}",
                            label: "This Week",
                            accent: "#5CB270",
                        }
                    }

                    // Streak + weekly activity
                    div {
                        class: "flex gap-4",

                        div {
                            class: "flex-1 flex flex-col items-center gap-2 p-6 rounded-2xl",
                            style: "background: linear-gradient(135deg, rgba(232,149,92,0.2), rgba(217,83,79,0.2));",

                            span { class: "text-5xl", "🔥" }
                            span { class: "text-base font-semibold text-[var(--text-primary)]", "{streak}" }
                            span { class: "text-xs text-[var(--text-tertiary)]", "Keep learning every day!" }
                        }

                        div {
                            class: "flex-1 p-6 rounded-2xl glass-md",

                            div { class: "text-sm font-medium text-[var(--text-primary)] mb-3", "This Week" }

                            div {
                                class: "flex gap-2 mb-3",
                                for active in weekday_activity {
                                    div {
                                        class: "w-6 h-6 rounded-full flex items-center justify-center text-[10px] text-white",
                                        style: if active { "background: #5CB270;" } else { "background: rgba(242,237,231,0.1);" },
                                        if active { "✓" }
                                    }
                                }
                            }

                            div { class: "text-xs text-[var(--text-tertiary)]", "{active_days}" }
                        }
                    }

                    // Subjects
                    SectionCard {
                        title: "Subject Progress",

                        div {
                            class: "grid grid-cols-2 gap-3",
                            for subject in subjects {
                                SubjectCard { subject }
                            }
                        }
                    }

                    // Recent activity
                    SectionCard {
                        title: "Recent Learning Activities",

                        div {
                            class: "space-y-1",
                            for activity in recent {
                                ActivityRow { activity }
                            }
                        }
                    }

                    // Recommendations
                    SectionCard {
                        title: "Recommended Next Steps",

                        div {
                            class: "space-y-3",
                            NextStepCard {
                                icon: "💡",
                                accent: "#D9B23D",
                                title: "Try Science!",
                                description: "Based on interest in space, try a science lesson about planets.",
                            }
                            NextStepCard {
                                icon: "⭐",
                                accent: "#9D4EDD",
                                title: "Math Challenge",
                                description: "Ready for the next level! Try harder math problems.",
                            }
                            NextStepCard {
                                icon: "📖",
                                accent: "#5C8FE8",
                                title: "Reading Time",
                                description: "A new story about dinosaurs is available!",
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn SubjectCard(subject: SubjectProgress) -> Element {
    let accent = subject.accent;
    let icon = subject.icon;
    let name = subject.subject.clone();
    let score = format!("{}%", subject.average_score.round() as u32);
    let lessons = format!("{}/{} lessons", subject.lessons_completed, subject.total_lessons);
    let completion = (subject.completion_ratio() * 100.0).round() as u32;
    let last_seen = format_relative(subject.last_activity);

    rsx! {
        div {
            class: "p-4 rounded-xl",
            style: "background: color-mix(in srgb, {accent} 5%, transparent);",

            div {
                class: "flex items-center gap-2 mb-3",
                span { class: "text-lg", "{icon}" }
                span { class: "text-sm font-semibold text-[var(--text-primary)]", "{name}" }
                span {
                    class: "ml-auto text-sm font-medium",
                    style: "color: {accent};",
                    "{score}"
                }
            }

            div {
                class: "h-2 rounded-full overflow-hidden mb-3",
                style: "background: rgba(242,237,231,0.1);",
                div {
                    style: "width: {completion}%; height: 100%; background: {accent}; border-radius: 4px;",
                }
            }

            div {
                class: "flex justify-between text-xs text-[var(--text-tertiary)]",
                span { "{lessons}" }
                span { "{last_seen}" }
            }
        }
    }
}

#[component]
fn ActivityRow(activity: LearningActivity) -> Element {
    let accent = subject_accent(&activity.subject);
    let title = activity.title.clone();
    let subject = activity.subject.clone();
    let duration = format_duration(activity.duration_secs);
    let when = format_relative(activity.date);
    let score_badge = activity.score.map(|score| {
        let color = score_accent(score);
        rsx! {
            span {
                class: "text-sm font-medium",
                style: "color: {color};",
                "{score}%"
            }
        }
    });

    rsx! {
        div {
            class: "flex items-center gap-3 py-2.5",

            div {
                class: "w-10 h-10 rounded-full flex items-center justify-center",
                style: "background: color-mix(in srgb, {accent} 20%, transparent);",
                "📘"
            }

            div {
                class: "flex-1 min-w-0",
                div { class: "text-sm font-medium text-[var(--text-primary)]", "{title}" }
                div {
                    class: "text-xs text-[var(--text-tertiary)] mt-0.5",
                    "{subject} • {duration}"
                }
            }

            {score_badge}

            span { class: "text-xs text-[var(--text-tertiary)]", "{when}" }
        }
    }
}

#[component]
fn NextStepCard(icon: String, accent: String, title: String, description: String) -> Element {
    rsx! {
        div {
            class: "flex items-center gap-3 p-4 rounded-xl",
            style: "background: color-mix(in srgb, {accent} 10%, transparent);",

            span { class: "text-lg w-8 text-center", "{icon}" }

            div {
                class: "flex-1",
                div { class: "text-sm font-medium text-[var(--text-primary)]", "{title}" }
                div { class: "text-xs text-[var(--text-tertiary)] mt-0.5", "{description}" }
            }

            button {
                onclick: move |_| tracing::debug!("Next-step suggestion clicked"),
                class: "py-1.5 px-3 rounded-lg text-xs font-medium text-white transition-all",
                style: "background: {accent};",
                "Start"
            }
        }
    }
}
