//! Education statistics
//!
//! Mock learning-progress data behind the education screen, plus the small
//! formatting and classification helpers the screen renders with. Progress
//! data is regenerated on every screen mount and never persisted.

use chrono::{DateTime, Datelike, Duration, Local};
use rand::Rng;
use uuid::Uuid;

/// Per-subject rollup
#[derive(Debug, Clone, PartialEq)]
pub struct SubjectProgress {
    pub subject: String,
    pub icon: &'static str,
    pub accent: &'static str,
    pub lessons_completed: u32,
    pub total_lessons: u32,
    pub average_score: f64,
    pub last_activity: DateTime<Local>,
}

impl SubjectProgress {
    /// Completed fraction for the progress bar, 0.0 when no lessons exist
    pub fn completion_ratio(&self) -> f64 {
        if self.total_lessons == 0 {
            0.0
        } else {
            self.lessons_completed as f64 / self.total_lessons as f64
        }
    }
}

/// One completed learning session
#[derive(Debug, Clone, PartialEq)]
pub struct LearningActivity {
    pub id: Uuid,
    pub subject: String,
    pub title: String,
    /// Quiz-style activities have a score; free reading doesn't
    pub score: Option<u32>,
    pub date: DateTime<Local>,
    pub duration_secs: u64,
}

/// Everything the education screen shows
#[derive(Debug, Clone, PartialEq)]
pub struct EducationProgress {
    pub subjects: Vec<SubjectProgress>,
    pub recent_activities: Vec<LearningActivity>,
    pub streak_days: u32,
    pub total_lessons: u32,
    pub average_score: f64,
    /// Mon..Sun, true on days with at least one learning session
    pub weekday_activity: [bool; 7],
}

impl EducationProgress {
    pub fn activities_this_week(&self) -> usize {
        self.recent_activities
            .iter()
            .filter(|a| is_this_week(a.date))
            .count()
    }

    pub fn active_days_this_week(&self) -> usize {
        self.weekday_activity.iter().filter(|d| **d).count()
    }
}

/// Accent color for a score value: ≥ 90 green, ≥ 70 blue, ≥ 50 orange,
/// below that red
pub fn score_accent(score: u32) -> &'static str {
    if score >= 90 {
        "#5CB270"
    } else if score >= 70 {
        "#5C8FE8"
    } else if score >= 50 {
        "#E8955C"
    } else {
        "#D9534F"
    }
}

pub fn subject_accent(subject: &str) -> &'static str {
    match subject {
        "Math" => "#5C8FE8",
        "Reading" => "#5CB270",
        "Science" => "#9D4EDD",
        "Language" => "#E8955C",
        _ => "#9A938B",
    }
}

/// Whole minutes, the way session lengths read on activity rows
pub fn format_duration(secs: u64) -> String {
    format!("{} min", secs / 60)
}

/// Compact "how long ago" label for activity rows
pub fn format_relative(date: DateTime<Local>) -> String {
    let elapsed = Local::now().signed_duration_since(date);

    if elapsed.num_minutes() < 1 {
        "just now".to_string()
    } else if elapsed.num_hours() < 1 {
        format!("{} min ago", elapsed.num_minutes())
    } else if elapsed.num_days() < 1 {
        format!("{} h ago", elapsed.num_hours())
    } else {
        format!("{} d ago", elapsed.num_days())
    }
}

pub fn is_this_week(date: DateTime<Local>) -> bool {
    let now = Local::now();
    date.iso_week() == now.iso_week()
}

/// Build the sample progress set shown until real robot telemetry exists
pub fn sample_progress() -> EducationProgress {
    let now = Local::now();
    let mut rng = rand::thread_rng();

    let subjects = vec![
        SubjectProgress {
            subject: "Math".to_string(),
            icon: "🔢",
            accent: subject_accent("Math"),
            lessons_completed: 12,
            total_lessons: 20,
            average_score: 85.0,
            last_activity: now - Duration::days(1),
        },
        SubjectProgress {
            subject: "Reading".to_string(),
            icon: "📖",
            accent: subject_accent("Reading"),
            lessons_completed: 8,
            total_lessons: 15,
            average_score: 92.0,
            last_activity: now - Duration::hours(1),
        },
        SubjectProgress {
            subject: "Science".to_string(),
            icon: "⚗️",
            accent: subject_accent("Science"),
            lessons_completed: 5,
            total_lessons: 12,
            average_score: 88.0,
            last_activity: now - Duration::days(2),
        },
        SubjectProgress {
            subject: "Language".to_string(),
            icon: "🌍",
            accent: subject_accent("Language"),
            lessons_completed: 15,
            total_lessons: 25,
            average_score: 78.0,
            last_activity: now - Duration::days(3),
        },
    ];

    let recent_activities = vec![
        LearningActivity {
            id: Uuid::new_v4(),
            subject: "Math".to_string(),
            title: "Addition Practice".to_string(),
            score: Some(90),
            date: now - Duration::hours(1),
            duration_secs: 600,
        },
        LearningActivity {
            id: Uuid::new_v4(),
            subject: "Reading".to_string(),
            title: "The Little Prince".to_string(),
            score: None,
            date: now - Duration::hours(2),
            duration_secs: 1200,
        },
        LearningActivity {
            id: Uuid::new_v4(),
            subject: "Science".to_string(),
            title: "Solar System Quiz".to_string(),
            score: Some(85),
            date: now - Duration::days(1),
            duration_secs: 900,
        },
        LearningActivity {
            id: Uuid::new_v4(),
            subject: "Language".to_string(),
            title: "Spanish Colors".to_string(),
            score: Some(100),
            date: now - Duration::days(2),
            duration_secs: 480,
        },
    ];

    let mut weekday_activity = [false; 7];
    for day in weekday_activity.iter_mut() {
        *day = rng.gen_bool(0.7);
    }

    EducationProgress {
        subjects,
        recent_activities,
        streak_days: 5,
        total_lessons: 40,
        average_score: 86.0,
        weekday_activity,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_ratio() {
        let mut subject = SubjectProgress {
            subject: "Math".to_string(),
            icon: "🔢",
            accent: subject_accent("Math"),
            lessons_completed: 12,
            total_lessons: 20,
            average_score: 85.0,
            last_activity: Local::now(),
        };
        assert!((subject.completion_ratio() - 0.6).abs() < 1e-9);

        subject.total_lessons = 0;
        assert_eq!(subject.completion_ratio(), 0.0);
    }

    #[test]
    fn test_score_accent_thresholds() {
        assert_eq!(score_accent(100), "#5CB270");
        assert_eq!(score_accent(90), "#5CB270");
        assert_eq!(score_accent(89), "#5C8FE8");
        assert_eq!(score_accent(70), "#5C8FE8");
        assert_eq!(score_accent(69), "#E8955C");
        assert_eq!(score_accent(50), "#E8955C");
        assert_eq!(score_accent(49), "#D9534F");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(600), "10 min");
        assert_eq!(format_duration(59), "0 min");
        assert_eq!(format_duration(1200), "20 min");
    }

    #[test]
    fn test_format_relative() {
        let now = Local::now();
        assert_eq!(format_relative(now), "just now");
        assert_eq!(format_relative(now - Duration::minutes(5)), "5 min ago");
        assert_eq!(format_relative(now - Duration::hours(3)), "3 h ago");
        assert_eq!(format_relative(now - Duration::days(2)), "2 d ago");
    }

    #[test]
    fn test_is_this_week() {
        let now = Local::now();
        assert!(is_this_week(now));
        assert!(!is_this_week(now - Duration::days(14)));
    }

    #[test]
    fn test_sample_progress_shape() {
        let progress = sample_progress();

        assert_eq!(progress.subjects.len(), 4);
        assert_eq!(progress.recent_activities.len(), 4);
        assert_eq!(progress.streak_days, 5);
        assert_eq!(progress.total_lessons, 40);
        assert_eq!(progress.average_score, 86.0);
        assert!(progress
            .subjects
            .iter()
            .all(|s| s.lessons_completed <= s.total_lessons));
    }

    #[test]
    fn test_active_days_counts_weekday_flags() {
        let mut progress = sample_progress();
        progress.weekday_activity = [true, false, true, false, true, false, false];
        assert_eq!(progress.active_days_this_week(), 3);
    }
}
