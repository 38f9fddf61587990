//! Mood statistics
//!
//! Pure helpers behind the mood-trends screen: classification of numeric
//! mood scores into sentiment buckets, trend detection over a series of
//! data points, weekday bucketing, and sample-data generation.

use chrono::{DateTime, Datelike, Duration, Local, Weekday};
use rand::Rng;
use std::collections::HashMap;

/// Categorical sentiment label for a conversation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sentiment {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    Concerning,
}

impl Sentiment {
    pub const ALL: [Sentiment; 5] = [
        Sentiment::VeryPositive,
        Sentiment::Positive,
        Sentiment::Neutral,
        Sentiment::Negative,
        Sentiment::Concerning,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "Very Positive",
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
            Sentiment::Concerning => "Concerning",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "😄",
            Sentiment::Positive => "🙂",
            Sentiment::Neutral => "😐",
            Sentiment::Negative => "😕",
            Sentiment::Concerning => "😟",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            Sentiment::VeryPositive => "#5CB270",
            Sentiment::Positive => "#5C8FE8",
            Sentiment::Neutral => "#9A938B",
            Sentiment::Negative => "#E8955C",
            Sentiment::Concerning => "#D9534F",
        }
    }
}

/// One scored conversation session
#[derive(Debug, Clone, PartialEq)]
pub struct MoodDataPoint {
    pub date: DateTime<Local>,
    /// Mood score in 1.0–5.0
    pub mood_score: f64,
    pub sentiment: Sentiment,
}

/// Window the mood screen aggregates over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodPeriod {
    Week,
    TwoWeeks,
    Month,
}

impl MoodPeriod {
    pub const ALL: [MoodPeriod; 3] = [MoodPeriod::Week, MoodPeriod::TwoWeeks, MoodPeriod::Month];

    pub fn days(&self) -> u32 {
        match self {
            MoodPeriod::Week => 7,
            MoodPeriod::TwoWeeks => 14,
            MoodPeriod::Month => 30,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MoodPeriod::Week => "7 Days",
            MoodPeriod::TwoWeeks => "14 Days",
            MoodPeriod::Month => "30 Days",
        }
    }
}

/// Direction of the mood series
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoodTrend {
    Improving,
    Declining,
    Stable,
    NotEnoughData,
}

impl MoodTrend {
    pub fn label(&self) -> &'static str {
        match self {
            MoodTrend::Improving => "Improving",
            MoodTrend::Declining => "Declining",
            MoodTrend::Stable => "Stable",
            MoodTrend::NotEnoughData => "Not enough data",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            MoodTrend::Improving => "📈",
            MoodTrend::Declining => "📉",
            MoodTrend::Stable | MoodTrend::NotEnoughData => "➡️",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            MoodTrend::Improving => "#5CB270",
            MoodTrend::Declining => "#E8955C",
            MoodTrend::Stable => "#5C8FE8",
            MoodTrend::NotEnoughData => "#9A938B",
        }
    }
}

/// Classify a numeric score into a sentiment bucket.
///
/// Thresholds: ≥ 4.5 very positive, ≥ 3.5 positive, ≥ 2.5 neutral, below
/// that negative. `Concerning` is only ever assigned by upstream analysis,
/// never by score classification.
pub fn classify_score(score: f64) -> Sentiment {
    if score >= 4.5 {
        Sentiment::VeryPositive
    } else if score >= 3.5 {
        Sentiment::Positive
    } else if score >= 2.5 {
        Sentiment::Neutral
    } else {
        Sentiment::Negative
    }
}

/// Mean score over the series; 0.0 for an empty series
pub fn average_score(points: &[MoodDataPoint]) -> f64 {
    let sum: f64 = points.iter().map(|p| p.mood_score).sum();
    sum / points.len().max(1) as f64
}

/// Bucket the series' mean score
pub fn average_mood(points: &[MoodDataPoint]) -> Sentiment {
    classify_score(average_score(points))
}

/// Compare the recent half of the series against the older half.
///
/// Both halves are `len / 2` points, so the middle point of an odd-length
/// series belongs to neither.
pub fn mood_trend(points: &[MoodDataPoint]) -> MoodTrend {
    if points.len() < 2 {
        return MoodTrend::NotEnoughData;
    }

    let half = points.len() / 2;
    let older: f64 = points[..half].iter().map(|p| p.mood_score).sum::<f64>() / half as f64;
    let recent: f64 = points[points.len() - half..]
        .iter()
        .map(|p| p.mood_score)
        .sum::<f64>()
        / half as f64;

    let diff = recent - older;
    if diff > 0.3 {
        MoodTrend::Improving
    } else if diff < -0.3 {
        MoodTrend::Declining
    } else {
        MoodTrend::Stable
    }
}

/// Fraction of points per sentiment; empty map for an empty series
pub fn mood_distribution(points: &[MoodDataPoint]) -> HashMap<Sentiment, f64> {
    let mut counts: HashMap<Sentiment, usize> = HashMap::new();
    for point in points {
        *counts.entry(point.sentiment).or_default() += 1;
    }

    counts
        .into_iter()
        .map(|(sentiment, count)| (sentiment, count as f64 / points.len() as f64))
        .collect()
}

/// Weekday with the highest average score, if any points exist
pub fn best_weekday(points: &[MoodDataPoint]) -> Option<Weekday> {
    let mut buckets: HashMap<Weekday, Vec<f64>> = HashMap::new();
    for point in points {
        buckets
            .entry(point.date.weekday())
            .or_default()
            .push(point.mood_score);
    }

    buckets
        .into_iter()
        .map(|(day, scores)| {
            let avg = scores.iter().sum::<f64>() / scores.len() as f64;
            (day, avg)
        })
        .max_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(day, _)| day)
}

pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

// Sample data never carries Concerning; that bucket only fills from real
// safety analysis.
const SAMPLE_SENTIMENTS: [Sentiment; 4] = [
    Sentiment::VeryPositive,
    Sentiment::Positive,
    Sentiment::Neutral,
    Sentiment::Negative,
];

/// Generate sample mood data for the given period, sorted by date.
///
/// Each of the last N days gets 1–4 sessions with scores in 2.5–5.0.
pub fn generate_mood_data(period: MoodPeriod) -> Vec<MoodDataPoint> {
    let mut rng = rand::thread_rng();
    let now = Local::now();
    let mut data = Vec::new();

    for day in 0..period.days() {
        let date = now - Duration::days(day as i64);
        let sessions = rng.gen_range(1..=4);

        for _ in 0..sessions {
            data.push(MoodDataPoint {
                date,
                mood_score: rng.gen_range(2.5..=5.0),
                sentiment: SAMPLE_SENTIMENTS[rng.gen_range(0..SAMPLE_SENTIMENTS.len())],
            });
        }
    }

    data.sort_by_key(|p| p.date);
    data
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn point(score: f64) -> MoodDataPoint {
        MoodDataPoint {
            date: Local::now(),
            mood_score: score,
            sentiment: classify_score(score),
        }
    }

    fn point_on(year: i32, month: u32, day: u32, score: f64) -> MoodDataPoint {
        MoodDataPoint {
            date: Local.with_ymd_and_hms(year, month, day, 10, 0, 0).unwrap(),
            mood_score: score,
            sentiment: classify_score(score),
        }
    }

    #[test]
    fn test_classify_score_boundaries() {
        assert_eq!(classify_score(5.0), Sentiment::VeryPositive);
        assert_eq!(classify_score(4.5), Sentiment::VeryPositive);
        assert_eq!(classify_score(4.0), Sentiment::Positive);
        assert_eq!(classify_score(3.5), Sentiment::Positive);
        assert_eq!(classify_score(3.0), Sentiment::Neutral);
        assert_eq!(classify_score(2.5), Sentiment::Neutral);
        assert_eq!(classify_score(2.0), Sentiment::Negative);
        assert_eq!(classify_score(1.0), Sentiment::Negative);
    }

    #[test]
    fn test_average_mood_empty_is_negative() {
        assert_eq!(average_mood(&[]), Sentiment::Negative);
    }

    #[test]
    fn test_average_mood_at_boundary() {
        let points = vec![point(4.0), point(5.0)];
        // mean 4.5 lands in the top bucket
        assert_eq!(average_mood(&points), Sentiment::VeryPositive);
    }

    #[test]
    fn test_trend_not_enough_data() {
        assert_eq!(mood_trend(&[]), MoodTrend::NotEnoughData);
        assert_eq!(mood_trend(&[point(3.0)]), MoodTrend::NotEnoughData);
    }

    #[test]
    fn test_trend_improving() {
        let points = vec![point(2.5), point(2.5), point(3.5), point(3.5)];
        assert_eq!(mood_trend(&points), MoodTrend::Improving);
    }

    #[test]
    fn test_trend_declining() {
        let points = vec![point(4.0), point(4.0), point(3.0), point(3.0)];
        assert_eq!(mood_trend(&points), MoodTrend::Declining);
    }

    #[test]
    fn test_trend_stable_below_threshold() {
        let points = vec![point(3.0), point(3.0), point(3.25), point(3.25)];
        assert_eq!(mood_trend(&points), MoodTrend::Stable);
    }

    #[test]
    fn test_trend_ignores_middle_of_odd_series() {
        // halves are len/2 each; the middle dip must not count
        let points = vec![point(4.0), point(1.0), point(4.0)];
        assert_eq!(mood_trend(&points), MoodTrend::Stable);
    }

    #[test]
    fn test_distribution_fractions_sum_to_one() {
        let points = vec![point(5.0), point(5.0), point(4.0), point(2.0)];
        let dist = mood_distribution(&points);

        assert_eq!(dist[&Sentiment::VeryPositive], 0.5);
        assert_eq!(dist[&Sentiment::Positive], 0.25);
        assert_eq!(dist[&Sentiment::Negative], 0.25);
        assert!(!dist.contains_key(&Sentiment::Neutral));

        let total: f64 = dist.values().sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_empty() {
        assert!(mood_distribution(&[]).is_empty());
    }

    #[test]
    fn test_best_weekday_picks_max_average() {
        // 2026-08-03 is a Monday, 2026-08-04 a Tuesday
        let points = vec![
            point_on(2026, 8, 3, 3.0),
            point_on(2026, 8, 3, 3.0),
            point_on(2026, 8, 4, 5.0),
            point_on(2026, 8, 4, 4.0),
        ];
        assert_eq!(best_weekday(&points), Some(Weekday::Tue));
    }

    #[test]
    fn test_best_weekday_empty() {
        assert_eq!(best_weekday(&[]), None);
    }

    #[test]
    fn test_generate_mood_data_shape() {
        let data = generate_mood_data(MoodPeriod::Week);

        assert!(data.len() >= 7);
        assert!(data.len() <= 7 * 4);
        assert!(data.iter().all(|p| (2.5..=5.0).contains(&p.mood_score)));
        assert!(data.iter().all(|p| p.sentiment != Sentiment::Concerning));
        assert!(data.windows(2).all(|w| w[0].date <= w[1].date));
    }
}
