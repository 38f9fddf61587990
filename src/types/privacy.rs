//! Privacy settings
//!
//! The persisted record controlling what conversation data is collected,
//! how long it is retained, and which keywords trigger safety flags.

use serde::{Deserialize, Serialize};

/// Retention presets offered by the privacy screen
pub const RETENTION_PRESETS: [u32; 4] = [30, 90, 180, 365];

/// How much activity data the robot logs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoggingLevel {
    HighPrivacy,
    Balanced,
    FullTransparency,
    Institutional,
}

impl LoggingLevel {
    pub const ALL: [LoggingLevel; 4] = [
        LoggingLevel::HighPrivacy,
        LoggingLevel::Balanced,
        LoggingLevel::FullTransparency,
        LoggingLevel::Institutional,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            LoggingLevel::HighPrivacy => "High Privacy",
            LoggingLevel::Balanced => "Balanced",
            LoggingLevel::FullTransparency => "Full Transparency",
            LoggingLevel::Institutional => "Institutional",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            LoggingLevel::HighPrivacy => {
                "Logs only timestamps and session duration. Best for older children with \
                 earned trust."
            }
            LoggingLevel::Balanced => {
                "Logs timestamps, topics, and flagged content. Recommended for most families."
            }
            LoggingLevel::FullTransparency => {
                "Logs complete conversation transcripts. Best for young children or special \
                 needs."
            }
            LoggingLevel::Institutional => {
                "Full logs plus AI safety scoring. Required for schools and therapeutic \
                 settings."
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            LoggingLevel::HighPrivacy => "🔒",
            LoggingLevel::Balanced => "⚖️",
            LoggingLevel::FullTransparency => "👁️",
            LoggingLevel::Institutional => "🏛️",
        }
    }

    pub fn accent(&self) -> &'static str {
        match self {
            LoggingLevel::HighPrivacy => "#5CB270",
            LoggingLevel::Balanced => "#5C8FE8",
            LoggingLevel::FullTransparency => "#E8955C",
            LoggingLevel::Institutional => "#9D4EDD",
        }
    }

    pub fn logs_full_transcripts(&self) -> bool {
        matches!(
            self,
            LoggingLevel::FullTransparency | LoggingLevel::Institutional
        )
    }

    pub fn logs_topic_summaries(&self) -> bool {
        *self != LoggingLevel::HighPrivacy
    }

    pub fn performs_sentiment_analysis(&self) -> bool {
        *self != LoggingLevel::HighPrivacy
    }

    pub fn performs_safety_scoring(&self) -> bool {
        *self == LoggingLevel::Institutional
    }
}

/// Privacy settings, saved whole-record to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrivacySettings {
    /// Monitoring level
    pub logging_level: LoggingLevel,
    /// Store full conversation text for parent review
    pub save_conversation_transcripts: bool,
    /// Analyze the emotional tone of conversations
    pub enable_sentiment_analysis: bool,
    /// Identify topics the child discusses
    pub enable_topic_extraction: bool,
    /// Flag concerning content for parent review
    pub enable_safety_flags: bool,
    /// Days before conversation history is purged (one of RETENTION_PRESETS)
    pub data_retention_days: u32,
    /// Share anonymous usage data
    #[serde(default)]
    pub allow_anonymous_analytics: bool,
    /// Parent-supplied words that trigger safety flags; stored trimmed and
    /// lower-cased, no duplicates
    #[serde(default)]
    pub custom_blocked_keywords: Vec<String>,
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            logging_level: LoggingLevel::Balanced,
            save_conversation_transcripts: true,
            enable_sentiment_analysis: true,
            enable_topic_extraction: true,
            enable_safety_flags: true,
            data_retention_days: 90,
            allow_anonymous_analytics: false,
            custom_blocked_keywords: Vec::new(),
        }
    }
}

impl PrivacySettings {
    /// Validate settings values
    ///
    /// Snaps the retention window to the nearest preset and re-normalizes the
    /// keyword list, so hand-edited files can't smuggle in invalid state.
    pub fn validate(&mut self) {
        if !RETENTION_PRESETS.contains(&self.data_retention_days) {
            self.data_retention_days = *RETENTION_PRESETS
                .iter()
                .min_by_key(|&&days| (days as i64 - self.data_retention_days as i64).abs())
                .unwrap_or(&90);
        }

        let raw = std::mem::take(&mut self.custom_blocked_keywords);
        for keyword in raw {
            self.add_keyword(&keyword);
        }
    }

    /// Add a blocked keyword.
    ///
    /// The keyword is trimmed and lower-cased. Returns false (and leaves the
    /// list untouched) when the normalized keyword is empty or already present.
    pub fn add_keyword(&mut self, keyword: &str) -> bool {
        let normalized = keyword.trim().to_lowercase();
        if normalized.is_empty() || self.custom_blocked_keywords.contains(&normalized) {
            return false;
        }
        self.custom_blocked_keywords.push(normalized);
        true
    }

    /// Remove a blocked keyword (no-op if absent)
    pub fn remove_keyword(&mut self, keyword: &str) {
        self.custom_blocked_keywords.retain(|k| k != keyword);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = PrivacySettings::default();
        assert_eq!(settings.logging_level, LoggingLevel::Balanced);
        assert!(settings.save_conversation_transcripts);
        assert!(settings.enable_safety_flags);
        assert_eq!(settings.data_retention_days, 90);
        assert!(!settings.allow_anonymous_analytics);
        assert!(settings.custom_blocked_keywords.is_empty());
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = PrivacySettings::default();
        settings.logging_level = LoggingLevel::Institutional;
        settings.data_retention_days = 365;
        settings.add_keyword("scary movie");

        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: PrivacySettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_add_keyword_normalizes() {
        let mut settings = PrivacySettings::default();
        assert!(settings.add_keyword("  Scary Movie  "));
        assert_eq!(settings.custom_blocked_keywords, vec!["scary movie"]);
    }

    #[test]
    fn test_add_duplicate_keyword_is_noop() {
        let mut settings = PrivacySettings::default();
        assert!(settings.add_keyword("monster"));
        assert!(!settings.add_keyword("MONSTER"));
        assert!(!settings.add_keyword(" monster "));
        assert_eq!(settings.custom_blocked_keywords.len(), 1);
    }

    #[test]
    fn test_add_blank_keyword_rejected() {
        let mut settings = PrivacySettings::default();
        assert!(!settings.add_keyword("   "));
        assert!(settings.custom_blocked_keywords.is_empty());
    }

    #[test]
    fn test_remove_keyword() {
        let mut settings = PrivacySettings::default();
        settings.add_keyword("monster");
        settings.remove_keyword("monster");
        assert!(settings.custom_blocked_keywords.is_empty());
    }

    #[test]
    fn test_validate_snaps_retention_to_preset() {
        let mut settings = PrivacySettings::default();

        settings.data_retention_days = 100;
        settings.validate();
        assert_eq!(settings.data_retention_days, 90);

        settings.data_retention_days = 400;
        settings.validate();
        assert_eq!(settings.data_retention_days, 365);

        settings.data_retention_days = 0;
        settings.validate();
        assert_eq!(settings.data_retention_days, 30);
    }

    #[test]
    fn test_validate_renormalizes_keywords() {
        let mut settings = PrivacySettings::default();
        settings.custom_blocked_keywords =
            vec!["  Ghost ".to_string(), "ghost".to_string(), "".to_string()];
        settings.validate();
        assert_eq!(settings.custom_blocked_keywords, vec!["ghost"]);
    }

    #[test]
    fn test_logging_level_predicates() {
        assert!(!LoggingLevel::HighPrivacy.logs_topic_summaries());
        assert!(LoggingLevel::Balanced.logs_topic_summaries());
        assert!(!LoggingLevel::Balanced.logs_full_transcripts());
        assert!(LoggingLevel::FullTransparency.logs_full_transcripts());
        assert!(LoggingLevel::Institutional.performs_safety_scoring());
        assert!(!LoggingLevel::FullTransparency.performs_safety_scoring());
    }
}
