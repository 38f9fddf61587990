//! Age and content settings
//!
//! The persisted record controlling how the robot tailors conversation
//! complexity to the child's age.

use serde::{Deserialize, Serialize};

/// Content complexity tier, keyed to an age band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeContentLevel {
    Toddler,
    Preschool,
    EarlyElementary,
    LateElementary,
    Preteen,
}

impl AgeContentLevel {
    pub const ALL: [AgeContentLevel; 5] = [
        AgeContentLevel::Toddler,
        AgeContentLevel::Preschool,
        AgeContentLevel::EarlyElementary,
        AgeContentLevel::LateElementary,
        AgeContentLevel::Preteen,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            AgeContentLevel::Toddler => "Toddler (2-4)",
            AgeContentLevel::Preschool => "Preschool (4-6)",
            AgeContentLevel::EarlyElementary => "Early Elementary (6-8)",
            AgeContentLevel::LateElementary => "Late Elementary (8-10)",
            AgeContentLevel::Preteen => "Pre-Teen (10-12)",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AgeContentLevel::Toddler => {
                "Simple language, basic concepts, nursery rhymes, colors, shapes, animals"
            }
            AgeContentLevel::Preschool => {
                "Expanded vocabulary, simple stories, basic counting, letters, simple science"
            }
            AgeContentLevel::EarlyElementary => {
                "Chapter books level, basic math, beginning science, geography basics"
            }
            AgeContentLevel::LateElementary => {
                "Complex topics, history, deeper science, more nuanced conversations"
            }
            AgeContentLevel::Preteen => {
                "Advanced topics, current events (filtered), complex problem-solving"
            }
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AgeContentLevel::Toddler => "🧸",
            AgeContentLevel::Preschool => "🎨",
            AgeContentLevel::EarlyElementary => "📗",
            AgeContentLevel::LateElementary => "🎓",
            AgeContentLevel::Preteen => "🧑",
        }
    }

    /// Accent color used by the selection cards
    pub fn accent(&self) -> &'static str {
        match self {
            AgeContentLevel::Toddler => "#E879A6",
            AgeContentLevel::Preschool => "#E8955C",
            AgeContentLevel::EarlyElementary => "#D9B23D",
            AgeContentLevel::LateElementary => "#5CB270",
            AgeContentLevel::Preteen => "#5C8FE8",
        }
    }

    pub fn features(&self) -> [&'static str; 4] {
        match self {
            AgeContentLevel::Toddler => [
                "Simple words",
                "Lots of repetition",
                "Animated responses",
                "No complex topics",
            ],
            AgeContentLevel::Preschool => [
                "Simple sentences",
                "Basic stories",
                "ABC & counting",
                "Gentle corrections",
            ],
            AgeContentLevel::EarlyElementary => [
                "Full sentences",
                "Chapter-book level",
                "Basic facts",
                "Educational games",
            ],
            AgeContentLevel::LateElementary => [
                "Complex explanations",
                "Research questions",
                "Math help",
                "Science topics",
            ],
            AgeContentLevel::Preteen => [
                "Nuanced discussions",
                "Critical thinking",
                "Current events",
                "Advanced learning",
            ],
        }
    }

    /// Example answer to "Why is the sky blue?" at this level, shown as a
    /// live preview on the settings screen.
    pub fn preview_response(&self) -> &'static str {
        match self {
            AgeContentLevel::Toddler => {
                "The sky is blue like your blue crayon! It's so pretty! 💙 Blue blue sky!"
            }
            AgeContentLevel::Preschool => {
                "The sky looks blue because of the sun's light! The sun sends light and it \
                 bounces around making the sky look blue. Isn't that cool?"
            }
            AgeContentLevel::EarlyElementary => {
                "The sky is blue because sunlight has all the colors in it, like a rainbow! \
                 When sunlight hits the air, the blue color bounces around more than other \
                 colors, so that's what we see!"
            }
            AgeContentLevel::LateElementary => {
                "The sky appears blue because of how light interacts with our atmosphere. \
                 Sunlight contains all colors, but blue light has a shorter wavelength and \
                 scatters more when it hits gas molecules in the air. This is called Rayleigh \
                 scattering!"
            }
            AgeContentLevel::Preteen => {
                "The blue color of the sky is due to Rayleigh scattering. When sunlight enters \
                 Earth's atmosphere, shorter wavelengths (blue/violet) scatter more than longer \
                 wavelengths (red/orange). Our eyes are more sensitive to blue, so that's the \
                 color we perceive. Fun fact: sunsets are red because light travels through \
                 more atmosphere at that angle!"
            }
        }
    }
}

/// Vocabulary complexity independent of the content level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VocabularyLevel {
    Simple,
    AgeAppropriate,
    Advanced,
}

impl VocabularyLevel {
    pub const ALL: [VocabularyLevel; 3] = [
        VocabularyLevel::Simple,
        VocabularyLevel::AgeAppropriate,
        VocabularyLevel::Advanced,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            VocabularyLevel::Simple => "Simple",
            VocabularyLevel::AgeAppropriate => "Age-Appropriate",
            VocabularyLevel::Advanced => "Advanced",
        }
    }
}

/// Topics the robot is allowed to discuss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TopicCategory {
    Animals,
    Science,
    Space,
    History,
    Art,
    Music,
    Sports,
    Nature,
    Technology,
}

impl TopicCategory {
    pub const ALL: [TopicCategory; 9] = [
        TopicCategory::Animals,
        TopicCategory::Science,
        TopicCategory::Space,
        TopicCategory::History,
        TopicCategory::Art,
        TopicCategory::Music,
        TopicCategory::Sports,
        TopicCategory::Nature,
        TopicCategory::Technology,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            TopicCategory::Animals => "Animals",
            TopicCategory::Science => "Science",
            TopicCategory::Space => "Space",
            TopicCategory::History => "History",
            TopicCategory::Art => "Art",
            TopicCategory::Music => "Music",
            TopicCategory::Sports => "Sports",
            TopicCategory::Nature => "Nature",
            TopicCategory::Technology => "Technology",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TopicCategory::Animals => "🐾",
            TopicCategory::Science => "⚗️",
            TopicCategory::Space => "🌙",
            TopicCategory::History => "🏛️",
            TopicCategory::Art => "🎨",
            TopicCategory::Music => "🎵",
            TopicCategory::Sports => "🏃",
            TopicCategory::Nature => "🍃",
            TopicCategory::Technology => "💻",
        }
    }
}

/// How quickly the robot speaks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversationSpeed {
    Slow,
    Normal,
    Fast,
}

impl ConversationSpeed {
    pub const ALL: [ConversationSpeed; 3] = [
        ConversationSpeed::Slow,
        ConversationSpeed::Normal,
        ConversationSpeed::Fast,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            ConversationSpeed::Slow => "Slow",
            ConversationSpeed::Normal => "Normal",
            ConversationSpeed::Fast => "Fast",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ConversationSpeed::Slow => "🐢",
            ConversationSpeed::Normal => "🚶",
            ConversationSpeed::Fast => "🐇",
        }
    }
}

/// Age-appropriate content settings, saved whole-record to disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeContentSettings {
    /// Selected content complexity tier
    pub content_level: AgeContentLevel,
    /// Derive the content level from the child profile instead of the manual pick
    #[serde(default = "default_auto_detect")]
    pub auto_detect_age: bool,
    /// Vocabulary complexity
    pub vocabulary_level: VocabularyLevel,
    /// Topics the robot may bring up (subset of the fixed category set)
    #[serde(default = "all_topics")]
    pub topics_allowed: Vec<TopicCategory>,
    /// Speech pacing
    pub conversation_speed: ConversationSpeed,
}

fn default_auto_detect() -> bool {
    true
}

fn all_topics() -> Vec<TopicCategory> {
    TopicCategory::ALL.to_vec()
}

impl Default for AgeContentSettings {
    fn default() -> Self {
        Self {
            content_level: AgeContentLevel::EarlyElementary,
            auto_detect_age: true,
            vocabulary_level: VocabularyLevel::AgeAppropriate,
            topics_allowed: all_topics(),
            conversation_speed: ConversationSpeed::Normal,
        }
    }
}

impl AgeContentSettings {
    /// Validate settings values
    ///
    /// Enum fields are guaranteed valid by construction; the topic list may
    /// carry duplicates from a hand-edited file and is de-duplicated here.
    pub fn validate(&mut self) {
        let mut seen = Vec::with_capacity(self.topics_allowed.len());
        self.topics_allowed.retain(|t| {
            if seen.contains(t) {
                false
            } else {
                seen.push(*t);
                true
            }
        });
    }

    pub fn topic_allowed(&self, topic: TopicCategory) -> bool {
        self.topics_allowed.contains(&topic)
    }

    /// Flip a topic in or out of the allowed set
    pub fn toggle_topic(&mut self, topic: TopicCategory) {
        if let Some(pos) = self.topics_allowed.iter().position(|t| *t == topic) {
            self.topics_allowed.remove(pos);
        } else {
            self.topics_allowed.push(topic);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AgeContentSettings::default();
        assert_eq!(settings.content_level, AgeContentLevel::EarlyElementary);
        assert!(settings.auto_detect_age);
        assert_eq!(settings.vocabulary_level, VocabularyLevel::AgeAppropriate);
        assert_eq!(settings.topics_allowed.len(), 9);
        assert_eq!(settings.conversation_speed, ConversationSpeed::Normal);
    }

    #[test]
    fn test_settings_round_trip() {
        let mut settings = AgeContentSettings::default();
        settings.content_level = AgeContentLevel::Preteen;
        settings.toggle_topic(TopicCategory::Sports);

        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: AgeContentSettings = serde_json::from_str(&json).unwrap();

        assert_eq!(settings, deserialized);
    }

    #[test]
    fn test_enum_wire_format() {
        let json = serde_json::to_string(&AgeContentLevel::EarlyElementary).unwrap();
        assert_eq!(json, "\"early_elementary\"");

        let level: AgeContentLevel = serde_json::from_str("\"preteen\"").unwrap();
        assert_eq!(level, AgeContentLevel::Preteen);
    }

    #[test]
    fn test_toggle_topic() {
        let mut settings = AgeContentSettings::default();
        assert!(settings.topic_allowed(TopicCategory::Music));

        settings.toggle_topic(TopicCategory::Music);
        assert!(!settings.topic_allowed(TopicCategory::Music));

        settings.toggle_topic(TopicCategory::Music);
        assert!(settings.topic_allowed(TopicCategory::Music));
    }

    #[test]
    fn test_validate_dedups_topics() {
        let mut settings = AgeContentSettings::default();
        settings.topics_allowed.push(TopicCategory::Animals);
        settings.validate();
        assert_eq!(
            settings
                .topics_allowed
                .iter()
                .filter(|t| **t == TopicCategory::Animals)
                .count(),
            1
        );
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        // A record written before topics/auto-detect existed still loads
        let json = r#"{
            "content_level": "toddler",
            "vocabulary_level": "simple",
            "conversation_speed": "slow"
        }"#;
        let settings: AgeContentSettings = serde_json::from_str(json).unwrap();
        assert!(settings.auto_detect_age);
        assert_eq!(settings.topics_allowed.len(), 9);
    }
}
