use serde::{
    Deserialize,
    Serialize,
};

/// A single vocabulary entry as the word service stores it. Only the server
/// mutates these; the practice session shuffles them around by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub word: String,
    #[serde(default)]
    pub transcription: String,
    #[serde(default)]
    pub part_of_speech: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub learned: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub email: String,
    pub username: String,
    #[serde(default)]
    pub plan: String,
    #[serde(default)]
    pub native_language: Option<String>,
    #[serde(default)]
    pub learning_language: Option<String>,
    #[serde(default)]
    pub see_translate: bool,
    // A profile without a daily goal disables the practice screen.
    #[serde(default)]
    pub day_words: u32,
}

/// Partial profile update for PUT /users/settings.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub native_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub learning_language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub see_translate: Option<bool>,
}

/// Today's progress plus the replay sequence used to resume a session at the
/// frontier instead of re-showing words already seen today.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    #[serde(default)]
    pub learned_words: u32,
    #[serde(default)]
    pub word_sequence: Vec<VocabularyItem>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    #[serde(default)]
    pub total_learned_words: u32,
    #[serde(default)]
    pub max_streak: u32,
    #[serde(default)]
    pub missed_days: u32,
    #[serde(default)]
    pub goal_achievement_rate: f32,
    #[serde(default)]
    pub average_learned_words_per_day: f32,
    #[serde(default)]
    pub total_trainings: u32,
    #[serde(default)]
    pub day_words: u32,
    #[serde(default)]
    pub learned_words_today: u32,
    #[serde(default)]
    pub learned_words_this_week: u32,
    #[serde(default)]
    pub learned_words_this_month: u32,
    #[serde(default)]
    pub learned_words_this_year: u32,
}

#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordCounts {
    #[serde(default)]
    pub total_words: u32,
}

/// Result of recording one word against today's count. The stats service
/// rejects duplicates with a 400, which counts as success here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressOutcome {
    Counted,
    AlreadyCounted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordFilter {
    All,
    Learned,
    Unmastered,
}

impl WordFilter {
    pub fn query(&self) -> &'static str {
        match self {
            WordFilter::All => "all",
            WordFilter::Learned => "learned",
            WordFilter::Unmastered => "unmastered",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WordFilter::All => "All words",
            WordFilter::Learned => "Learned",
            WordFilter::Unmastered => "Still learning",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vocabulary_item_uses_wire_names() {
        let json = r#"{
            "_id": "66b2f0",
            "word": "Haus",
            "transcription": "haʊs",
            "partOfSpeech": "Noun",
            "translation": "house"
        }"#;

        let item: VocabularyItem = serde_json::from_str(json).expect("valid item");
        assert_eq!(item.id, "66b2f0");
        assert_eq!(item.part_of_speech, "Noun");
        assert!(!item.learned);
    }

    #[test]
    fn profile_defaults_missing_goal_to_zero() {
        let json = r#"{"email": "a@b.c", "username": "anna"}"#;
        let profile: UserProfile = serde_json::from_str(json).expect("valid profile");
        assert_eq!(profile.day_words, 0);
        assert!(!profile.see_translate);
    }

    #[test]
    fn daily_stats_tolerate_empty_sequence() {
        let stats: DailyStats = serde_json::from_str(r#"{"learnedWords": 4}"#).expect("valid");
        assert_eq!(stats.learned_words, 4);
        assert!(stats.word_sequence.is_empty());
    }

    #[test]
    fn profile_update_skips_unset_fields() {
        let update = ProfileUpdate { see_translate: Some(true), ..Default::default() };
        let json = serde_json::to_string(&update).expect("serializes");
        assert_eq!(json, r#"{"seeTranslate":true}"#);
    }
}
