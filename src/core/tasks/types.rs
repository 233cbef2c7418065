use crate::core::models::{
    DailyStats,
    ProgressOutcome,
    StatsSummary,
    UserProfile,
    VocabularyItem,
    WordCounts,
};

/// Completed background work, polled by the GUI once per frame. Errors are
/// stringified at the task boundary so results stay cheap to clone.
#[derive(Debug, Clone)]
pub enum TaskResult {
    Profile(Result<UserProfile, String>),
    DailyStats(Result<DailyStats, String>),
    UnmasteredWords(Result<Vec<VocabularyItem>, String>),
    DailyGoalChecked(Result<bool, String>),

    WordStatusSaved { word_id: String, result: Result<(), String> },
    ProgressRecorded { word_id: String, result: Result<ProgressOutcome, String> },
    DailyGoalSaved(Result<u32, String>),

    VocabularyLoaded(Result<Vec<VocabularyItem>, String>),
    WordToggled { word_id: String, result: Result<VocabularyItem, String> },
    WordDeleted { word_id: String, result: Result<(), String> },

    SummaryLoaded(Result<(StatsSummary, WordCounts), String>),
    ProfileSaved(Result<UserProfile, String>),
    ConnectionChecked(Result<(), String>),
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::Profile(_) => "profile",
            TaskResult::DailyStats(_) => "daily_stats",
            TaskResult::UnmasteredWords(_) => "unmastered_words",
            TaskResult::DailyGoalChecked(_) => "daily_goal_checked",
            TaskResult::WordStatusSaved { .. } => "word_status_saved",
            TaskResult::ProgressRecorded { .. } => "progress_recorded",
            TaskResult::DailyGoalSaved(_) => "daily_goal_saved",
            TaskResult::VocabularyLoaded(_) => "vocabulary_loaded",
            TaskResult::WordToggled { .. } => "word_toggled",
            TaskResult::WordDeleted { .. } => "word_deleted",
            TaskResult::SummaryLoaded(_) => "summary_loaded",
            TaskResult::ProfileSaved(_) => "profile_saved",
            TaskResult::ConnectionChecked(_) => "connection_checked",
        }
    }
}
