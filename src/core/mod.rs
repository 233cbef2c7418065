pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::TangoError;
pub use models::{
    DailyStats,
    ProgressOutcome,
    StatsSummary,
    UserProfile,
    VocabularyItem,
    WordCounts,
    WordFilter,
};
