pub mod session;

#[cfg(test)]
mod session_tests;

pub use session::{
    MarkEffects,
    PracticeSession,
    PracticeStatus,
    ReviewStatus,
    SessionGoal,
};
