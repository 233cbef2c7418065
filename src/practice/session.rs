use std::collections::VecDeque;

use crate::core::models::{
    ProgressOutcome,
    VocabularyItem,
};

/// Daily target and the running count against it.
///
/// `learned_today` only moves when the stats service confirms an increment;
/// `pending` counts confirmations still in flight, so the two never race on
/// one field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionGoal {
    pub target: u32,
    pub learned_today: u32,
    pub goal_reached: bool,
    pub pending: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Learned,
    Learning,
}

/// Remote calls a `mark()` asks the caller to issue. The session itself
/// never touches the network.
#[derive(Debug, Clone)]
pub struct MarkEffects {
    pub item: VocabularyItem,
    pub status: ReviewStatus,
    pub record_progress: bool,
}

/// What the practice screen should present, derived on every read so the
/// three exhaustion conditions cannot drift out of sync with the state
/// they summarize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeStatus {
    GoalReached,
    NoWordsAvailable,
    SessionFinished,
    Reviewing,
}

/// One sitting's working set: the words already shown (`history`), the words
/// still ahead (`queue`), and a cursor over the boundary between them.
///
/// The same id may sit in `history` and in `queue` at once: a word marked
/// "still learning" stays in history and recycles to the back of the queue.
/// Within `history` an id appears at most once.
#[derive(Debug, Default)]
pub struct PracticeSession {
    history: Vec<VocabularyItem>,
    queue: VecDeque<VocabularyItem>,
    position: usize,
    pub goal: SessionGoal,
}

impl PracticeSession {
    pub fn new(target: u32) -> Self {
        Self { goal: SessionGoal { target, ..Default::default() }, ..Default::default() }
    }

    /// The word under the cursor: a history entry while rewound, the queue
    /// front at the frontier, or nothing once both are exhausted.
    pub fn current(&self) -> Option<&VocabularyItem> {
        if self.position < self.history.len() {
            return self.history.get(self.position);
        }
        if self.position == self.history.len() {
            return self.queue.front();
        }
        None
    }

    /// Step the cursor back into history ("Repeat"). Purely local: any
    /// learned/learning status already committed remotely stays committed.
    pub fn rewind(&mut self) {
        self.position = self.position.saturating_sub(1);
    }

    /// Apply one review. The local transition is immediate; the returned
    /// effects tell the caller which remote calls to issue afterwards.
    ///
    /// Known: the word leaves the queue wherever it sits and a progress
    /// confirmation is requested. Unknown: the word recycles to the back of
    /// the queue to reappear after the rest of the current set. Either way
    /// the cursor advances and the word ends up in history exactly once.
    pub fn mark(&mut self, known: bool) -> Option<MarkEffects> {
        let item = self.current()?.clone();

        self.queue.retain(|w| w.id != item.id);
        if !known {
            self.queue.push_back(item.clone());
        }
        self.ensure_in_history(&item);
        // A recycled frontier word is already in history; clamping keeps the
        // cursor on the frontier instead of walking past it.
        self.position = (self.position + 1).min(self.history.len());

        if known {
            self.goal.pending += 1;
        }

        Some(MarkEffects {
            item,
            status: if known { ReviewStatus::Learned } else { ReviewStatus::Learning },
            record_progress: known,
        })
    }

    /// Reconcile one confirmed progress call. Duplicates ("already counted")
    /// resolve the pending slot without moving the count.
    pub fn apply_progress(&mut self, outcome: ProgressOutcome) {
        self.goal.pending = self.goal.pending.saturating_sub(1);

        if outcome == ProgressOutcome::Counted {
            self.goal.learned_today += 1;
            if self.goal.target > 0 && self.goal.learned_today >= self.goal.target {
                self.goal.goal_reached = true;
            }
        }
    }

    /// A progress call that never made it. The count stays where it is; the
    /// matching status update is reconciled separately and is not rolled back.
    pub fn progress_failed(&mut self) {
        self.goal.pending = self.goal.pending.saturating_sub(1);
    }

    /// Optimistic goal change: recomputed locally before the server ever
    /// hears about it, so lowering the target below today's count flips
    /// `goal_reached` with no round trip. A target of zero disables practice
    /// and never counts as reached.
    pub fn set_goal(&mut self, target: u32) {
        self.goal.target = target;
        self.goal.goal_reached = target > 0 && self.goal.learned_today >= target;
    }

    /// The stats service's verdict wins over the local recompute on the
    /// initial load.
    pub fn set_goal_reached_remote(&mut self, reached: bool) {
        self.goal.goal_reached = reached;
    }

    /// Resume today's session: replay sequence becomes history and the
    /// cursor starts at the frontier, so words already seen today are not
    /// re-shown automatically.
    pub fn seed_history(&mut self, learned_today: u32, sequence: Vec<VocabularyItem>) {
        self.goal.learned_today = learned_today;
        if self.goal.target > 0 && learned_today >= self.goal.target {
            self.goal.goal_reached = true;
        }

        if !sequence.is_empty() {
            self.history.clear();
            for item in sequence {
                self.ensure_in_history(&item);
            }
            self.position = self.history.len();
        }
    }

    /// Additive top-up. Ids already waiting in the queue are skipped so a
    /// repeated fetch cannot enqueue the same word twice.
    pub fn extend_queue(&mut self, items: Vec<VocabularyItem>) {
        for item in items {
            if !self.queue.iter().any(|w| w.id == item.id) {
                self.queue.push_back(item);
            }
        }
    }

    pub fn status(&self) -> PracticeStatus {
        if self.goal.goal_reached {
            PracticeStatus::GoalReached
        } else if self.queue.is_empty() {
            if self.goal.learned_today == 0 {
                PracticeStatus::NoWordsAvailable
            } else {
                PracticeStatus::SessionFinished
            }
        } else {
            PracticeStatus::Reviewing
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn history(&self) -> &[VocabularyItem] {
        &self.history
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    fn ensure_in_history(&mut self, item: &VocabularyItem) {
        if !self.history.iter().any(|w| w.id == item.id) {
            self.history.push(item.clone());
        }
    }
}
