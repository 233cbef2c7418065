#[cfg(test)]
mod tests {
    use crate::{
        core::models::{
            ProgressOutcome,
            VocabularyItem,
        },
        practice::{
            PracticeSession,
            PracticeStatus,
            ReviewStatus,
        },
    };

    fn word(id: &str) -> VocabularyItem {
        VocabularyItem {
            id: id.to_string(),
            word: format!("word-{id}"),
            transcription: String::new(),
            part_of_speech: "Noun".to_string(),
            translation: format!("translation-{id}"),
            learned: false,
        }
    }

    fn session_with_queue(target: u32, ids: &[&str]) -> PracticeSession {
        let mut session = PracticeSession::new(target);
        session.extend_queue(ids.iter().map(|id| word(id)).collect());
        session
    }

    /// Marks the current word known and confirms the progress call, the way
    /// the task layer would after a successful round trip.
    fn mark_known_and_confirm(session: &mut PracticeSession) {
        let effects = session.mark(true).expect("a current word");
        assert_eq!(effects.status, ReviewStatus::Learned);
        assert!(effects.record_progress);
        session.apply_progress(ProgressOutcome::Counted);
    }

    #[test]
    fn learned_count_tracks_confirmed_marks() {
        let mut session = session_with_queue(10, &["a", "b", "c", "d"]);

        for expected in 1..=4 {
            mark_known_and_confirm(&mut session);
            assert_eq!(session.goal.learned_today, expected);
            assert!(!session.goal.goal_reached);
        }
    }

    #[test]
    fn goal_reached_at_first_crossing() {
        let mut session = session_with_queue(2, &["a", "b", "c"]);

        mark_known_and_confirm(&mut session);
        assert!(!session.goal.goal_reached);

        mark_known_and_confirm(&mut session);
        assert!(session.goal.goal_reached);
    }

    #[test]
    fn two_item_walkthrough() {
        let mut session = session_with_queue(2, &["a", "b"]);

        // Know A.
        mark_known_and_confirm(&mut session);
        assert_eq!(session.goal.learned_today, 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.queue_len(), 1);
        assert_eq!(session.position(), 1);
        assert!(!session.goal.goal_reached);

        // Still learning B: recycled, not counted.
        let effects = session.mark(false).expect("B is current");
        assert_eq!(effects.item.id, "b");
        assert_eq!(effects.status, ReviewStatus::Learning);
        assert!(!effects.record_progress);
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.queue_len(), 1);
        assert_eq!(session.position(), 2);
        assert!(!session.goal.goal_reached);

        // The recycled B comes back around at the frontier.
        assert_eq!(session.current().expect("frontier").id, "b");

        mark_known_and_confirm(&mut session);
        assert_eq!(session.goal.learned_today, 2);
        assert!(session.goal.goal_reached);
        assert_eq!(session.queue_len(), 0);
    }

    #[test]
    fn recycled_word_returns_after_rest_of_queue() {
        let mut session = session_with_queue(50, &["a", "b", "c"]);

        let effects = session.mark(false).expect("A is current");
        assert_eq!(effects.item.id, "a");

        // A sits at the back; the other two go by first.
        session.mark(false).expect("B");
        session.mark(false).expect("C");

        assert_eq!(session.current().expect("A again").id, "a");
    }

    #[test]
    fn rewind_then_remark_does_not_double_count() {
        let mut session = session_with_queue(10, &["a", "b"]);
        mark_known_and_confirm(&mut session);
        assert_eq!(session.goal.learned_today, 1);

        session.rewind();
        assert_eq!(session.current().expect("back on A").id, "a");

        // Re-marking a history word is safe: the service answers with the
        // duplicate conflict, which resolves without an increment.
        let effects = session.mark(true).expect("A again");
        assert!(effects.record_progress);
        session.apply_progress(ProgressOutcome::AlreadyCounted);

        assert_eq!(session.goal.learned_today, 1);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.position(), 1);
    }

    #[test]
    fn rewind_floors_at_zero() {
        let mut session = session_with_queue(10, &["a"]);
        session.rewind();
        session.rewind();
        assert_eq!(session.position(), 0);
        assert_eq!(session.current().expect("A").id, "a");
    }

    #[test]
    fn rewind_leaves_queue_untouched() {
        let mut session = session_with_queue(10, &["a", "b"]);
        session.mark(false);
        let queue_before = session.queue_len();

        session.rewind();
        assert_eq!(session.queue_len(), queue_before);
    }

    #[test]
    fn lowering_goal_flips_reached_synchronously() {
        let mut session = session_with_queue(20, &["a", "b", "c"]);
        mark_known_and_confirm(&mut session);
        mark_known_and_confirm(&mut session);
        mark_known_and_confirm(&mut session);
        assert!(!session.goal.goal_reached);

        session.set_goal(2);
        assert!(session.goal.goal_reached);
    }

    #[test]
    fn raising_goal_recomputes_reached() {
        let mut session = session_with_queue(1, &["a", "b"]);
        mark_known_and_confirm(&mut session);
        assert!(session.goal.goal_reached);

        session.set_goal(5);
        assert!(!session.goal.goal_reached);
    }

    #[test]
    fn zero_goal_never_reads_as_reached() {
        let mut session = session_with_queue(1, &["a"]);
        mark_known_and_confirm(&mut session);
        assert!(session.goal.goal_reached);

        session.set_goal(0);
        assert!(!session.goal.goal_reached);
    }

    #[test]
    fn failed_progress_call_keeps_count_and_clears_pending() {
        let mut session = session_with_queue(10, &["a"]);
        session.mark(true);
        assert_eq!(session.goal.pending, 1);

        session.progress_failed();
        assert_eq!(session.goal.pending, 0);
        assert_eq!(session.goal.learned_today, 0);
    }

    #[test]
    fn exhaustion_state_selection() {
        // Empty queue, nothing learned: offer a refresh.
        let session = PracticeSession::new(10);
        assert_eq!(session.status(), PracticeStatus::NoWordsAvailable);

        // Empty queue after some learning: finished for now.
        let mut session = session_with_queue(10, &["a"]);
        mark_known_and_confirm(&mut session);
        assert_eq!(session.status(), PracticeStatus::SessionFinished);

        // Goal reached wins over both, queue empty or not.
        let mut session = session_with_queue(1, &["a", "b"]);
        mark_known_and_confirm(&mut session);
        assert!(session.queue_len() > 0);
        assert_eq!(session.status(), PracticeStatus::GoalReached);

        let mut session = session_with_queue(10, &["a", "b"]);
        assert_eq!(session.status(), PracticeStatus::Reviewing);
        session.set_goal_reached_remote(true);
        assert_eq!(session.status(), PracticeStatus::GoalReached);
    }

    #[test]
    fn seeding_resumes_at_the_frontier() {
        let mut session = PracticeSession::new(10);
        session.seed_history(2, vec![word("a"), word("b")]);
        session.extend_queue(vec![word("c")]);

        assert_eq!(session.goal.learned_today, 2);
        assert_eq!(session.position(), 2);
        // Words already seen today are not re-shown automatically.
        assert_eq!(session.current().expect("frontier").id, "c");
    }

    #[test]
    fn seeding_crossing_target_marks_goal_reached() {
        let mut session = PracticeSession::new(2);
        session.seed_history(3, vec![word("a"), word("b"), word("c")]);
        assert!(session.goal.goal_reached);
    }

    #[test]
    fn top_up_skips_words_already_queued() {
        let mut session = session_with_queue(10, &["a", "b"]);
        session.extend_queue(vec![word("b"), word("c")]);

        assert_eq!(session.queue_len(), 3);
    }

    #[test]
    fn top_up_may_requeue_history_words_but_not_queued_ones() {
        // A recycled word already waits in the queue; fetching again must
        // not enqueue it twice.
        let mut session = session_with_queue(10, &["a"]);
        session.mark(false);
        assert_eq!(session.queue_len(), 1);

        session.extend_queue(vec![word("a")]);
        assert_eq!(session.queue_len(), 1);
        assert_eq!(session.history().len(), 1);

        // A history word that left the queue may come back through a fetch.
        let mut session = session_with_queue(10, &["b"]);
        session.mark(true);
        assert_eq!(session.queue_len(), 0);

        session.extend_queue(vec![word("b")]);
        assert_eq!(session.queue_len(), 1);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn mark_with_nothing_current_is_a_no_op() {
        let mut session = PracticeSession::new(10);
        assert!(session.mark(true).is_none());
        assert!(session.mark(false).is_none());
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn known_word_leaves_queue_even_when_marked_from_history() {
        let mut session = session_with_queue(10, &["a", "b"]);

        // A recycles, so it sits in history and at the back of the queue.
        session.mark(false);
        assert_eq!(session.queue_len(), 2);

        // Rewind to A and mark it known: it must leave the queue by id.
        session.rewind();
        let effects = session.mark(true).expect("A from history");
        assert_eq!(effects.item.id, "a");
        assert_eq!(session.queue_len(), 1);
        assert_eq!(session.current().expect("B next").id, "b");
    }

    #[test]
    fn remote_goal_verdict_wins_on_initial_load() {
        let mut session = PracticeSession::new(5);
        session.seed_history(5, vec![word("a")]);
        assert!(session.goal.goal_reached);

        // The stats service disagrees (e.g. the day rolled over remotely).
        session.set_goal_reached_remote(false);
        assert_eq!(session.status(), PracticeStatus::SessionFinished);
    }

    #[test]
    fn single_word_recycles_onto_itself() {
        let mut session = session_with_queue(10, &["a"]);
        session.mark(false);

        assert_eq!(session.current().expect("A immediately again").id, "a");
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.queue_len(), 1);
    }
}
