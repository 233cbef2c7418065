use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::{
    api::{
        stats,
        users,
        words,
        ApiClient,
    },
    core::models::{
        ProfileUpdate,
        WordFilter,
    },
    practice::{
        MarkEffects,
        ReviewStatus,
    },
};

/// Runs every network call off the interaction thread and reports results
/// over a channel. The GUI drains the channel each frame, which keeps local
/// state transitions strictly in user order even when responses are not.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));
        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Session bootstrap, in protocol order: profile, then today's stats,
    /// then the unmastered queue, then the service's goal verdict. One
    /// result per step so the app can seed state as each lands.
    pub fn start_session(&self, client: ApiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            runtime.block_on(async {
                let profile = users::get_profile(&client).await.map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::Profile(profile));

                let daily = stats::get_daily_stats(&client).await.map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::DailyStats(daily));

                let unmastered = words::get_words(&client, WordFilter::Unmastered)
                    .await
                    .map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::UnmasteredWords(unmastered));

                let reached = stats::check_daily_goal(&client).await.map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::DailyGoalChecked(reached));
            });
        });
    }

    /// Top up the queue and re-sync stats after a goal change or a manual
    /// refresh. Same ordering as the bootstrap, minus the profile.
    pub fn refresh_session(&self, client: ApiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            runtime.block_on(async {
                let daily = stats::get_daily_stats(&client).await.map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::DailyStats(daily));

                let unmastered = words::get_words(&client, WordFilter::Unmastered)
                    .await
                    .map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::UnmasteredWords(unmastered));

                let reached = stats::check_daily_goal(&client).await.map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::DailyGoalChecked(reached));
            });
        });
    }

    pub fn load_unmastered_words(&self, client: ApiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                words::get_words(&client, WordFilter::Unmastered).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::UnmasteredWords(result));
        });
    }

    /// Push one review to the backend. The status call and the progress
    /// call go out together but are reported separately: each reconciles on
    /// its own, and a failure of one never rolls back the other.
    pub fn submit_review(&self, client: ApiClient, effects: MarkEffects) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            runtime.block_on(async {
                let word_id = effects.item.id.clone();

                let status_call = async {
                    match effects.status {
                        ReviewStatus::Learned => {
                            words::set_learned(&client, &word_id, true).await.map(|_| ())
                        }
                        ReviewStatus::Learning => words::set_learning(&client, &word_id).await,
                    }
                };

                if effects.record_progress {
                    let (status_result, progress_result) =
                        futures::join!(status_call, stats::record_progress(&client, &word_id));

                    let _ = sender.send(TaskResult::WordStatusSaved {
                        word_id: word_id.clone(),
                        result: status_result.map_err(|e| e.to_string()),
                    });
                    let _ = sender.send(TaskResult::ProgressRecorded {
                        word_id,
                        result: progress_result.map_err(|e| e.to_string()),
                    });
                } else {
                    let result = status_call.await.map_err(|e| e.to_string());
                    let _ = sender.send(TaskResult::WordStatusSaved { word_id, result });
                }
            });
        });
    }

    /// Persist a new daily target, then re-sync the session against it. The
    /// refetches wait for the save so the goal check answers for the new
    /// target; the caller's local recompute has long since happened.
    pub fn save_daily_goal(&self, client: ApiClient, day_words: u32) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            runtime.block_on(async {
                let saved = users::set_day_words(&client, day_words).await;
                let save_failed = saved.is_err();
                let _ = sender.send(TaskResult::DailyGoalSaved(
                    saved.map(|_| day_words).map_err(|e| e.to_string()),
                ));

                if save_failed {
                    return;
                }

                let daily = stats::get_daily_stats(&client).await.map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::DailyStats(daily));

                let unmastered = words::get_words(&client, WordFilter::Unmastered)
                    .await
                    .map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::UnmasteredWords(unmastered));

                let reached = stats::check_daily_goal(&client).await.map_err(|e| e.to_string());
                let _ = sender.send(TaskResult::DailyGoalChecked(reached));
            });
        });
    }

    pub fn load_vocabulary(&self, client: ApiClient, filter: WordFilter) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                words::get_words(&client, filter).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::VocabularyLoaded(result));
        });
    }

    pub fn toggle_learned(&self, client: ApiClient, word_id: String, learned: bool) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                words::set_learned(&client, &word_id, learned).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::WordToggled { word_id, result });
        });
    }

    pub fn delete_word(&self, client: ApiClient, word_id: String) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                words::delete_word(&client, &word_id).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::WordDeleted { word_id, result });
        });
    }

    pub fn load_summary(&self, client: ApiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                let (summary, counts) =
                    futures::join!(stats::get_summary(&client), words::get_counts(&client));

                match (summary, counts) {
                    (Ok(summary), Ok(counts)) => Ok((summary, counts)),
                    (Err(e), _) | (_, Err(e)) => Err(e.to_string()),
                }
            });

            let _ = sender.send(TaskResult::SummaryLoaded(result));
        });
    }

    pub fn save_profile_settings(&self, client: ApiClient, update: ProfileUpdate) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                users::update_settings(&client, &update).await.map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::ProfileSaved(result));
        });
    }

    /// Cheap reachability probe for the settings modal.
    pub fn check_connection(&self, client: ApiClient) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let result = runtime.block_on(async {
                users::get_profile(&client).await.map(|_| ()).map_err(|e| e.to_string())
            });

            let _ = sender.send(TaskResult::ConnectionChecked(result));
        });
    }
}

impl Default for TaskManager {
    fn default() -> Self {
        Self::new()
    }
}
