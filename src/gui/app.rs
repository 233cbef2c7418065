use std::collections::HashSet;

use eframe::egui;

use super::{
    error_modal::ErrorModal,
    goal_modal::GoalModal,
    message_overlay::MessageOverlay,
    practice_screen::{
        practice_screen,
        PracticeAction,
        PracticeView,
    },
    settings_modal::{
        SettingsAction,
        SettingsData,
        SettingsModal,
        SETTINGS_FILE,
    },
    stats_window::StatsWindow,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
    vocabulary_window::{
        VocabularyAction,
        VocabularyWindow,
    },
};
use crate::{
    api::ApiClient,
    core::{
        models::{
            ProfileUpdate,
            UserProfile,
        },
        tasks::{
            TaskManager,
            TaskResult,
        },
    },
    persistence::{
        load_json_or_default,
        save_json,
    },
    practice::PracticeSession,
};

/// Tracks which steps of the session bootstrap have landed. Interaction
/// stays behind the overlay until all three are in.
#[derive(Default)]
struct InitGate {
    profile: bool,
    stats: bool,
    words: bool,
}

impl InitGate {
    fn complete(&self) -> bool {
        self.profile && self.stats && self.words
    }
}

pub struct TangoApp {
    settings: SettingsData,
    client: Option<ApiClient>,

    profile: Option<UserProfile>,
    session: PracticeSession,
    init: InitGate,

    revealed: bool,
    reviews_in_flight: HashSet<String>,
    last_error: Option<String>,
    server_ok: bool,

    theme: Theme,
    overlay: MessageOverlay,
    goal_modal: GoalModal,
    settings_modal: SettingsModal,
    error_modal: ErrorModal,
    vocabulary: VocabularyWindow,
    stats: StatsWindow,

    task_manager: TaskManager,
}

impl TangoApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_json_or_default::<SettingsData>(SETTINGS_FILE);
        let theme = Theme::dusk();

        set_theme(&cc.egui_ctx, &theme);
        cc.egui_ctx.options_mut(|o| {
            o.theme_preference = if settings.dark_mode {
                egui::ThemePreference::Dark
            } else {
                egui::ThemePreference::Light
            };
        });
        cc.egui_ctx.set_zoom_factor(cc.egui_ctx.zoom_factor() + 0.1);

        let task_manager = TaskManager::new();
        let client = ApiClient::new(&settings.base_url, &settings.token).ok();

        let mut overlay = MessageOverlay::new("Connecting to server...");
        match &client {
            Some(client) => task_manager.start_session(client.clone()),
            None => overlay.clear(),
        }

        let mut app = Self {
            settings,
            client,
            profile: None,
            session: PracticeSession::new(0),
            init: InitGate::default(),
            revealed: false,
            reviews_in_flight: HashSet::new(),
            last_error: None,
            server_ok: false,
            theme,
            overlay,
            goal_modal: GoalModal::new(),
            settings_modal: SettingsModal::new(),
            error_modal: ErrorModal::new(),
            vocabulary: VocabularyWindow::new(),
            stats: StatsWindow::new(),
            task_manager,
        };

        if app.client.is_none() {
            app.settings_modal.open_with(app.settings.clone(), false);
        }

        app
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        match result {
            TaskResult::Profile(result) => {
                self.init.profile = true;
                match result {
                    Ok(profile) => {
                        self.server_ok = true;
                        self.session.set_goal(profile.day_words);
                        self.profile = Some(profile);
                    }
                    Err(e) => {
                        self.server_ok = false;
                        self.error_modal.show_error(
                            "Profile unavailable",
                            "Could not load your profile. Practice stays disabled until the \
                             server is reachable.",
                            Some(e.as_str()),
                        );
                    }
                }
                self.maybe_finish_loading();
            }

            TaskResult::DailyStats(result) => {
                self.init.stats = true;
                match result {
                    Ok(stats) => {
                        self.session.seed_history(stats.learned_words, stats.word_sequence);
                    }
                    Err(e) => {
                        self.last_error = Some(format!("Could not load today's stats: {e}"));
                    }
                }
                self.maybe_finish_loading();
            }

            TaskResult::UnmasteredWords(result) => {
                self.init.words = true;
                match result {
                    Ok(words) => {
                        self.session.extend_queue(words);
                        self.last_error = None;
                    }
                    Err(e) => {
                        self.last_error = Some(format!("Could not load words: {e}"));
                    }
                }
                self.maybe_finish_loading();
            }

            TaskResult::DailyGoalChecked(result) => {
                if let Ok(reached) = result {
                    self.session.set_goal_reached_remote(reached);
                }
            }

            TaskResult::WordStatusSaved { word_id, result } => {
                self.reviews_in_flight.remove(&word_id);
                if let Err(e) = result {
                    self.last_error = Some(format!("Could not save the review: {e}"));
                }
            }

            TaskResult::ProgressRecorded { word_id: _, result } => match result {
                Ok(outcome) => self.session.apply_progress(outcome),
                Err(e) => {
                    self.session.progress_failed();
                    self.last_error = Some(format!("Could not record progress: {e}"));
                }
            },

            TaskResult::DailyGoalSaved(result) => {
                if let Err(e) = result {
                    self.last_error = Some(format!("Could not save the goal: {e}"));
                }
            }

            TaskResult::VocabularyLoaded(result) => match result {
                Ok(words) => self.vocabulary.set_words(words),
                Err(e) => self.vocabulary.set_error(e),
            },

            TaskResult::WordToggled { word_id: _, result } => match result {
                Ok(updated) => self.vocabulary.apply_toggle(updated),
                Err(e) => self.vocabulary.set_error(e),
            },

            TaskResult::WordDeleted { word_id, result } => match result {
                Ok(()) => self.vocabulary.apply_delete(&word_id),
                Err(e) => self.vocabulary.set_error(e),
            },

            TaskResult::SummaryLoaded(result) => match result {
                Ok((summary, counts)) => self.stats.set_summary(summary, counts),
                Err(e) => self.stats.set_error(e),
            },

            TaskResult::ProfileSaved(result) => match result {
                Ok(profile) => self.profile = Some(profile),
                Err(e) => {
                    self.last_error = Some(format!("Could not save profile settings: {e}"));
                }
            },

            TaskResult::ConnectionChecked(result) => {
                self.server_ok = result.is_ok();
                let status = match result {
                    Ok(()) => "Connected.".to_string(),
                    Err(e) => format!("Connection failed: {e}"),
                };
                self.settings_modal.set_connection_status(status);
            }
        }
    }

    fn maybe_finish_loading(&mut self) {
        if self.init.complete() {
            self.overlay.clear();
        }
    }

    fn handle_top_bar(&mut self, action: TopBarAction) {
        match action {
            TopBarAction::OpenGoal => self.goal_modal.open_with(self.session.goal.target),

            TopBarAction::OpenVocabulary => {
                self.vocabulary.open = true;
                if let Some(client) = self.client.clone() {
                    self.vocabulary.mark_loading();
                    self.task_manager.load_vocabulary(client, self.vocabulary.filter());
                }
            }

            TopBarAction::OpenStats => {
                self.stats.open = true;
                if let Some(client) = self.client.clone() {
                    self.stats.mark_loading();
                    self.task_manager.load_summary(client);
                }
            }

            TopBarAction::OpenSettings => {
                let see_translate = self.profile.as_ref().is_some_and(|p| p.see_translate);
                self.settings_modal.open_with(self.settings.clone(), see_translate);
            }

            TopBarAction::Refresh => {
                if let Some(client) = self.client.clone() {
                    self.task_manager.refresh_session(client);
                }
            }
        }
    }

    fn handle_practice(&mut self, action: PracticeAction) {
        match action {
            PracticeAction::Mark(known) => {
                // A second click on the same word while its review is still
                // in flight is dropped rather than queued.
                let in_flight = self
                    .session
                    .current()
                    .is_some_and(|w| self.reviews_in_flight.contains(&w.id));
                if in_flight {
                    return;
                }

                if let Some(effects) = self.session.mark(known) {
                    self.revealed = false;

                    if let Some(client) = self.client.clone() {
                        self.reviews_in_flight.insert(effects.item.id.clone());
                        self.task_manager.submit_review(client, effects);
                    } else if effects.record_progress {
                        self.session.progress_failed();
                    }
                }
            }

            PracticeAction::Rewind => {
                self.session.rewind();
                self.revealed = false;
            }

            PracticeAction::Reveal => self.revealed = true,

            PracticeAction::RefreshWords => {
                if let Some(client) = self.client.clone() {
                    self.task_manager.load_unmastered_words(client);
                }
            }

            PracticeAction::OpenGoal => self.goal_modal.open_with(self.session.goal.target),
        }
    }

    fn apply_new_goal(&mut self, target: u32) {
        // Local recompute first: a lowered goal flips to "reached" without
        // waiting on the network.
        self.session.set_goal(target);
        self.revealed = false;

        if let Some(profile) = &mut self.profile {
            profile.day_words = target;
        }

        if let Some(client) = self.client.clone() {
            self.task_manager.save_daily_goal(client, target);
        }
    }

    fn handle_settings(&mut self, action: SettingsAction) {
        match action {
            SettingsAction::Saved { settings, see_translate } => {
                let see_translate_changed =
                    self.profile.as_ref().map_or(true, |p| p.see_translate != see_translate);

                self.settings = settings;
                if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
                    eprintln!("Failed to save settings: {e}");
                }

                match ApiClient::new(&self.settings.base_url, &self.settings.token) {
                    Ok(client) => {
                        self.client = Some(client.clone());
                        self.session = PracticeSession::new(0);
                        self.profile = None;
                        self.init = InitGate::default();
                        self.reviews_in_flight.clear();
                        self.last_error = None;

                        self.overlay.set_message("Connecting to server...");
                        self.task_manager.start_session(client.clone());

                        if see_translate_changed {
                            let update = ProfileUpdate {
                                see_translate: Some(see_translate),
                                ..Default::default()
                            };
                            self.task_manager.save_profile_settings(client, update);
                        }
                    }
                    Err(e) => {
                        self.error_modal.show_error(
                            "Settings",
                            "Could not create the HTTP client.",
                            Some(e.to_string().as_str()),
                        );
                    }
                }
            }

            SettingsAction::TestConnection(settings) => {
                if let Ok(client) = ApiClient::new(&settings.base_url, &settings.token) {
                    self.task_manager.check_connection(client);
                }
            }
        }
    }

    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark = ctx.style().visuals.dark_mode;
        if dark != self.settings.dark_mode {
            self.settings.dark_mode = dark;
            if let Err(e) = save_json(&self.settings, SETTINGS_FILE) {
                eprintln!("Failed to save settings: {e}");
            }
        }
    }
}

impl eframe::App for TangoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for result in self.task_manager.poll_results() {
            self.handle_task_result(result);
        }

        self.sync_dark_mode(ctx);

        let username = self.profile.as_ref().map(|p| p.username.clone());
        if let Some(action) = TopBar::show(
            ctx,
            &self.theme,
            username.as_deref(),
            self.session.goal.pending,
            self.server_ok,
        ) {
            self.handle_top_bar(action);
        }

        let review_in_flight = self
            .session
            .current()
            .is_some_and(|w| self.reviews_in_flight.contains(&w.id));

        let view = PracticeView {
            session: &self.session,
            profile: self.profile.as_ref(),
            revealed: self.revealed,
            review_in_flight,
            last_error: self.last_error.as_deref(),
        };
        if let Some(action) = practice_screen(ctx, &self.theme, &view) {
            self.handle_practice(action);
        }

        if let Some(goal) = self.goal_modal.show(ctx) {
            self.apply_new_goal(goal);
        }

        if let Some(action) = self.settings_modal.show(ctx) {
            self.handle_settings(action);
        }

        if let Some(action) = self.vocabulary.show(ctx, &self.theme) {
            match action {
                VocabularyAction::Reload(filter) => {
                    if let Some(client) = self.client.clone() {
                        self.task_manager.load_vocabulary(client, filter);
                    }
                }
                VocabularyAction::ToggleLearned { word_id, learned } => {
                    if let Some(client) = self.client.clone() {
                        self.task_manager.toggle_learned(client, word_id, learned);
                    }
                }
                VocabularyAction::Delete(word_id) => {
                    if let Some(client) = self.client.clone() {
                        self.task_manager.delete_word(client, word_id);
                    }
                }
            }
        }

        self.stats.show(ctx, &self.theme);
        self.overlay.show(ctx, &self.theme);
        self.error_modal.show(ctx);

        // Background results arrive between input events; keep polling at a
        // low cadence while anything is outstanding.
        if self.overlay.is_active()
            || self.session.goal.pending > 0
            || !self.reviews_in_flight.is_empty()
        {
            ctx.request_repaint_after(std::time::Duration::from_millis(200));
        }
    }
}
