use eframe::egui;

use crate::{
    core::models::{
        StatsSummary,
        WordCounts,
    },
    gui::theme::Theme,
};

/// Read-only dashboard over the stats service's summary endpoint.
pub struct StatsWindow {
    pub open: bool,
    summary: Option<(StatsSummary, WordCounts)>,
    loading: bool,
    error: Option<String>,
}

impl StatsWindow {
    pub fn new() -> Self {
        Self { open: false, summary: None, loading: false, error: None }
    }

    pub fn mark_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_summary(&mut self, summary: StatsSummary, counts: WordCounts) {
        self.summary = Some((summary, counts));
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.loading = false;
        self.error = Some(error);
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) {
        if !self.open {
            return;
        }

        let mut open = self.open;

        egui::Window::new("Statistics").open(&mut open).default_width(380.0).show(ctx, |ui| {
            if self.loading {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new());
                    ui.label("Loading statistics...");
                });
                return;
            }

            if let Some(error) = &self.error {
                ui.colored_label(theme.red(ui.ctx()), error);
                return;
            }

            let Some((summary, counts)) = &self.summary else {
                ui.label("No data yet.");
                return;
            };

            let remaining = counts.total_words.saturating_sub(summary.total_learned_words);

            egui::Grid::new("stats_grid").num_columns(2).spacing([24.0, 6.0]).show(ui, |ui| {
                ui.label("Words learned");
                ui.strong(summary.total_learned_words.to_string());
                ui.end_row();

                ui.label("Dictionary size");
                ui.strong(counts.total_words.to_string());
                ui.end_row();

                ui.label("Still to learn");
                ui.strong(remaining.to_string());
                ui.end_row();

                ui.label("Learned today");
                ui.strong(summary.learned_words_today.to_string());
                ui.end_row();

                ui.label("This week");
                ui.strong(summary.learned_words_this_week.to_string());
                ui.end_row();

                ui.label("This month");
                ui.strong(summary.learned_words_this_month.to_string());
                ui.end_row();

                ui.label("This year");
                ui.strong(summary.learned_words_this_year.to_string());
                ui.end_row();

                ui.label("Longest streak");
                ui.strong(format!("{} days", summary.max_streak));
                ui.end_row();

                ui.label("Missed days");
                ui.strong(summary.missed_days.to_string());
                ui.end_row();

                ui.label("Goal achievement");
                ui.strong(format!("{:.0}%", summary.goal_achievement_rate * 100.0));
                ui.end_row();

                ui.label("Average per day");
                ui.strong(format!("{:.1}", summary.average_learned_words_per_day));
                ui.end_row();

                ui.label("Training sessions");
                ui.strong(summary.total_trainings.to_string());
                ui.end_row();
            });
        });

        self.open = open;
    }
}

impl Default for StatsWindow {
    fn default() -> Self {
        Self::new()
    }
}
