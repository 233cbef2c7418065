use eframe::egui::{
    self,
    Color32,
    RichText,
};

use crate::{
    core::models::{
        UserProfile,
        VocabularyItem,
    },
    gui::theme::Theme,
    practice::{
        PracticeSession,
        PracticeStatus,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeAction {
    Mark(bool),
    Rewind,
    Reveal,
    RefreshWords,
    OpenGoal,
}

pub struct PracticeView<'a> {
    pub session: &'a PracticeSession,
    pub profile: Option<&'a UserProfile>,
    pub revealed: bool,
    pub review_in_flight: bool,
    pub last_error: Option<&'a str>,
}

pub fn practice_screen(
    ctx: &egui::Context,
    theme: &Theme,
    view: &PracticeView,
) -> Option<PracticeAction> {
    let mut action = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.heading("Practice");
                ui.label(
                    RichText::new(chrono::Local::now().format("%A, %B %d").to_string())
                        .color(theme.muted(ui.ctx())),
                );
                ui.add_space(12.0);

                let goal = view.session.goal;

                if goal.target > 0 {
                    let fraction = (goal.learned_today as f32 / goal.target as f32).min(1.0);
                    ui.add(egui::ProgressBar::new(fraction).desired_width(420.0));
                    ui.small(format!("{} of {} words today", goal.learned_today, goal.target));
                    ui.add_space(16.0);
                }

                if let Some(error) = view.last_error {
                    ui.colored_label(theme.red(ui.ctx()), error);
                    ui.add_space(8.0);
                }

                if goal.target == 0 {
                    let clicked = notice_card(
                        ui,
                        theme,
                        "Pick a daily goal",
                        "Practice is off until you decide how many words to learn each day.",
                        Some("Choose a goal"),
                    );
                    if clicked {
                        action = Some(PracticeAction::OpenGoal);
                    }
                    return;
                }

                match view.session.status() {
                    PracticeStatus::GoalReached => {
                        notice_card(
                            ui,
                            theme,
                            "Congratulations!",
                            "You reached today's goal. Come back tomorrow for a fresh set.",
                            None,
                        );
                    }
                    status => {
                        if let Some(word) = view.session.current() {
                            if let Some(card_action) = flashcard(ui, theme, word, view) {
                                action = Some(card_action);
                            }
                        } else if status == PracticeStatus::NoWordsAvailable {
                            let clicked = notice_card(
                                ui,
                                theme,
                                "No words to practice",
                                "Your dictionary has nothing waiting. Fetch the list again?",
                                Some("Refresh list"),
                            );
                            if clicked {
                                action = Some(PracticeAction::RefreshWords);
                            }
                        } else {
                            notice_card(
                                ui,
                                theme,
                                "That's all for now",
                                "You went through every card in this sitting. New words will \
                                 appear as you add them.",
                                None,
                            );
                        }
                    }
                }
            });
        });
    });

    action
}

fn flashcard(
    ui: &mut egui::Ui,
    theme: &Theme,
    word: &VocabularyItem,
    view: &PracticeView,
) -> Option<PracticeAction> {
    let mut action = None;

    egui::Frame::group(ui.style())
        .fill(theme.surface(ui.ctx()))
        .inner_margin(egui::Margin::same(24))
        .corner_radius(egui::CornerRadius::same(12))
        .show(ui, |ui| {
            ui.set_width(420.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&word.word).size(40.0).strong());

                if !word.transcription.is_empty() {
                    ui.label(
                        RichText::new(format!("[{}]", word.transcription))
                            .size(16.0)
                            .color(theme.muted(ui.ctx())),
                    );
                }
                if !word.part_of_speech.is_empty() {
                    ui.small(RichText::new(&word.part_of_speech).italics());
                }

                ui.add_space(12.0);

                let translation_visible =
                    view.revealed || view.profile.is_some_and(|p| p.see_translate);

                if translation_visible {
                    ui.label(
                        RichText::new(&word.translation).size(20.0).color(theme.cyan(ui.ctx())),
                    );
                } else if ui.button("Show translation").clicked() {
                    action = Some(PracticeAction::Reveal);
                }
            });
        });

    ui.add_space(16.0);

    let buttons_enabled = !view.review_in_flight;
    ui.allocate_ui_with_layout(
        egui::vec2(420.0, 44.0),
        egui::Layout::left_to_right(egui::Align::Center),
        |ui| {
            let still_learning = egui::Button::new(
                RichText::new("Still learning").color(Color32::WHITE).strong(),
            )
            .fill(theme.red(ui.ctx()))
            .min_size(egui::vec2(200.0, 40.0));

            if ui.add_enabled(buttons_enabled, still_learning).clicked() {
                action = Some(PracticeAction::Mark(false));
            }

            ui.add_space(12.0);

            let know =
                egui::Button::new(RichText::new("I know it").color(Color32::WHITE).strong())
                    .fill(theme.green(ui.ctx()))
                    .min_size(egui::vec2(200.0, 40.0));

            if ui.add_enabled(buttons_enabled, know).clicked() {
                action = Some(PracticeAction::Mark(true));
            }
        },
    );

    ui.add_space(10.0);

    let can_rewind = view.session.position() > 0;
    if ui.add_enabled(can_rewind, egui::Button::new("⟲ Repeat")).clicked() {
        action = Some(PracticeAction::Rewind);
    }

    action
}

/// Centered card used for the three exhaustion states and the missing-goal
/// prompt. Returns whether the optional button was clicked.
fn notice_card(
    ui: &mut egui::Ui,
    theme: &Theme,
    title: &str,
    text: &str,
    button: Option<&str>,
) -> bool {
    let mut clicked = false;

    ui.add_space(24.0);
    egui::Frame::group(ui.style())
        .fill(theme.surface(ui.ctx()))
        .inner_margin(egui::Margin::same(24))
        .corner_radius(egui::CornerRadius::same(12))
        .show(ui, |ui| {
            ui.set_width(380.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(title).size(22.0).strong());
                ui.add_space(6.0);
                ui.label(RichText::new(text).color(theme.muted(ui.ctx())));

                if let Some(label) = button {
                    ui.add_space(14.0);
                    clicked = ui.button(label).clicked();
                }
            });
        });

    clicked
}
