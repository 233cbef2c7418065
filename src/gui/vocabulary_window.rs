use eframe::egui;
use egui_extras::{
    Column,
    TableBuilder,
};

use crate::{
    core::models::{
        VocabularyItem,
        WordFilter,
    },
    gui::theme::Theme,
};

#[derive(Debug, Clone)]
pub enum VocabularyAction {
    Reload(WordFilter),
    ToggleLearned { word_id: String, learned: bool },
    Delete(String),
}

/// Browser over the full dictionary, with the same filters the word service
/// understands. Mutations go through the task layer and come back as
/// `apply_*` calls.
pub struct VocabularyWindow {
    pub open: bool,
    filter: WordFilter,
    words: Vec<VocabularyItem>,
    loading: bool,
    error: Option<String>,
}

impl VocabularyWindow {
    pub fn new() -> Self {
        Self {
            open: false,
            filter: WordFilter::All,
            words: Vec::new(),
            loading: false,
            error: None,
        }
    }

    pub fn filter(&self) -> WordFilter {
        self.filter
    }

    pub fn mark_loading(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn set_words(&mut self, words: Vec<VocabularyItem>) {
        self.words = words;
        self.loading = false;
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.loading = false;
        self.error = Some(error);
    }

    pub fn apply_toggle(&mut self, updated: VocabularyItem) {
        if let Some(word) = self.words.iter_mut().find(|w| w.id == updated.id) {
            *word = updated;
        }
    }

    pub fn apply_delete(&mut self, word_id: &str) {
        self.words.retain(|w| w.id != word_id);
    }

    pub fn show(&mut self, ctx: &egui::Context, theme: &Theme) -> Option<VocabularyAction> {
        if !self.open {
            return None;
        }

        let mut action = None;
        let mut open = self.open;

        egui::Window::new("Vocabulary")
            .open(&mut open)
            .default_size([680.0, 440.0])
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    for filter in [WordFilter::All, WordFilter::Unmastered, WordFilter::Learned] {
                        let selected = self.filter == filter;
                        if ui.selectable_label(selected, filter.label()).clicked() && !selected {
                            self.filter = filter;
                            self.loading = true;
                            action = Some(VocabularyAction::Reload(filter));
                        }
                    }

                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("⟳").on_hover_text("Reload").clicked() {
                            self.loading = true;
                            action = Some(VocabularyAction::Reload(self.filter));
                        }
                        if self.loading {
                            ui.add(egui::Spinner::new());
                        }
                    });
                });

                if let Some(error) = &self.error {
                    ui.colored_label(theme.red(ui.ctx()), error);
                }

                ui.separator();

                let text_height =
                    egui::TextStyle::Body.resolve(ui.style()).size.max(ui.spacing().interact_size.y);

                TableBuilder::new(ui)
                    .striped(true)
                    .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                    .column(Column::auto().at_least(120.0))
                    .column(Column::auto().at_least(100.0))
                    .column(Column::remainder())
                    .column(Column::auto().at_least(70.0))
                    .column(Column::auto().at_least(120.0))
                    .header(24.0, |mut header| {
                        header.col(|ui| {
                            ui.label(theme.heading(ui.ctx(), "Word"));
                        });
                        header.col(|ui| {
                            ui.label(theme.heading(ui.ctx(), "Transcription"));
                        });
                        header.col(|ui| {
                            ui.label(theme.heading(ui.ctx(), "Translation"));
                        });
                        header.col(|ui| {
                            ui.label(theme.heading(ui.ctx(), "Status"));
                        });
                        header.col(|ui| {
                            ui.label(theme.heading(ui.ctx(), "Actions"));
                        });
                    })
                    .body(|body| {
                        body.rows(text_height, self.words.len(), |mut row| {
                            let word = &self.words[row.index()];

                            row.col(|ui| {
                                ui.strong(&word.word);
                            });
                            row.col(|ui| {
                                ui.label(&word.transcription);
                            });
                            row.col(|ui| {
                                ui.label(&word.translation);
                            });
                            row.col(|ui| {
                                if word.learned {
                                    ui.colored_label(theme.green(ui.ctx()), "learned");
                                } else {
                                    ui.colored_label(theme.yellow(ui.ctx()), "learning");
                                }
                            });
                            row.col(|ui| {
                                let toggle_text =
                                    if word.learned { "Unlearn" } else { "Learned" };
                                if ui.small_button(toggle_text).clicked() {
                                    action = Some(VocabularyAction::ToggleLearned {
                                        word_id: word.id.clone(),
                                        learned: !word.learned,
                                    });
                                }
                                if ui.small_button("Delete").clicked() {
                                    action = Some(VocabularyAction::Delete(word.id.clone()));
                                }
                            });
                        });
                    });
            });

        self.open = open;
        action
    }
}

impl Default for VocabularyWindow {
    fn default() -> Self {
        Self::new()
    }
}
