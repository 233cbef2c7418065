use eframe::egui;
use serde::{
    Deserialize,
    Serialize,
};

use crate::gui::modal::{
    Modal,
    ModalResult,
};

pub const SETTINGS_FILE: &str = "settings.json";

const DEFAULT_BASE_URL: &str = "http://localhost:5001/api";

/// Locally persisted app configuration. The profile-backed flags live on the
/// server and travel through the settings dialog separately.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsData {
    pub base_url: String,
    pub token: String,
    pub dark_mode: bool,
}

impl Default for SettingsData {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), token: String::new(), dark_mode: true }
    }
}

#[derive(Clone, Default)]
pub struct SettingsDraft {
    pub settings: SettingsData,
    pub see_translate: bool,
}

pub enum SettingsAction {
    Saved { settings: SettingsData, see_translate: bool },
    TestConnection(SettingsData),
}

pub struct SettingsModal {
    modal: Modal<SettingsDraft>,
    connection_status: String,
}

impl SettingsModal {
    pub fn new() -> Self {
        Self {
            modal: Modal::new("Settings", SettingsDraft::default()).with_width(420.0),
            connection_status: String::new(),
        }
    }

    pub fn open_with(&mut self, settings: SettingsData, see_translate: bool) {
        *self.modal.data_mut() = SettingsDraft { settings, see_translate };
        self.connection_status.clear();
        self.modal.open();
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_open()
    }

    pub fn set_connection_status(&mut self, status: impl Into<String>) {
        self.connection_status = status.into();
    }

    pub fn show(&mut self, ctx: &egui::Context) -> Option<SettingsAction> {
        let connection_status = self.connection_status.clone();

        let result = self.modal.show(ctx, |ui, draft| {
            egui::Grid::new("settings_grid").num_columns(2).spacing([12.0, 8.0]).show(ui, |ui| {
                ui.label("Server URL");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.settings.base_url)
                        .desired_width(260.0),
                );
                ui.end_row();

                ui.label("Access token");
                ui.add(
                    egui::TextEdit::singleline(&mut draft.settings.token)
                        .password(true)
                        .desired_width(260.0),
                );
                ui.end_row();
            });

            ui.add_space(8.0);
            ui.checkbox(&mut draft.see_translate, "Always show translations");

            if !connection_status.is_empty() {
                ui.add_space(6.0);
                ui.small(&connection_status);
            }

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    return Some(ModalResult::Confirmed(draft.clone()));
                }
                if ui.button("Test connection").clicked() {
                    return Some(ModalResult::Custom("test".to_string(), draft.clone()));
                }
                if ui.button("Cancel").clicked() {
                    return Some(ModalResult::Cancelled);
                }
                None
            })
            .inner
        });

        match result {
            Some(ModalResult::Confirmed(draft)) => Some(SettingsAction::Saved {
                settings: draft.settings,
                see_translate: draft.see_translate,
            }),
            Some(ModalResult::Custom(tag, draft)) if tag == "test" => {
                // Testing should not dismiss the dialog.
                self.modal.open();
                self.connection_status = "Checking...".to_string();
                Some(SettingsAction::TestConnection(draft.settings))
            }
            _ => None,
        }
    }
}

impl Default for SettingsModal {
    fn default() -> Self {
        Self::new()
    }
}
