use eframe::egui;

use crate::gui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopBarAction {
    OpenGoal,
    OpenVocabulary,
    OpenStats,
    OpenSettings,
    Refresh,
}

pub struct TopBar;

impl TopBar {
    pub fn show(
        ctx: &egui::Context,
        theme: &Theme,
        username: Option<&str>,
        pending_confirmations: u32,
        server_ok: bool,
    ) -> Option<TopBarAction> {
        let mut action = None;

        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(theme.heading(ui.ctx(), "tango"));
                ui.separator();

                if ui.button("🎯 Daily goal").clicked() {
                    action = Some(TopBarAction::OpenGoal);
                }
                if ui.button("📖 Vocabulary").clicked() {
                    action = Some(TopBarAction::OpenVocabulary);
                }
                if ui.button("📊 Statistics").clicked() {
                    action = Some(TopBarAction::OpenStats);
                }
                if ui.button("⟳ Refresh").on_hover_text("Fetch more words").clicked() {
                    action = Some(TopBarAction::Refresh);
                }
                if ui.button("⚙ Settings").clicked() {
                    action = Some(TopBarAction::OpenSettings);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    egui::widgets::global_theme_preference_switch(ui);
                    ui.add_space(4.0);

                    Self::server_indicator(ui, theme, server_ok);

                    if pending_confirmations > 0 {
                        ui.small(
                            egui::RichText::new("syncing…").color(theme.yellow(ui.ctx())),
                        );
                    }

                    if let Some(name) = username {
                        ui.small(name);
                    }
                });
            });
        });

        action
    }

    fn server_indicator(ui: &mut egui::Ui, theme: &Theme, server_ok: bool) {
        let (color, tooltip) = if server_ok {
            (theme.green(ui.ctx()), "Connected to server")
        } else {
            (theme.red(ui.ctx()), "Server unreachable")
        };

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 2.0;
            ui.small(egui::RichText::new("●").color(color)).on_hover_text(tooltip);
            ui.small("server").on_hover_text(tooltip);
        });
    }
}
