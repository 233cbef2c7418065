use eframe::egui;

use crate::gui::theme::Theme;

/// Full-screen dimmer with a spinner, shown while the session bootstrap is
/// still in flight. User interaction stays gated behind it.
pub struct MessageOverlay {
    active: bool,
    message: String,
}

impl MessageOverlay {
    pub fn new(initial: impl Into<String>) -> Self {
        Self { active: true, message: initial.into() }
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.active = true;
    }

    pub fn clear(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn show(&self, ctx: &egui::Context, theme: &Theme) {
        if !self.active {
            return;
        }

        egui::Area::new(egui::Id::new("message_overlay"))
            .order(egui::Order::Foreground)
            .fixed_pos(egui::Pos2::ZERO)
            .show(ctx, |ui| {
                let screen = ui.ctx().screen_rect();
                ui.allocate_space(screen.size());
                ui.painter().rect_filled(screen, 0.0, egui::Color32::from_black_alpha(120));
            });

        egui::Window::new("overlay_message")
            .order(egui::Order::Foreground)
            .collapsible(false)
            .resizable(false)
            .title_bar(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.add(egui::Spinner::new().color(theme.purple(ui.ctx())));
                    ui.label(&self.message);
                });
            });
    }
}
