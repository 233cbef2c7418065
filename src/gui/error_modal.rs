use eframe::egui;

/// One-at-a-time error dialog for failures that need more room than the
/// inline status line.
pub struct ErrorModal {
    open: bool,
    title: String,
    message: String,
    details: Option<String>,
}

impl ErrorModal {
    pub fn new() -> Self {
        Self { open: false, title: String::new(), message: String::new(), details: None }
    }

    pub fn show_error(
        &mut self,
        title: impl Into<String>,
        message: impl Into<String>,
        details: Option<&str>,
    ) {
        self.title = title.into();
        self.message = message.into();
        self.details = details.map(|d| d.to_string());
        self.open = true;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        if !self.open {
            return;
        }

        let modal = egui::Modal::new(egui::Id::new("error_modal")).show(ctx, |ui| {
            ui.set_width(420.0);

            ui.horizontal(|ui| {
                ui.label(egui::RichText::new("⚠").size(22.0).color(ui.visuals().error_fg_color));
                ui.label(egui::RichText::new(&self.title).size(17.0).strong());
            });

            ui.add_space(8.0);
            ui.label(&self.message);

            if let Some(details) = &self.details {
                ui.add_space(8.0);
                ui.collapsing("Details", |ui| {
                    ui.monospace(details);
                });
            }

            ui.add_space(12.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("OK").clicked() {
                    ui.close();
                }
            });
        });

        if modal.should_close() {
            self.open = false;
            self.details = None;
        }
    }
}

impl Default for ErrorModal {
    fn default() -> Self {
        Self::new()
    }
}
