use eframe::egui;

use crate::gui::modal::{
    Modal,
    ModalResult,
};

/// Slider dialog for the daily target, 10 to 100 words in steps of ten.
pub struct GoalModal {
    modal: Modal<u32>,
}

impl GoalModal {
    pub fn new() -> Self {
        Self { modal: Modal::new("Daily goal", 20) }
    }

    pub fn open_with(&mut self, current: u32) {
        *self.modal.data_mut() = if current == 0 { 20 } else { current.clamp(10, 100) };
        self.modal.open();
    }

    /// Returns the chosen target once the user confirms.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<u32> {
        let result = self.modal.show(ctx, |ui, goal| {
            ui.label("How many words do you want to learn each day?");
            ui.add_space(10.0);
            ui.add(egui::Slider::new(goal, 10..=100).step_by(10.0).suffix(" words"));
            ui.add_space(14.0);

            ui.horizontal(|ui| {
                if ui.button("Save").clicked() {
                    return Some(ModalResult::Confirmed(*goal));
                }
                if ui.button("Cancel").clicked() {
                    return Some(ModalResult::Cancelled);
                }
                None
            })
            .inner
        });

        match result {
            Some(ModalResult::Confirmed(goal)) => Some(goal),
            _ => None,
        }
    }
}

impl Default for GoalModal {
    fn default() -> Self {
        Self::new()
    }
}
