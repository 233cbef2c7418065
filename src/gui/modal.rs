use eframe::egui;

/// Lightweight wrapper over `egui::Modal` for the confirm/cancel dialogs the
/// app uses. The caller's closure owns the body and decides when a result is
/// produced; clicking outside resolves to `Cancelled`.
pub struct Modal<T> {
    open: bool,
    title: String,
    width: f32,
    pub data: T,
}

pub enum ModalResult<T> {
    Confirmed(T),
    Cancelled,
    Custom(String, T),
}

impl<T> Modal<T> {
    pub fn new(title: impl Into<String>, data: T) -> Self {
        Self { open: false, title: title.into(), width: 360.0, data }
    }

    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }

    pub fn show<F>(&mut self, ctx: &egui::Context, content: F) -> Option<ModalResult<T>>
    where
        F: FnOnce(&mut egui::Ui, &mut T) -> Option<ModalResult<T>>,
    {
        if !self.open {
            return None;
        }

        let width = self.width;
        let title = self.title.clone();
        let data = &mut self.data;
        let mut result = None;

        let response = egui::Modal::new(egui::Id::new(&title)).show(ctx, |ui| {
            ui.set_width(width);
            ui.heading(&title);
            ui.add_space(8.0);
            result = content(ui, data);
        });

        if result.is_some() {
            self.open = false;
        } else if response.should_close() {
            self.open = false;
            result = Some(ModalResult::Cancelled);
        }

        result
    }
}
