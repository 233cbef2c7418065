use eframe::egui;
use tango::gui::TangoApp;

fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("tango"),
        ..Default::default()
    };

    eframe::run_native("tango", options, Box::new(|cc| Ok(Box::new(TangoApp::new(cc)))))
}
