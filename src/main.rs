#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Abstract")
            .with_inner_size([380.0, 700.0]),
        ..Default::default()
    };
    eframe::run_native(
        "abstract-canvas",
        native_options,
        Box::new(|cc| Ok(Box::new(abstract_canvas::CanvasApp::new(cc)))),
    )
}
