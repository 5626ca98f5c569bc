mod app;
mod color;
mod controller;
mod math;
mod presets;
mod state;
mod ui;

use app::FuncVizApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([700.0, 450.0]),
        ..Default::default()
    };

    eframe::run_native(
        "FuncViz – Equation Visualizer",
        options,
        Box::new(|_cc| Ok(Box::new(FuncVizApp::default()))),
    )
}
