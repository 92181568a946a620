use eframe::egui;

mod app;
mod data;
mod render;

use app::GatherApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();
    log::info!(
        "gather demo: {} rows x {} classes, targets {:?}",
        data::BATCH_SIZE,
        data::NUM_CLASSES,
        data::target_columns()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 620.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Gather Operation Visualizer",
        options,
        Box::new(|cc| {
            setup_style(&cc.egui_ctx);
            Box::new(GatherApp::default())
        }),
    )
}

// --- Helpers ---

fn setup_style(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::light();
    visuals.panel_fill = render::FIGURE_BG;
    ctx.set_visuals(visuals);
}
