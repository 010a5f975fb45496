use eframe::egui;
use log::info;

use expense_timeline_egui::ExpenseTimelineApp;

fn main() -> Result<(), eframe::Error> {
    // RUST_LOG controls verbosity
    env_logger::init();
    info!("🚀 Starting expense timeline");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([720.0, 520.0])
            .with_min_inner_size([360.0, 280.0])
            .with_title("Expense Timeline")
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Expense Timeline",
        options,
        Box::new(|cc| {
            if cc.storage.is_some() {
                info!("💾 Persistence storage available");
            }
            Ok(Box::new(ExpenseTimelineApp::new(cc)))
        }),
    )
}
