use anyhow::Context;
use eframe::egui;
use tracing::{error, info};

use expense_tracker::config::AppConfig;
use expense_tracker::logging::init_logging;
use expense_tracker::ui::components::apply_theme;
use expense_tracker::ExpenseTrackerApp;

fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.log_filter);
    info!("Starting Expense Tracker egui application");

    // Phone-shaped window, like the mobile app
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([340.0, 560.0])
            .with_title("Expense Tracker")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Expense Tracker",
        options,
        Box::new(move |cc| {
            apply_theme(&cc.egui_ctx);

            match ExpenseTrackerApp::new(config) {
                Ok(app) => {
                    info!("Successfully initialized Expense Tracker app");
                    let app: Box<dyn eframe::App> = Box::new(app);
                    Ok(app)
                }
                Err(e) => {
                    error!("Failed to initialize app: {:#}", e);
                    Err(format!("Failed to initialize app: {:#}", e).into())
                }
            }
        }),
    )
    .map_err(|e| anyhow::anyhow!("eframe exited with an error: {}", e))
}
