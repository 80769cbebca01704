//! Expense tracker: egui screens over a headless view-model layer, persisting
//! to a Firebase-style REST backend.

pub mod app;
pub mod backend;
pub mod config;
pub mod logging;
pub mod ui;

pub use app::ExpenseTrackerApp;
pub use config::AppConfig;
