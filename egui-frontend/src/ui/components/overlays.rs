//! Full-screen loading and error states.

use eframe::egui::{self, RichText};

use super::theme::CURRENT_THEME;

/// Centered spinner shown while a backend call is outstanding
pub fn show_loading_overlay(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.add(egui::Spinner::new().size(48.0));
    });
}

/// Centered error message with an "Okay" button. Returns true when dismissed.
pub fn show_error_overlay(ui: &mut egui::Ui, message: &str) -> bool {
    let mut dismissed = false;
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 3.0);
        ui.label(
            RichText::new("An error occurred!")
                .size(20.0)
                .strong()
                .color(CURRENT_THEME.layout.title_text),
        );
        ui.add_space(8.0);
        ui.label(RichText::new(message).color(CURRENT_THEME.layout.title_text));
        ui.add_space(16.0);
        dismissed = ui.button("Okay").clicked();
    });
    dismissed
}
