//! # Theme Configuration
//!
//! Centralized colors for the expense tracker. The palette follows the dark
//! purple look of the mobile app: deep primary backgrounds, light input
//! fields, a warm accent for the summary card and a red error tone.
//!
//! ## Usage
//! ```ignore
//! use crate::ui::components::theme::CURRENT_THEME;
//!
//! let color = CURRENT_THEME.feedback.error;
//! ```

use eframe::egui::{self, Color32};

#[derive(Debug, Clone)]
pub struct Theme {
    /// Backgrounds and cards
    pub layout: LayoutColors,
    /// Text inputs
    pub inputs: InputColors,
    /// Error banners and invalid fields
    pub feedback: FeedbackColors,
}

#[derive(Debug, Clone)]
pub struct LayoutColors {
    pub screen_background: Color32,
    pub header_background: Color32,
    pub summary_background: Color32,
    pub item_background: Color32,
    pub title_text: Color32,
    pub muted_text: Color32,
    pub separator: Color32,
}

#[derive(Debug, Clone)]
pub struct InputColors {
    pub label: Color32,
    pub background: Color32,
    pub text: Color32,
}

#[derive(Debug, Clone)]
pub struct FeedbackColors {
    pub error: Color32,
    pub error_background: Color32,
    pub invalid_label: Color32,
    pub invalid_background: Color32,
}

pub const CURRENT_THEME: Theme = Theme {
    layout: LayoutColors {
        screen_background: Color32::from_rgb(0x2d, 0x04, 0x81),
        header_background: Color32::from_rgb(0x3e, 0x04, 0xc3),
        summary_background: Color32::from_rgb(0xe4, 0xd9, 0xfd),
        item_background: Color32::from_rgb(0x3e, 0x04, 0xc3),
        title_text: Color32::WHITE,
        muted_text: Color32::from_rgb(0xc6, 0xaf, 0xfc),
        separator: Color32::from_rgb(0xc6, 0xaf, 0xfc),
    },
    inputs: InputColors {
        label: Color32::from_rgb(0xc6, 0xaf, 0xfc),
        background: Color32::from_rgb(0xc6, 0xaf, 0xfc),
        text: Color32::from_rgb(0x2d, 0x04, 0x81),
    },
    feedback: FeedbackColors {
        error: Color32::from_rgb(0x9b, 0x09, 0x5c),
        error_background: Color32::from_rgb(0xe4, 0xd9, 0xfd),
        invalid_label: Color32::from_rgb(0x9b, 0x09, 0x5c),
        invalid_background: Color32::from_rgb(0xfc, 0xc4, 0xe4),
    },
};

/// Apply the theme's base visuals to a context
pub fn apply_theme(ctx: &egui::Context) {
    let mut visuals = egui::Visuals::dark();
    visuals.panel_fill = CURRENT_THEME.layout.screen_background;
    visuals.window_fill = CURRENT_THEME.layout.screen_background;
    visuals.extreme_bg_color = CURRENT_THEME.inputs.background;
    visuals.override_text_color = Some(CURRENT_THEME.layout.title_text);
    ctx.set_visuals(visuals);
}
