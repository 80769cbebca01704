//! # UI Module
//!
//! Everything between the user and the backend.
//!
//! ## Module Organization:
//! - `components` - form, list, overlays and theme
//! - `navigation` - routes and the navigator seam
//! - `screens` - the three screens plus the egui page for managing an expense
//! - `state` - store, form and screen state

pub mod components;
pub mod navigation;
pub mod screens;
pub mod state;

#[cfg(test)]
pub(crate) mod test_utils;

pub use navigation::{Navigator, Route, ScreenOptions, StackNavigator};
