//! # UI Components Module
//!
//! Reusable pieces the screens are built from.
//!
//! ## Module Organization:
//! - `expense_form` - create/edit form with per-field validation
//! - `expenses_output` - summary card and expense list
//! - `overlays` - loading and error states
//! - `theme` - colors and base visuals

pub mod expense_form;
pub mod expenses_output;
pub mod overlays;
pub mod theme;

pub use expense_form::{ExpenseForm, ExpenseFormProps, ExpenseFormView, FormEvent, InputView};
pub use expenses_output::{show_expenses_output, ExpenseItemView, ExpensesOutputView};
pub use overlays::{show_error_overlay, show_loading_overlay};
pub use theme::{apply_theme, CURRENT_THEME};
