//! # All Expenses Screen
//!
//! Lists every expense in the store with a running total.

use std::sync::Arc;

use eframe::egui;
use shared::ExpenseId;

use crate::ui::components::{show_expenses_output, ExpensesOutputView};
use crate::ui::navigation::{Navigator, Route};
use crate::ui::state::ExpensesStore;

pub const ALL_EXPENSES_PERIOD: &str = "Total";
pub const ALL_EXPENSES_FALLBACK: &str = "No expenses added yet! Click + to add now!";

pub struct AllExpenses {
    store: Arc<dyn ExpensesStore>,
    navigator: Arc<dyn Navigator>,
}

impl AllExpenses {
    pub fn new(store: Arc<dyn ExpensesStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self { store, navigator }
    }

    pub fn view(&self) -> ExpensesOutputView {
        ExpensesOutputView::build(
            &self.store.expenses(),
            ALL_EXPENSES_PERIOD,
            ALL_EXPENSES_FALLBACK,
        )
    }

    /// Open the manage screen for a tapped row
    pub fn select(&self, id: ExpenseId) {
        self.navigator.navigate(Route::ManageExpense {
            expense_id: Some(id),
        });
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if let Some(id) = show_expenses_output(ui, &self.view()) {
            self.select(id);
        }
    }
}
