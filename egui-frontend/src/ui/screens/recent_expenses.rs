//! # Recent Expenses Screen
//!
//! Fetches every expense from the backend into the store, then lists the
//! ones dated within the last seven days.

use std::sync::Arc;

use chrono::NaiveDate;
use eframe::egui;
use shared::date_utils::is_within_last_days;
use shared::Expense;
use tracing::{error, info, warn};

use super::ActionOutcome;
use crate::backend::ExpenseBackend;
use crate::ui::components::{
    show_error_overlay, show_expenses_output, show_loading_overlay, ExpensesOutputView,
};
use crate::ui::navigation::{Navigator, Route};
use crate::ui::state::{ExpensesStore, ScreenState, SharedScreenState};

pub const RECENT_EXPENSES_PERIOD: &str = "Last 7 Days";
pub const RECENT_EXPENSES_FALLBACK: &str = "No expenses registered for the last 7 days.";
pub const FETCH_ERROR_MESSAGE: &str = "Could not fetch expenses!";

const RECENT_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecentExpensesView {
    Error(String),
    Loading,
    Output(ExpensesOutputView),
}

pub struct RecentExpenses {
    store: Arc<dyn ExpensesStore>,
    backend: Arc<dyn ExpenseBackend>,
    navigator: Arc<dyn Navigator>,
    state: SharedScreenState,
}

impl RecentExpenses {
    pub fn new(
        store: Arc<dyn ExpensesStore>,
        backend: Arc<dyn ExpenseBackend>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            backend,
            navigator,
            state: SharedScreenState::new(),
        }
    }

    /// Replace the store contents with what the backend has
    pub async fn load(&self) -> ActionOutcome {
        let Some(_request) = self.state.try_begin_request() else {
            warn!("⏳ Fetch ignored: already fetching");
            return ActionOutcome::Skipped;
        };

        self.state.update(ScreenState::start_loading);

        match self.backend.fetch_expenses().await {
            Ok(expenses) => {
                info!("📊 Loaded {} expenses", expenses.len());
                // Backend order is oldest first; the store keeps newest first
                self.store.set_expenses(expenses.into_iter().rev().collect());
                self.state.update(ScreenState::stop_loading);
                ActionOutcome::Completed
            }
            Err(e) => {
                error!("❌ Failed to fetch expenses: {}", e);
                self.state.update(|state| {
                    state.set_error(FETCH_ERROR_MESSAGE);
                    state.stop_loading();
                });
                ActionOutcome::Failed
            }
        }
    }

    pub fn dismiss_error(&self) {
        self.state.update(ScreenState::clear_error);
    }

    pub fn screen_state(&self) -> ScreenState {
        self.state.snapshot()
    }

    /// Expenses from the store dated within the seven days ending at `today`
    pub fn recent_expenses(&self, today: NaiveDate) -> Vec<Expense> {
        self.store
            .expenses()
            .into_iter()
            .filter(|expense| is_within_last_days(expense.date, today, RECENT_WINDOW_DAYS))
            .collect()
    }

    pub fn view(&self, today: NaiveDate) -> RecentExpensesView {
        match self.state.snapshot() {
            ScreenState {
                error: Some(message),
                is_loading: false,
            } => RecentExpensesView::Error(message),
            ScreenState {
                is_loading: true, ..
            } => RecentExpensesView::Loading,
            _ => RecentExpensesView::Output(ExpensesOutputView::build(
                &self.recent_expenses(today),
                RECENT_EXPENSES_PERIOD,
                RECENT_EXPENSES_FALLBACK,
            )),
        }
    }

    pub fn show(&self, ui: &mut egui::Ui, today: NaiveDate) {
        match self.view(today) {
            RecentExpensesView::Error(message) => {
                if show_error_overlay(ui, &message) {
                    self.dismiss_error();
                }
            }
            RecentExpensesView::Loading => show_loading_overlay(ui),
            RecentExpensesView::Output(output) => {
                if let Some(id) = show_expenses_output(ui, &output) {
                    self.navigator.navigate(Route::ManageExpense {
                        expense_id: Some(id),
                    });
                }
            }
        }
    }
}
