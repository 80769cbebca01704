//! # Screens Module
//!
//! Top-level screens reachable through `Route`.
//!
//! ## Module Organization:
//! - `all_expenses` - everything in the store
//! - `recent_expenses` - last seven days, refreshed from the backend
//! - `manage_expense` - add, edit or delete one expense
//! - `manage_expense_page` - egui wrapper that runs `manage_expense` handlers off the UI thread

pub mod all_expenses;
pub mod manage_expense;
pub mod manage_expense_page;
pub mod recent_expenses;

pub use all_expenses::AllExpenses;
pub use manage_expense::{ManageExpense, ManageExpenseView};
pub use manage_expense_page::ManageExpensePage;
pub use recent_expenses::{RecentExpenses, RecentExpensesView};

/// How an async screen handler ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    Completed,
    /// The backend call failed; the screen now shows an error
    Failed,
    /// Nothing was done (another request in flight, or nothing to act on)
    Skipped,
}
