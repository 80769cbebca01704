//! # Expenses Store
//!
//! The app-wide cache of expenses that every screen reads from.
//!
//! ## Key Types:
//! - `ExpensesStore` - synchronous, in-memory capability set handed to screens
//! - `InMemoryExpensesStore` - the `RwLock<Vec<Expense>>` implementation the app uses
//!
//! ## Ordering:
//! The list is kept newest first: `add_expense` prepends.

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use shared::{Expense, ExpenseData, ExpenseId};
use tracing::{debug, warn};

/// Shared expenses cache. Mutations never fail; unknown ids are ignored.
pub trait ExpensesStore: Send + Sync {
    /// Snapshot of all expenses, newest first
    fn expenses(&self) -> Vec<Expense>;

    /// Insert a new expense at the front
    fn add_expense(&self, expense: Expense);

    /// Replace the entire contents, e.g. after a fetch
    fn set_expenses(&self, expenses: Vec<Expense>);

    /// Overwrite the editable fields of the expense with `id`
    fn update_expense(&self, id: &ExpenseId, data: ExpenseData);

    /// Remove the expense with `id`
    fn delete_expense(&self, id: &ExpenseId);

    fn find_expense(&self, id: &ExpenseId) -> Option<Expense> {
        self.expenses().into_iter().find(|expense| &expense.id == id)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryExpensesStore {
    expenses: RwLock<Vec<Expense>>,
}

impl InMemoryExpensesStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            expenses: RwLock::new(expenses),
        }
    }

    // A panicking writer cannot leave the Vec half-mutated, so poisoned locks are recovered.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Expense>> {
        self.expenses.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Expense>> {
        self.expenses.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ExpensesStore for InMemoryExpensesStore {
    fn expenses(&self) -> Vec<Expense> {
        self.read().clone()
    }

    fn add_expense(&self, expense: Expense) {
        debug!("Store: adding expense {}", expense.id);
        self.write().insert(0, expense);
    }

    fn set_expenses(&self, expenses: Vec<Expense>) {
        debug!("Store: replacing contents with {} expenses", expenses.len());
        *self.write() = expenses;
    }

    fn update_expense(&self, id: &ExpenseId, data: ExpenseData) {
        let mut expenses = self.write();
        match expenses.iter_mut().find(|expense| &expense.id == id) {
            Some(expense) => {
                debug!("Store: updating expense {}", id);
                expense.apply(data);
            }
            None => warn!("Store: update for unknown expense {}", id),
        }
    }

    fn delete_expense(&self, id: &ExpenseId) {
        let mut expenses = self.write();
        let before = expenses.len();
        expenses.retain(|expense| &expense.id != id);
        if expenses.len() == before {
            warn!("Store: delete for unknown expense {}", id);
        }
    }

    fn find_expense(&self, id: &ExpenseId) -> Option<Expense> {
        self.read().iter().find(|expense| &expense.id == id).cloned()
    }
}
