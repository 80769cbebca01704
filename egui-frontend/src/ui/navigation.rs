//! # Navigation Module
//!
//! Screen routing for the app.
//!
//! ## Key Types:
//! - `Route` - every screen the app can show
//! - `Navigator` - what screens may ask of navigation (title, back, push)
//! - `StackNavigator` - a push/pop stack with a per-entry title
//!
//! Screens only see `Arc<dyn Navigator>`; the app shell owns the concrete
//! `StackNavigator` and reads the current route from it every frame.

use std::sync::{Mutex, MutexGuard};

use shared::ExpenseId;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    RecentExpenses,
    AllExpenses,
    /// `expense_id` is set when editing, absent when adding
    ManageExpense { expense_id: Option<ExpenseId> },
}

impl Route {
    pub fn default_title(&self) -> &'static str {
        match self {
            Route::RecentExpenses => "Recent Expenses",
            Route::AllExpenses => "All Expenses",
            Route::ManageExpense { .. } => "Manage Expense",
        }
    }

    /// Tab routes sit at the bottom of the stack
    pub fn is_tab(&self) -> bool {
        matches!(self, Route::RecentExpenses | Route::AllExpenses)
    }
}

/// Per-screen header options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenOptions {
    pub title: String,
}

pub trait Navigator: Send + Sync {
    /// Configure the header of the current screen
    fn set_options(&self, options: ScreenOptions);

    /// Pop the current screen
    fn go_back(&self);

    /// Push a new screen
    fn navigate(&self, route: Route);
}

#[derive(Debug)]
struct StackEntry {
    route: Route,
    title: String,
}

impl StackEntry {
    fn new(route: Route) -> Self {
        let title = route.default_title().to_string();
        Self { route, title }
    }
}

#[derive(Debug)]
pub struct StackNavigator {
    stack: Mutex<Vec<StackEntry>>,
}

impl StackNavigator {
    pub fn new(root: Route) -> Self {
        Self {
            stack: Mutex::new(vec![StackEntry::new(root)]),
        }
    }

    pub fn current_route(&self) -> Route {
        self.lock()
            .last()
            .map(|entry| entry.route.clone())
            .unwrap_or(Route::RecentExpenses)
    }

    pub fn current_title(&self) -> String {
        self.lock()
            .last()
            .map(|entry| entry.title.clone())
            .unwrap_or_default()
    }

    pub fn depth(&self) -> usize {
        self.lock().len()
    }

    /// Replace the whole stack with a tab route
    pub fn switch_tab(&self, route: Route) {
        debug!("🧭 Switching tab to {:?}", route);
        *self.lock() = vec![StackEntry::new(route)];
    }

    fn lock(&self) -> MutexGuard<'_, Vec<StackEntry>> {
        self.stack.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Navigator for StackNavigator {
    fn set_options(&self, options: ScreenOptions) {
        if let Some(entry) = self.lock().last_mut() {
            entry.title = options.title;
        }
    }

    fn go_back(&self) {
        let mut stack = self.lock();
        if stack.len() > 1 {
            let popped = stack.pop();
            debug!("🧭 Back from {:?}", popped.map(|entry| entry.route));
        } else {
            warn!("🧭 go_back at the root screen ignored");
        }
    }

    fn navigate(&self, route: Route) {
        debug!("🧭 Navigating to {:?}", route);
        self.lock().push(StackEntry::new(route));
    }
}
