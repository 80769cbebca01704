//! Shared fakes for screen tests.
//!
//! Store, backend and navigator fakes all append to one `CallLog`, so tests
//! can assert the relative order of store mutations, backend calls and
//! navigation.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::NaiveDate;
use shared::{Expense, ExpenseData, ExpenseId};
use tokio::sync::Notify;

use crate::backend::{BackendError, ExpenseBackend};
use crate::ui::navigation::{Navigator, Route, ScreenOptions};
use crate::ui::state::{ExpensesStore, InMemoryExpensesStore};

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

pub fn expense_data(description: &str, amount: f64) -> ExpenseData {
    ExpenseData {
        date: test_date(),
        amount,
        description: description.to_string(),
    }
}

pub fn expense(id: &str, description: &str, amount: f64) -> Expense {
    Expense::from_data(ExpenseId::new(id), expense_data(description, amount))
}

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    BackendStore(ExpenseData),
    BackendUpdate(ExpenseId, ExpenseData),
    BackendDelete(ExpenseId),
    BackendFetch,
    StoreAdd(Expense),
    StoreSet(usize),
    StoreUpdate(ExpenseId, ExpenseData),
    StoreDelete(ExpenseId),
    SetTitle(String),
    GoBack,
    Navigate(Route),
}

#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn position(&self, matches: impl Fn(&Call) -> bool) -> Option<usize> {
        self.calls().iter().position(matches)
    }

    pub fn contains(&self, matches: impl Fn(&Call) -> bool) -> bool {
        self.position(matches).is_some()
    }
}

/// In-memory store that records every mutation
pub struct RecordingStore {
    inner: InMemoryExpensesStore,
    log: CallLog,
}

impl RecordingStore {
    pub fn new(log: CallLog, expenses: Vec<Expense>) -> Self {
        Self {
            inner: InMemoryExpensesStore::with_expenses(expenses),
            log,
        }
    }
}

impl ExpensesStore for RecordingStore {
    fn expenses(&self) -> Vec<Expense> {
        self.inner.expenses()
    }

    fn add_expense(&self, expense: Expense) {
        self.log.push(Call::StoreAdd(expense.clone()));
        self.inner.add_expense(expense);
    }

    fn set_expenses(&self, expenses: Vec<Expense>) {
        self.log.push(Call::StoreSet(expenses.len()));
        self.inner.set_expenses(expenses);
    }

    fn update_expense(&self, id: &ExpenseId, data: ExpenseData) {
        self.log.push(Call::StoreUpdate(id.clone(), data.clone()));
        self.inner.update_expense(id, data);
    }

    fn delete_expense(&self, id: &ExpenseId) {
        self.log.push(Call::StoreDelete(id.clone()));
        self.inner.delete_expense(id);
    }

    fn find_expense(&self, id: &ExpenseId) -> Option<Expense> {
        self.inner.find_expense(id)
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Failures {
    store: bool,
    update: bool,
    delete: bool,
    fetch: bool,
}

/// Scriptable backend. Optionally pauses inside every call until released.
pub struct FakeBackend {
    log: CallLog,
    assigned_id: String,
    failures: Failures,
    fetch_result: Vec<Expense>,
    entered: Arc<Notify>,
    release: Option<Arc<Notify>>,
}

impl FakeBackend {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            assigned_id: "-Nnew".to_string(),
            failures: Failures::default(),
            fetch_result: Vec::new(),
            entered: Arc::new(Notify::new()),
            release: None,
        }
    }

    pub fn with_assigned_id(mut self, id: &str) -> Self {
        self.assigned_id = id.to_string();
        self
    }

    pub fn with_fetch_result(mut self, expenses: Vec<Expense>) -> Self {
        self.fetch_result = expenses;
        self
    }

    pub fn failing_store(mut self) -> Self {
        self.failures.store = true;
        self
    }

    pub fn failing_update(mut self) -> Self {
        self.failures.update = true;
        self
    }

    pub fn failing_delete(mut self) -> Self {
        self.failures.delete = true;
        self
    }

    pub fn failing_fetch(mut self) -> Self {
        self.failures.fetch = true;
        self
    }

    /// Every call waits for `release().notify_one()` before resolving
    pub fn gated(mut self) -> Self {
        self.release = Some(Arc::new(Notify::new()));
        self
    }

    /// Notified each time a call starts
    pub fn entered(&self) -> Arc<Notify> {
        Arc::clone(&self.entered)
    }

    pub fn release(&self) -> Arc<Notify> {
        Arc::clone(self.release.as_ref().expect("backend is not gated"))
    }

    async fn pause(&self) {
        self.entered.notify_one();
        if let Some(release) = &self.release {
            release.notified().await;
        }
    }

    fn outcome(failed: bool) -> Result<(), BackendError> {
        if failed {
            Err(BackendError::Status {
                status: 500,
                body: "boom".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl ExpenseBackend for FakeBackend {
    async fn store_expense(&self, data: &ExpenseData) -> Result<ExpenseId, BackendError> {
        self.log.push(Call::BackendStore(data.clone()));
        self.pause().await;
        Self::outcome(self.failures.store)?;
        Ok(ExpenseId::new(self.assigned_id.clone()))
    }

    async fn update_expense(&self, id: &ExpenseId, data: &ExpenseData) -> Result<(), BackendError> {
        self.log.push(Call::BackendUpdate(id.clone(), data.clone()));
        self.pause().await;
        Self::outcome(self.failures.update)
    }

    async fn delete_expense(&self, id: &ExpenseId) -> Result<(), BackendError> {
        self.log.push(Call::BackendDelete(id.clone()));
        self.pause().await;
        Self::outcome(self.failures.delete)
    }

    async fn fetch_expenses(&self) -> Result<Vec<Expense>, BackendError> {
        self.log.push(Call::BackendFetch);
        self.pause().await;
        Self::outcome(self.failures.fetch)?;
        Ok(self.fetch_result.clone())
    }
}

pub struct RecordingNavigator {
    log: CallLog,
}

impl RecordingNavigator {
    pub fn new(log: CallLog) -> Self {
        Self { log }
    }
}

impl Navigator for RecordingNavigator {
    fn set_options(&self, options: ScreenOptions) {
        self.log.push(Call::SetTitle(options.title));
    }

    fn go_back(&self) {
        self.log.push(Call::GoBack);
    }

    fn navigate(&self, route: Route) {
        self.log.push(Call::Navigate(route));
    }
}
