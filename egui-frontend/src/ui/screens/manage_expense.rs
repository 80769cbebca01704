//! # Manage Expense Screen
//!
//! Adds, edits and deletes a single expense.
//!
//! ## Responsibilities:
//! - Pick add or edit mode from the route's optional expense id
//! - Set the header title as soon as the screen is mounted
//! - Push validated form data to the backend and the shared store
//! - Turn every backend failure into one static message per operation
//! - Pop the screen after a successful edit or delete
//!
//! ## Ordering:
//! Edits update the store first and then call the backend, so the list
//! reflects the change immediately. Creates call the backend first because
//! the id only exists once the backend has assigned it. A failed edit keeps
//! the optimistic value unless `rollback_failed_updates` is set.
//!
//! ## Concurrency:
//! Handlers take `&self` so the screen can be shared as `Arc<ManageExpense>`
//! with spawned tasks. Only one backend request runs at a time; a second
//! `confirm` or `delete` while one is in flight returns `ActionOutcome::Skipped`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use shared::{Expense, ExpenseData, ExpenseId};
use tracing::{error, info, warn};

use super::ActionOutcome;
use crate::backend::{BackendError, ExpenseBackend};
use crate::config::ManageExpenseConfig;
use crate::ui::components::ExpenseFormProps;
use crate::ui::navigation::{Navigator, ScreenOptions};
use crate::ui::state::{ExpensesStore, ScreenState, SharedScreenState};

pub const DELETE_ERROR_MESSAGE: &str =
    "An error occurred while deleting this expenses! Please try again later.";
pub const SAVE_ERROR_MESSAGE: &str =
    "An error occurred while saving this expenses! Please try again later.";

/// What the screen should render right now
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManageExpenseView {
    Error(String),
    Loading,
    Form { show_delete: bool },
}

pub struct ManageExpense {
    edited_expense_id: Option<ExpenseId>,
    store: Arc<dyn ExpensesStore>,
    backend: Arc<dyn ExpenseBackend>,
    navigator: Arc<dyn Navigator>,
    config: ManageExpenseConfig,
    state: SharedScreenState,
    /// Bumped each time a backend request settles
    settled_requests: AtomicU64,
}

impl ManageExpense {
    /// Create the screen and set its title before the first frame
    pub fn mount(
        edited_expense_id: Option<ExpenseId>,
        store: Arc<dyn ExpensesStore>,
        backend: Arc<dyn ExpenseBackend>,
        navigator: Arc<dyn Navigator>,
        config: ManageExpenseConfig,
    ) -> Self {
        let screen = Self {
            edited_expense_id,
            store,
            backend,
            navigator,
            config,
            state: SharedScreenState::new(),
            settled_requests: AtomicU64::new(0),
        };

        let title = if screen.is_editing() {
            "Edit Expense"
        } else {
            "Add New Expense"
        };
        screen.navigator.set_options(ScreenOptions {
            title: title.to_string(),
        });

        screen
    }

    pub fn is_editing(&self) -> bool {
        self.edited_expense_id.is_some()
    }

    pub fn edited_expense_id(&self) -> Option<&ExpenseId> {
        self.edited_expense_id.as_ref()
    }

    /// The expense being edited, if it is in the store
    pub fn selected_expense(&self) -> Option<Expense> {
        self.edited_expense_id
            .as_ref()
            .and_then(|id| self.store.find_expense(id))
    }

    /// Props for the embedded expense form
    pub fn form_props(&self) -> ExpenseFormProps {
        let (form_title, submit_button_label) = if self.is_editing() {
            ("Edit Your Expense", "Update")
        } else {
            ("Add A New Expense", "Add")
        };

        ExpenseFormProps {
            form_title: form_title.to_string(),
            submit_button_label: submit_button_label.to_string(),
            default_values: self.selected_expense().map(|expense| expense.data()),
        }
    }

    pub fn screen_state(&self) -> ScreenState {
        self.state.snapshot()
    }

    pub fn is_loading(&self) -> bool {
        self.state.snapshot().is_loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.snapshot().error
    }

    /// How many `confirm`/`delete` requests have finished, successful or not.
    /// The form must be rebuilt from fresh props whenever this changes.
    pub fn settled_requests(&self) -> u64 {
        self.settled_requests.load(Ordering::Acquire)
    }

    /// Error first (unless a retry is loading), then loading, then the form
    pub fn view(&self) -> ManageExpenseView {
        match self.state.snapshot() {
            ScreenState {
                error: Some(message),
                is_loading: false,
            } => ManageExpenseView::Error(message),
            ScreenState {
                is_loading: true, ..
            } => ManageExpenseView::Loading,
            _ => ManageExpenseView::Form {
                show_delete: self.is_editing(),
            },
        }
    }

    pub fn cancel(&self) {
        self.navigator.go_back();
    }

    /// Acknowledge the error so the form is shown again
    pub fn dismiss_error(&self) {
        self.state.update(ScreenState::clear_error);
    }

    /// Delete the edited expense remotely, then locally, then leave the screen
    pub async fn delete(&self) -> ActionOutcome {
        let Some(id) = self.edited_expense_id.clone() else {
            warn!("🗑️ Delete requested while adding a new expense, ignoring");
            return ActionOutcome::Skipped;
        };
        let Some(_request) = self.state.try_begin_request() else {
            warn!("⏳ Delete ignored: another request is still running");
            return ActionOutcome::Skipped;
        };

        self.state.update(ScreenState::start_loading);
        info!("🗑️ Deleting expense {}", id);

        let result = self.backend.delete_expense(&id).await.map(|()| {
            self.store.delete_expense(&id);
            self.navigator.go_back();
        });

        self.settle(result, DELETE_ERROR_MESSAGE, "delete")
    }

    /// Save data submitted by the expense form
    pub async fn confirm(&self, expense_data: ExpenseData) -> ActionOutcome {
        let Some(_request) = self.state.try_begin_request() else {
            warn!("⏳ Save ignored: another request is still running");
            return ActionOutcome::Skipped;
        };

        self.state.update(ScreenState::start_loading);

        let result = match &self.edited_expense_id {
            Some(id) => self.update_expense(id, expense_data).await,
            None => self.create_expense(expense_data).await,
        };

        self.settle(result, SAVE_ERROR_MESSAGE, "save")
    }

    async fn update_expense(&self, id: &ExpenseId, data: ExpenseData) -> Result<(), BackendError> {
        info!("✏️ Updating expense {}", id);
        let previous = self.selected_expense();

        // Optimistic: the store changes before the backend has confirmed
        self.store.update_expense(id, data.clone());

        if let Err(e) = self.backend.update_expense(id, &data).await {
            if self.config.rollback_failed_updates {
                if let Some(previous) = previous {
                    warn!("↩️ Rolling back expense {} after failed update", id);
                    self.store.update_expense(id, previous.data());
                }
            }
            return Err(e);
        }

        self.navigator.go_back();
        Ok(())
    }

    async fn create_expense(&self, data: ExpenseData) -> Result<(), BackendError> {
        info!("💰 Creating expense: {}", data.description);
        let id = self.backend.store_expense(&data).await?;
        self.store.add_expense(Expense::from_data(id, data));
        Ok(())
    }

    fn settle(
        &self,
        result: Result<(), BackendError>,
        message: &str,
        action: &str,
    ) -> ActionOutcome {
        // Counted before loading ends so no frame shows the stale form
        self.settled_requests.fetch_add(1, Ordering::AcqRel);
        match result {
            Ok(()) => {
                self.state.update(ScreenState::stop_loading);
                info!("✅ Expense {} completed", action);
                ActionOutcome::Completed
            }
            Err(e) => {
                error!("❌ Failed to {} expense: {}", action, e);
                self.state.update(|state| {
                    state.set_error(message);
                    state.stop_loading();
                });
                ActionOutcome::Failed
            }
        }
    }
}
