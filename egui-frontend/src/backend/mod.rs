//! # Backend Module
//!
//! This module defines the seam between the screens and the remote expense
//! store.
//!
//! ## Key Types:
//! - `ExpenseBackend` - async trait the screens call for create/update/delete/fetch
//! - `BackendError` - every way a backend call can fail
//! - `HttpExpenseBackend` - Firebase-style REST implementation (see `http`)
//!
//! ## Purpose:
//! Screens only ever hold an `Arc<dyn ExpenseBackend>`, so tests can swap in
//! recording fakes and the app can point at any server speaking the same REST
//! shape.

use async_trait::async_trait;
use shared::{Expense, ExpenseData, ExpenseId};
use thiserror::Error;

pub mod http;

pub use http::HttpExpenseBackend;

/// Failures surfaced by an `ExpenseBackend`
#[derive(Debug, Error)]
pub enum BackendError {
    /// The request never produced a response (DNS, connect, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status
    #[error("Server error {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body was not what we expected
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for BackendError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            BackendError::Decode(error.to_string())
        } else {
            BackendError::Network(error.to_string())
        }
    }
}

/// Remote persistence for expenses.
///
/// All calls are asynchronous and may fail; callers decide how failures are
/// presented.
#[async_trait]
pub trait ExpenseBackend: Send + Sync {
    /// Persist a new expense and return the id the backend assigned to it
    async fn store_expense(&self, data: &ExpenseData) -> Result<ExpenseId, BackendError>;

    /// Overwrite an existing expense
    async fn update_expense(&self, id: &ExpenseId, data: &ExpenseData) -> Result<(), BackendError>;

    /// Remove an expense
    async fn delete_expense(&self, id: &ExpenseId) -> Result<(), BackendError>;

    /// Load every stored expense
    async fn fetch_expenses(&self) -> Result<Vec<Expense>, BackendError>;
}
