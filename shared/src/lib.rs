use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

pub mod date_utils;

/// Backend-assigned expense identifier (a Firebase push key in practice)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(String);

impl ExpenseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ExpenseId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// The user-editable part of an expense. This is what the expense form emits
/// and what the backend accepts for create and update calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseData {
    /// Calendar date, written as YYYY-MM-DD. RFC 3339 timestamps are accepted on read.
    #[serde(with = "date_utils::flexible_date")]
    pub date: NaiveDate,
    /// Positive currency amount
    pub amount: f64,
    /// Non-empty free text
    pub description: String,
}

/// A persisted expense record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    pub id: ExpenseId,
    #[serde(with = "date_utils::flexible_date")]
    pub date: NaiveDate,
    pub amount: f64,
    pub description: String,
}

impl Expense {
    /// Attach a backend id to freshly submitted data
    pub fn from_data(id: ExpenseId, data: ExpenseData) -> Self {
        Self {
            id,
            date: data.date,
            amount: data.amount,
            description: data.description,
        }
    }

    /// Copy out the editable fields
    pub fn data(&self) -> ExpenseData {
        ExpenseData {
            date: self.date,
            amount: self.amount,
            description: self.description.clone(),
        }
    }

    /// Overwrite the editable fields, keeping the id
    pub fn apply(&mut self, data: ExpenseData) {
        self.date = data.date;
        self.amount = data.amount;
        self.description = data.description;
    }
}

/// Response body of `POST /expenses.json`; `name` is the generated key
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseResponse {
    pub name: String,
}

/// Currency label shown next to amounts
pub const CURRENCY_LABEL: &str = "RM";

/// Format an amount for list and summary display, e.g. `RM12.50`
pub fn format_amount(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_LABEL, amount)
}

/// Sum of all expense amounts
pub fn total_amount(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}
