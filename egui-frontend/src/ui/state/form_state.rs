//! # Form State Module
//!
//! Field-level state and validation for the expense form.
//!
//! ## Key Types:
//! - `FieldId` - which of the three inputs an edit targets
//! - `FieldState` - raw text plus a validity flag
//! - `ExpenseInputs` - immutable snapshot of all three fields
//! - `ExpenseCandidate` - the typed record built from the raw text at submit time
//! - `ValidationReport` - per-field verdict for a candidate
//!
//! ## State Transitions:
//! Every transition returns a new `ExpenseInputs`; nothing is mutated in place.
//! Editing a field marks it valid again. Validity is only recomputed on submit.

use chrono::NaiveDate;
use shared::date_utils::{format_for_display, parse_date_input};
use shared::ExpenseData;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Date,
    Amount,
    Description,
}

/// One input's text and whether the last submit accepted it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub is_valid: bool,
}

impl FieldState {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            is_valid: true,
        }
    }

    fn with_validity(&self, is_valid: bool) -> Self {
        Self {
            value: self.value.clone(),
            is_valid,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseInputs {
    pub date: FieldState,
    pub amount: FieldState,
    pub description: FieldState,
}

impl ExpenseInputs {
    /// Blank fields for creating a new expense
    pub fn empty() -> Self {
        Self {
            date: FieldState::new(""),
            amount: FieldState::new(""),
            description: FieldState::new(""),
        }
    }

    /// Fields seeded from an existing expense; the amount is shown with two decimals
    pub fn from_defaults(defaults: &ExpenseData) -> Self {
        Self {
            date: FieldState::new(format_for_display(defaults.date)),
            amount: FieldState::new(format!("{:.2}", defaults.amount)),
            description: FieldState::new(defaults.description.clone()),
        }
    }

    pub fn field(&self, id: FieldId) -> &FieldState {
        match id {
            FieldId::Date => &self.date,
            FieldId::Amount => &self.amount,
            FieldId::Description => &self.description,
        }
    }

    /// Replace one field's text and clear its invalid flag
    pub fn with_value(&self, id: FieldId, value: impl Into<String>) -> Self {
        let mut next = self.clone();
        let field = FieldState::new(value);
        match id {
            FieldId::Date => next.date = field,
            FieldId::Amount => next.amount = field,
            FieldId::Description => next.description = field,
        }
        next
    }

    /// Keep the text, take validity from `report`
    pub fn with_validity(&self, report: ValidationReport) -> Self {
        Self {
            date: self.date.with_validity(report.date_is_valid),
            amount: self.amount.with_validity(report.amount_is_valid),
            description: self.description.with_validity(report.description_is_valid),
        }
    }

    /// True when at least one field is flagged invalid
    pub fn has_error(&self) -> bool {
        !self.date.is_valid || !self.amount.is_valid || !self.description.is_valid
    }

    /// Build the typed record from the current text
    pub fn candidate(&self) -> ExpenseCandidate {
        ExpenseCandidate {
            date: parse_date_input(&self.date.value),
            amount: coerce_amount(&self.amount.value),
            description: self.description.value.clone(),
        }
    }
}

/// Numeric coercion of amount text. Empty or non-numeric text yields NaN.
pub fn coerce_amount(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(f64::NAN)
}

/// Typed record before validation. `date` is `None` when the text did not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseCandidate {
    pub date: Option<NaiveDate>,
    pub amount: f64,
    pub description: String,
}

impl ExpenseCandidate {
    pub fn validate(&self) -> ValidationReport {
        ValidationReport {
            date_is_valid: self.date.is_some(),
            amount_is_valid: self.amount.is_finite() && self.amount > 0.0,
            description_is_valid: !self.description.trim().is_empty(),
        }
    }

    /// The validated record with a trimmed description, or `None` if any field fails
    pub fn into_expense_data(self) -> Option<ExpenseData> {
        if !self.validate().all_valid() {
            return None;
        }

        Some(ExpenseData {
            date: self.date?,
            amount: self.amount,
            description: self.description.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationReport {
    pub date_is_valid: bool,
    pub amount_is_valid: bool,
    pub description_is_valid: bool,
}

impl ValidationReport {
    pub fn all_valid(&self) -> bool {
        self.date_is_valid && self.amount_is_valid && self.description_is_valid
    }
}
