//! # State Module
//!
//! Headless state shared by the screens and components.
//!
//! ## Module Organization:
//! - `expenses_store` - the app-wide expenses cache
//! - `form_state` - expense form fields and validation
//! - `screen_state` - loading/error flags for screens that talk to the backend

pub mod expenses_store;
pub mod form_state;
pub mod screen_state;

pub use expenses_store::{ExpensesStore, InMemoryExpensesStore};
pub use form_state::{ExpenseCandidate, ExpenseInputs, FieldId, FieldState, ValidationReport};
pub use screen_state::{RequestGuard, ScreenState, SharedScreenState};
