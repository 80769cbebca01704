//! # Screen State Module
//!
//! Loading and error flags for screens that wait on the backend.
//!
//! ## Responsibilities:
//! - `ScreenState` - the plain loading/error pair a screen renders from
//! - `SharedScreenState` - the same pair behind a mutex, plus a single-flight
//!   guard so only one backend request per screen runs at a time
//!
//! The mutex is only ever held for a field update, never across an `.await`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Loading indicator and user-facing error for one screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScreenState {
    /// True exactly while a backend call is outstanding
    pub is_loading: bool,

    /// Static message from the last failed backend call
    pub error: Option<String>,
}

impl ScreenState {
    /// A new attempt starts: show loading, forget the previous failure
    pub fn start_loading(&mut self) {
        self.is_loading = true;
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
    }

    pub fn stop_loading(&mut self) {
        self.is_loading = false;
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}

/// Thread-safe `ScreenState` with a single-flight request guard
#[derive(Debug, Default)]
pub struct SharedScreenState {
    state: Mutex<ScreenState>,
    in_flight: AtomicBool,
}

impl SharedScreenState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the current flags
    pub fn snapshot(&self) -> ScreenState {
        self.lock().clone()
    }

    /// Apply `change` under the lock
    pub fn update(&self, change: impl FnOnce(&mut ScreenState)) {
        change(&mut *self.lock());
    }

    /// Claim the request slot. Returns `None` while another request holds it.
    pub fn try_begin_request(&self) -> Option<RequestGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| RequestGuard {
                in_flight: &self.in_flight,
            })
    }

    pub fn request_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    fn lock(&self) -> MutexGuard<'_, ScreenState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Releases the request slot on drop
#[derive(Debug)]
pub struct RequestGuard<'a> {
    in_flight: &'a AtomicBool,
}

impl Drop for RequestGuard<'_> {
    fn drop(&mut self) {
        self.in_flight.store(false, Ordering::Release);
    }
}
