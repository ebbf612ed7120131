//! In-flight request flag for the login form.
//!
//! The flag is acquired as a guard and released when the guard drops, which
//! covers success, handled failure, and the submit future being dropped or
//! aborted mid-request.

#[cfg(test)]
#[path = "pending_test.rs"]
mod pending_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared "a request is pending" flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct PendingFlag {
    inner: Arc<AtomicBool>,
}

impl PendingFlag {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a request is currently in flight. Drives the disabled submit
    /// control and the loading indicator.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.inner.load(Ordering::Acquire)
    }

    /// Mark a request as pending, or return `None` if one already is.
    #[must_use]
    pub fn try_acquire(&self) -> Option<PendingGuard> {
        self.inner
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| PendingGuard { flag: Arc::clone(&self.inner) })
    }
}

/// Holds the pending flag set; clears it on drop.
#[derive(Debug)]
pub struct PendingGuard {
    flag: Arc<AtomicBool>,
}

impl Drop for PendingGuard {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
