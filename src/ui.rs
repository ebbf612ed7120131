//! Notification and navigation surfaces consumed by the login flow.
//!
//! ARCHITECTURE
//! ============
//! The flow only sees two narrow traits. A browser build would back them
//! with a toast component and a router; the CLI uses [`ConsoleSurface`], and
//! tests use [`RecordingSurface`].

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotifyOptions {
    pub duration: Duration,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigateOptions {
    /// Replace the current history entry instead of pushing a new one.
    pub replace: bool,
}

/// Transient user-facing notices (toasts).
pub trait Notifier: Send + Sync {
    fn notify(&self, kind: NoticeKind, message: &str, options: NotifyOptions);
}

/// Client-side routing.
pub trait Navigator: Send + Sync {
    fn navigate(&self, destination: &str, options: NavigateOptions);
}

// =============================================================================
// CONSOLE
// =============================================================================

/// Terminal surface: notices go to stderr, navigation is remembered.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    location: Mutex<Option<String>>,
}

impl ConsoleSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The last destination navigated to, if any.
    #[must_use]
    pub fn location(&self) -> Option<String> {
        self.location
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[must_use]
pub fn render_notice(kind: NoticeKind, message: &str) -> String {
    match kind {
        NoticeKind::Success => format!("[ok] {message}"),
        NoticeKind::Error => format!("[error] {message}"),
    }
}

impl Notifier for ConsoleSurface {
    fn notify(&self, kind: NoticeKind, message: &str, _options: NotifyOptions) {
        eprintln!("{}", render_notice(kind, message));
    }
}

impl Navigator for ConsoleSurface {
    fn navigate(&self, destination: &str, options: NavigateOptions) {
        tracing::debug!(destination, replace = options.replace, "navigate");
        *self.location.lock().unwrap_or_else(PoisonError::into_inner) = Some(destination.to_owned());
    }
}

// =============================================================================
// RECORDING
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedNotice {
    pub kind: NoticeKind,
    pub message: String,
    pub options: NotifyOptions,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedNavigation {
    pub destination: String,
    pub options: NavigateOptions,
}

/// Surface that records every call, for assertions.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    notices: Mutex<Vec<RecordedNotice>>,
    navigations: Mutex<Vec<RecordedNavigation>>,
}

impl RecordingSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<RecordedNotice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn navigations(&self) -> Vec<RecordedNavigation> {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingSurface {
    fn notify(&self, kind: NoticeKind, message: &str, options: NotifyOptions) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedNotice { kind, message: message.to_owned(), options });
    }
}

impl Navigator for RecordingSurface {
    fn navigate(&self, destination: &str, options: NavigateOptions) {
        self.navigations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedNavigation { destination: destination.to_owned(), options });
    }
}
