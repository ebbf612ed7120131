//! Auth-session state for the surrounding application.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow publishes a fresh session here once authentication
//! succeeds. Route guards and user-aware components read it afterwards.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::{Arc, PoisonError, RwLock};

use serde_json::Value;

use crate::net::types::Session;

/// Authenticated identity as seen by the rest of the application.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<Value>,
    pub jwt: Option<String>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.jwt.is_some()
    }
}

/// Receives a newly created session.
pub trait SessionSink: Send + Sync {
    /// Replace the current identity with `session`, user and token together.
    fn publish(&self, session: &Session);
}

/// Shared, lock-protected [`AuthState`]. Clones observe the same state.
#[derive(Clone, Debug, Default)]
pub struct SharedAuthState {
    inner: Arc<RwLock<AuthState>>,
}

impl SharedAuthState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore state from a previously persisted session.
    #[must_use]
    pub fn from_session(session: Option<&Session>) -> Self {
        let state = Self::new();
        if let Some(session) = session {
            state.publish(session);
        }
        state
    }

    #[must_use]
    pub fn snapshot(&self) -> AuthState {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Forget the current identity.
    pub fn clear(&self) {
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = AuthState::default();
    }
}

impl SessionSink for SharedAuthState {
    fn publish(&self, session: &Session) {
        let mut state = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *state = AuthState { user: Some(session.user.clone()), jwt: Some(session.jwt.clone()) };
    }
}
