//! Session bootstrap flow: submit credentials, interpret the reply, persist
//! the session, and route the user onward.
//!
//! ARCHITECTURE
//! ============
//! `LoginFlow` owns the pending flag and talks to five collaborators behind
//! traits: the auth endpoint, the session store, the application's session
//! sink, and the notify/navigate surfaces. The decision of what a reply means
//! lives in `evaluate_reply`, which has no I/O.
//!
//! ERROR HANDLING
//! ==============
//! `submit` never fails. Every error is turned into exactly one notice where
//! it happens and reported back as a `LoginOutcome`; nothing is persisted or
//! published unless the reply authenticates.
//!
//! TRADE-OFFS
//! ==========
//! The success test accepts either an explicit `success` or a 2xx status with
//! a user record, because the backend does not report success uniformly. A
//! successful reply that omits the token is stored with the sentinel token
//! unless `require_token` is set.

#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::LoginConfig;
use crate::error::LoginError;
use crate::net::api::{AuthEndpoint, AuthReply};
use crate::net::types::{Credentials, Session, derive_session};
use crate::state::auth::SessionSink;
use crate::state::pending::{PendingFlag, PendingGuard};
use crate::store::{SessionStore, save_session};
use crate::ui::{NavigateOptions, Navigator, NoticeKind, Notifier, NotifyOptions};

pub const SUCCESS_MESSAGE: &str = "Login Successful!";
pub const DEFAULT_FAILURE_MESSAGE: &str = "Login Failed!";
pub const CONNECTIVITY_FAILURE_MESSAGE: &str = "Failed to connect to the server.";
pub const MISSING_TOKEN_MESSAGE: &str = "Login response did not include a session token.";

/// How a single `submit` ended.
#[derive(Clone, Debug, PartialEq)]
pub enum LoginOutcome {
    /// Another submit was already in flight; nothing happened.
    Busy,
    /// Session persisted, published, and the user was routed onward.
    Authenticated(Session),
    /// Endpoint answered but did not authenticate.
    Rejected { message: String },
    /// Authenticated without a token while tokens are required.
    MissingToken,
    /// No usable reply (transport, decode, or persistence failure).
    Failed,
}

impl LoginOutcome {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// What a decoded reply means, before any side effects.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplyVerdict {
    Authenticated(Session),
    MissingToken,
    Rejected { message: String },
}

/// Whether `reply` counts as a successful login.
#[must_use]
pub fn is_authenticated(reply: &AuthReply) -> bool {
    reply.result.success || (reply.status_ok && reply.result.user.is_some())
}

/// Classify `reply` for a login attempt by `username`.
#[must_use]
pub fn evaluate_reply(reply: &AuthReply, username: &str, require_token: bool) -> ReplyVerdict {
    if !is_authenticated(reply) {
        let message = reply
            .result
            .message
            .clone()
            .unwrap_or_else(|| DEFAULT_FAILURE_MESSAGE.to_owned());
        return ReplyVerdict::Rejected { message };
    }
    if require_token && reply.result.jwt.is_none() {
        return ReplyVerdict::MissingToken;
    }
    ReplyVerdict::Authenticated(derive_session(&reply.result, username))
}

/// Flow knobs taken from [`LoginConfig`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlowSettings {
    pub landing_route: String,
    pub notice_duration: Duration,
    pub require_token: bool,
}

impl Default for FlowSettings {
    fn default() -> Self {
        Self::from(&LoginConfig::default())
    }
}

impl From<&LoginConfig> for FlowSettings {
    fn from(config: &LoginConfig) -> Self {
        Self {
            landing_route: config.landing_route.clone(),
            notice_duration: config.notice_duration,
            require_token: config.require_token,
        }
    }
}

// =============================================================================
// FLOW
// =============================================================================

/// One login form's submit pipeline. Clones share the pending flag and
/// collaborators.
#[derive(Clone)]
pub struct LoginFlow {
    endpoint: Arc<dyn AuthEndpoint>,
    store: Arc<dyn SessionStore>,
    sink: Arc<dyn SessionSink>,
    notifier: Arc<dyn Notifier>,
    navigator: Arc<dyn Navigator>,
    pending: PendingFlag,
    settings: FlowSettings,
}

impl LoginFlow {
    #[must_use]
    pub fn new(
        endpoint: Arc<dyn AuthEndpoint>,
        store: Arc<dyn SessionStore>,
        sink: Arc<dyn SessionSink>,
        notifier: Arc<dyn Notifier>,
        navigator: Arc<dyn Navigator>,
        settings: FlowSettings,
    ) -> Self {
        Self { endpoint, store, sink, notifier, navigator, pending: PendingFlag::new(), settings }
    }

    /// The pending flag, for disabling the submit control.
    #[must_use]
    pub fn pending(&self) -> &PendingFlag {
        &self.pending
    }

    #[must_use]
    pub fn settings(&self) -> &FlowSettings {
        &self.settings
    }

    /// Run one login attempt to completion.
    ///
    /// Returns [`LoginOutcome::Busy`] without side effects if an attempt is
    /// already in flight. The pending flag is set for the duration of the
    /// attempt and cleared before this returns.
    pub async fn submit(&self, credentials: Credentials) -> LoginOutcome {
        let Some(pending) = self.pending.try_acquire() else {
            tracing::debug!("login already in flight; submit ignored");
            return LoginOutcome::Busy;
        };
        self.run(pending, credentials).await
    }

    /// Run a login attempt on a tokio task tied to the returned handle.
    ///
    /// The pending flag is taken before this returns. Dropping or aborting
    /// the handle cancels the request and clears the flag.
    #[must_use]
    pub fn spawn(&self, credentials: Credentials) -> SubmitTask {
        let pending = self.pending.try_acquire();
        let flow = self.clone();
        let handle = tokio::spawn(async move {
            match pending {
                Some(pending) => flow.run(pending, credentials).await,
                None => LoginOutcome::Busy,
            }
        });
        SubmitTask { handle }
    }

    async fn run(&self, _pending: PendingGuard, credentials: Credentials) -> LoginOutcome {
        let reply = match self.endpoint.authenticate(&credentials).await {
            Ok(reply) => reply,
            Err(e) => return self.fail(&e),
        };

        match evaluate_reply(&reply, &credentials.username, self.settings.require_token) {
            ReplyVerdict::Authenticated(session) => {
                if let Err(e) = save_session(self.store.as_ref(), &session) {
                    return self.fail(&LoginError::from(e));
                }
                self.sink.publish(&session);
                tracing::info!(username = %credentials.username, status = reply.status, "login succeeded");
                self.notify(NoticeKind::Success, SUCCESS_MESSAGE);
                self.navigator
                    .navigate(&self.settings.landing_route, NavigateOptions { replace: true });
                LoginOutcome::Authenticated(session)
            }
            ReplyVerdict::MissingToken => {
                tracing::warn!(username = %credentials.username, "login reply authenticated without a token");
                self.notify(NoticeKind::Error, MISSING_TOKEN_MESSAGE);
                LoginOutcome::MissingToken
            }
            ReplyVerdict::Rejected { message } => {
                tracing::info!(username = %credentials.username, status = reply.status, "login rejected");
                self.notify(NoticeKind::Error, &message);
                LoginOutcome::Rejected { message }
            }
        }
    }

    fn fail(&self, error: &LoginError) -> LoginOutcome {
        tracing::error!(error = %error, "login error");
        self.notify(NoticeKind::Error, CONNECTIVITY_FAILURE_MESSAGE);
        LoginOutcome::Failed
    }

    fn notify(&self, kind: NoticeKind, message: &str) {
        self.notifier
            .notify(kind, message, NotifyOptions { duration: self.settings.notice_duration });
    }
}

/// Handle to a spawned login attempt. Dropping it cancels the attempt.
#[derive(Debug)]
pub struct SubmitTask {
    handle: JoinHandle<LoginOutcome>,
}

impl SubmitTask {
    /// Cancel the attempt if it has not finished.
    pub fn abort(&self) {
        self.handle.abort();
    }

    /// Wait for the outcome. Returns `None` if the attempt was cancelled.
    pub async fn join(mut self) -> Option<LoginOutcome> {
        (&mut self.handle).await.ok()
    }
}

impl Drop for SubmitTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
