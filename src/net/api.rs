//! HTTP client for the remote login endpoint.
//!
//! The endpoint is a single `POST` with a JSON `{username, password}` body.
//! The HTTP status is reported alongside the decoded body rather than mapped
//! to an error: a `401` carrying `{"message": "..."}` is a credential
//! rejection the flow must still read.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderValue};

use super::types::{AuthResult, Credentials, decode_auth_result};
use crate::config::LoginTimeouts;
use crate::error::LoginError;

/// One response from the auth endpoint.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthReply {
    /// Whether the HTTP status was in the 2xx range.
    pub status_ok: bool,
    pub status: u16,
    pub result: AuthResult,
}

/// Remote authentication boundary.
#[async_trait::async_trait]
pub trait AuthEndpoint: Send + Sync {
    /// Send one login request and decode the reply.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::Transport`] when no response arrives and
    /// [`LoginError::Decode`] when the body is not structured data.
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthReply, LoginError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct HttpAuthEndpoint {
    http: reqwest::Client,
    url: String,
}

impl HttpAuthEndpoint {
    /// Build a client for `url` with the given timeouts.
    ///
    /// # Errors
    ///
    /// Returns [`LoginError::ClientBuild`] if the TLS backend fails to initialize.
    pub fn new(url: impl Into<String>, timeouts: LoginTimeouts) -> Result<Self, LoginError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| LoginError::ClientBuild(e.to_string()))?;
        Ok(Self { http, url: url.into() })
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait::async_trait]
impl AuthEndpoint for HttpAuthEndpoint {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthReply, LoginError> {
        let response = self
            .http
            .post(&self.url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(credentials)
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "login endpoint replied");

        Ok(AuthReply { status_ok: status.is_success(), status: status.as_u16(), result: decode_auth_result(&text)? })
    }
}
