//! Error types for the login flow and its collaborators.
//!
//! ERROR HANDLING
//! ==============
//! These errors never reach the user as faults. `LoginFlow::submit` catches
//! every `LoginError` at the point of origin and turns it into a notice, so
//! the enums exist for the collaborators (endpoint, store, config) and for
//! logging.

/// Failures talking to the remote auth endpoint or persisting its result.
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// The request could not be sent or the response could not be read
    /// (unreachable host, TLS failure, timeout).
    #[error("auth request failed: {0}")]
    Transport(String),

    /// The response body was not structured data the flow can interpret.
    #[error("auth response decode failed: {0}")]
    Decode(String),

    /// The session could not be written to the session store.
    #[error("session store failed: {0}")]
    Store(#[from] StoreError),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    ClientBuild(String),
}

/// Failures reading or writing the session store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("session store io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("session store encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid login configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A configuration value could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// The login URL is not an http(s) URL.
    #[error("invalid login URL: {0}")]
    InvalidUrl(String),
}
