//! Wire DTOs for the login endpoint and the derived session record.
//!
//! DESIGN
//! ======
//! The login backend does not enforce a uniform response contract, so every
//! `AuthResult` field is optional and decoded leniently: a field counts as
//! present only when its JSON value is truthy. Anything that is not a JSON
//! object yields an all-absent result rather than an error, except `null`
//! and undecodable bodies, which the flow treats as connectivity failures.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::LoginError;

/// Placeholder token stored when the server authenticates without one.
pub const SENTINEL_TOKEN: &str = "default-token";

/// Username/password pair typed into the login form.
///
/// Transient: sent once with the login request and never persisted.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Decoded login response. All fields are optional and untrusted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthResult {
    /// Whether the body declared success (truthy `success`).
    pub success: bool,
    /// Server-supplied user record, when truthy.
    pub user: Option<Value>,
    /// Session token, when a non-empty string.
    pub jwt: Option<String>,
    /// Human-readable server message, when a non-empty string.
    pub message: Option<String>,
}

impl AuthResult {
    /// Interpret an already-parsed JSON body.
    ///
    /// Returns `None` for JSON `null`, which has no properties to read.
    #[must_use]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Null => None,
            Value::Object(map) => Some(Self {
                success: map.get("success").is_some_and(is_truthy),
                user: map.get("user").filter(|v| is_truthy(v)).cloned(),
                jwt: non_empty_str(map.get("jwt")),
                message: non_empty_str(map.get("message")),
            }),
            _ => Some(Self::default()),
        }
    }
}

/// Decode a raw response body into an [`AuthResult`].
///
/// # Errors
///
/// Returns [`LoginError::Decode`] if the body is not JSON or is JSON `null`.
pub fn decode_auth_result(body: &str) -> Result<AuthResult, LoginError> {
    let value: Value = serde_json::from_str(body).map_err(|e| LoginError::Decode(e.to_string()))?;
    AuthResult::from_value(&value).ok_or_else(|| LoginError::Decode("response body is null".to_owned()))
}

/// JSON truthiness as a browser client sees it: `null`, `false`, `0`, `NaN`
/// and `""` are falsy; everything else, including `{}` and `[]`, is truthy.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(ToOwned::to_owned)
}

/// Authenticated session: the `(user, token)` pair persisted under the
/// `user` and `jwt` keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: Value,
    pub jwt: String,
}

/// Fill in the session from a successful result.
///
/// `user` falls back to `{"username": <submitted>}` and `jwt` falls back to
/// [`SENTINEL_TOKEN`]. The fallback token produces a session the backend will
/// not honor; callers that care use [`crate::config::LoginConfig::require_token`].
#[must_use]
pub fn derive_session(result: &AuthResult, username: &str) -> Session {
    let user = result
        .user
        .clone()
        .unwrap_or_else(|| serde_json::json!({ "username": username }));
    let jwt = result
        .jwt
        .clone()
        .unwrap_or_else(|| SENTINEL_TOKEN.to_owned());
    Session { user, jwt }
}
