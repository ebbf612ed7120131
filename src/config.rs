//! Login configuration parsed from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_LOGIN_URL: &str = "https://ecommercetensae.infinityfreeapp.com/backend/login.php";
pub const DEFAULT_LANDING_ROUTE: &str = "/ProductList";
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 3000;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SESSION_FILE: &str = ".storefront/session.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for LoginTimeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginConfig {
    /// Remote auth endpoint receiving `POST {username, password}`.
    pub login_url: String,
    /// Route navigated to (with history replace) after a successful login.
    pub landing_route: String,
    /// How long success/failure notices stay visible.
    pub notice_duration: Duration,
    pub timeouts: LoginTimeouts,
    /// Treat "authenticated but no token" as its own failure instead of
    /// substituting the sentinel token.
    pub require_token: bool,
    pub session_file: PathBuf,
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_owned(),
            landing_route: DEFAULT_LANDING_ROUTE.to_owned(),
            notice_duration: Duration::from_millis(DEFAULT_NOTICE_DURATION_MS),
            timeouts: LoginTimeouts::default(),
            require_token: false,
            session_file: PathBuf::from(DEFAULT_SESSION_FILE),
        }
    }
}

impl LoginConfig {
    /// Build typed login config from environment variables.
    ///
    /// Optional:
    /// - `LOGIN_URL`: remote auth endpoint
    /// - `LOGIN_LANDING_ROUTE`: default `/ProductList`
    /// - `LOGIN_NOTICE_DURATION_MS`: default 3000
    /// - `LOGIN_REQUEST_TIMEOUT_SECS`: default 30
    /// - `LOGIN_CONNECT_TIMEOUT_SECS`: default 10
    /// - `LOGIN_REQUIRE_TOKEN`: default false
    /// - `LOGIN_SESSION_FILE`: default `.storefront/session.json`
    ///
    /// # Errors
    ///
    /// Returns an error if `LOGIN_URL` is not an http(s) URL or
    /// `LOGIN_REQUIRE_TOKEN` is not a recognizable boolean.
    pub fn from_env() -> Result<Self, ConfigError> {
        let login_url = parse_login_url(std::env::var("LOGIN_URL").ok().as_deref())?;
        let landing_route =
            std::env::var("LOGIN_LANDING_ROUTE").unwrap_or_else(|_| DEFAULT_LANDING_ROUTE.to_owned());
        let notice_duration =
            Duration::from_millis(env_parse_u64("LOGIN_NOTICE_DURATION_MS", DEFAULT_NOTICE_DURATION_MS));
        let timeouts = LoginTimeouts {
            request_secs: env_parse_u64("LOGIN_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_secs: env_parse_u64("LOGIN_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS),
        };
        let require_token = match std::env::var("LOGIN_REQUIRE_TOKEN") {
            Ok(raw) => parse_bool(&raw)
                .ok_or_else(|| ConfigError::Parse(format!("invalid LOGIN_REQUIRE_TOKEN: {raw}")))?,
            Err(_) => false,
        };
        let session_file = std::env::var("LOGIN_SESSION_FILE")
            .map_or_else(|_| PathBuf::from(DEFAULT_SESSION_FILE), PathBuf::from);

        Ok(Self { login_url, landing_route, notice_duration, timeouts, require_token, session_file })
    }

    /// Replace the login URL, applying the same check as `LOGIN_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `url` is not an http(s) URL.
    pub fn with_login_url(mut self, url: &str) -> Result<Self, ConfigError> {
        self.login_url = parse_login_url(Some(url))?;
        Ok(self)
    }
}

fn env_parse_u64(key: &str, default: u64) -> u64 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_login_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let url = raw.map_or(DEFAULT_LOGIN_URL, str::trim);
    if url.starts_with("https://") || url.starts_with("http://") {
        Ok(url.to_owned())
    } else {
        Err(ConfigError::InvalidUrl(url.to_owned()))
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
