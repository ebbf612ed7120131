//! Login form field state and required-field validation.
//!
//! Validation happens here, before the flow is invoked; the flow itself
//! assumes non-empty credentials.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::Credentials;

pub const MISSING_FIELDS_MESSAGE: &str = "Enter both username and password.";

const SUBMIT_LABEL: &str = "Log In";
const SUBMIT_LABEL_PENDING: &str = "Logging in...";

/// Values currently typed into the form.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    username: String,
    password: String,
}

impl std::fmt::Debug for LoginForm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginForm")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

impl LoginForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_username(&mut self, value: impl Into<String>) {
        self.username = value.into();
    }

    pub fn set_password(&mut self, value: impl Into<String>) {
        self.password = value.into();
    }

    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Button label; swaps to a progress label while a request is pending.
    #[must_use]
    pub fn submit_label(pending: bool) -> &'static str {
        if pending { SUBMIT_LABEL_PENDING } else { SUBMIT_LABEL }
    }

    /// Validate and hand over the typed credentials, clearing the form.
    ///
    /// On validation failure the form keeps its values so the user can fix
    /// them.
    ///
    /// # Errors
    ///
    /// Returns [`MISSING_FIELDS_MESSAGE`] if either field is empty.
    pub fn take_credentials(&mut self) -> Result<Credentials, &'static str> {
        let credentials = validate_login_input(&self.username, &self.password)?;
        *self = Self::default();
        Ok(credentials)
    }
}

/// Required-field check for the login form.
///
/// Both values are taken exactly as typed; only an empty field is refused.
///
/// # Errors
///
/// Returns [`MISSING_FIELDS_MESSAGE`] if either field is empty.
pub fn validate_login_input(username: &str, password: &str) -> Result<Credentials, &'static str> {
    if username.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS_MESSAGE);
    }
    Ok(Credentials::new(username, password))
}
