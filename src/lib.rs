//! # storefront-login
//!
//! Client-side login for the storefront. It submits a username and password
//! to the backend's login endpoint, interprets the reply, persists the
//! resulting session, and routes the user to the product list.
//!
//! The UI surfaces (toasts, router) and storage are traits, so the same flow
//! runs behind a browser shell, the bundled CLI, or tests.

pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod net;
pub mod state;
pub mod store;
pub mod ui;

#[cfg(test)]
mod test_helpers;

pub use config::LoginConfig;
pub use error::{ConfigError, LoginError, StoreError};
pub use flow::{LoginFlow, LoginOutcome};
pub use net::types::{Credentials, Session};
