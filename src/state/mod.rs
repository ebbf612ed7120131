//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern: `pending` is owned by the login flow and read
//! by the form, `auth` is written once by the flow and read by the rest of
//! the application.

pub mod auth;
pub mod pending;
