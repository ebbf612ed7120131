//! Session store: the client-side key-value persistence surface.
//!
//! DESIGN
//! ======
//! The session is written as two independent string entries, `jwt` (raw
//! token) and `user` (JSON-serialized record), so other consumers can read
//! either key on its own. A new session overwrites both entries; nothing is
//! merged with what was there before.


mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::error::StoreError;
use crate::net::types::Session;

pub const USER_KEY: &str = "user";
pub const JWT_KEY: &str = "jwt";

/// String key-value persistence.
pub trait SessionStore: Send + Sync {
    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Read the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Delete `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Persist `session` as the `jwt` and `user` entries.
///
/// If the `user` write fails after the token was written, the token is put
/// back to what it held before the call, so the store never pairs a new
/// token with an old user.
///
/// # Errors
///
/// Returns an error if either write fails or the user record cannot be encoded.
pub fn save_session(store: &dyn SessionStore, session: &Session) -> Result<(), StoreError> {
    let user = serde_json::to_string(&session.user)?;
    let prior_jwt = store.get(JWT_KEY)?;

    store.set(JWT_KEY, &session.jwt)?;
    if let Err(e) = store.set(USER_KEY, &user) {
        let restored = match prior_jwt.as_deref() {
            Some(jwt) => store.set(JWT_KEY, jwt),
            None => store.remove(JWT_KEY),
        };
        if let Err(restore_err) = restored {
            // A new token next to an old user is worse than no session.
            tracing::warn!(error = %restore_err, "session rollback failed; clearing stored session");
            let _ = clear_session(store);
        }
        return Err(e);
    }
    Ok(())
}

/// Read back a session written by [`save_session`].
///
/// Returns `Ok(None)` unless both entries are present.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the stored user is not JSON.
pub fn load_session(store: &dyn SessionStore) -> Result<Option<Session>, StoreError> {
    let (Some(jwt), Some(user)) = (store.get(JWT_KEY)?, store.get(USER_KEY)?) else {
        return Ok(None);
    };
    let user = serde_json::from_str(&user)?;
    Ok(Some(Session { user, jwt }))
}

/// Remove both session entries.
///
/// # Errors
///
/// Returns an error if the store cannot be written.
pub fn clear_session(store: &dyn SessionStore) -> Result<(), StoreError> {
    store.remove(JWT_KEY)?;
    store.remove(USER_KEY)
}
