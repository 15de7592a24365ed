//! Persisted session: bearer token plus user record.
//!
//! INVARIANTS
//! ==========
//! - The token and user entries are written and cleared together. A store
//!   holding only one of them is treated as logged out and the leftover entry
//!   is discarded on the next restore.
//! - The shared auth header mirrors the persisted token: `persist` and a
//!   successful `restore` install it, `clear` removes it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::session_context::SessionContext;
use crate::net::types::{AuthUser, Session};

use super::storage::{KeyValueStore, StorageError};

pub const TOKEN_KEY: &str = "hiresight_token";
pub const USER_KEY: &str = "hiresight_user";

#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    context: SessionContext,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(storage: S, context: SessionContext) -> Self {
        Self { storage, context }
    }

    pub fn context(&self) -> &SessionContext {
        &self.context
    }

    /// Reload a previously persisted session.
    ///
    /// Any partial or corrupt state is discarded silently and reads as
    /// logged out.
    pub fn restore(&self) -> Option<AuthUser> {
        let token = self.storage.get(TOKEN_KEY);
        let raw_user = self.storage.get(USER_KEY);
        let (token, raw_user) = match (token, raw_user) {
            (Some(token), Some(raw_user)) => (token, raw_user),
            (None, None) => return None,
            _ => {
                log::debug!("discarding partial persisted session");
                self.remove_entries();
                return None;
            }
        };
        match serde_json::from_str::<AuthUser>(&raw_user) {
            Ok(user) => {
                self.context.set_token(&token);
                log::debug!("restored session for user {}", user.id);
                Some(user)
            }
            Err(err) => {
                log::warn!("discarding corrupt persisted user: {err}");
                self.remove_entries();
                None
            }
        }
    }

    /// Install `session` as the active session and write it to storage.
    ///
    /// A storage failure rolls both entries back so storage never holds half
    /// a session; the in-memory session still proceeds.
    pub fn persist(&self, session: Session) -> AuthUser {
        self.context.set_token(&session.token);
        if let Err(err) = self.write_entries(&session) {
            log::warn!("session not persisted: {err}");
            self.remove_entries();
        }
        session.user
    }

    /// Drop the auth header and both storage entries. Safe to repeat.
    pub fn clear(&self) {
        self.context.clear();
        self.remove_entries();
    }

    fn write_entries(&self, session: &Session) -> Result<(), StorageError> {
        let user = serde_json::to_string(&session.user)
            .map_err(|err| StorageError::Encode { key: USER_KEY.to_owned(), reason: err.to_string() })?;
        self.storage.set(TOKEN_KEY, &session.token)?;
        self.storage.set(USER_KEY, &user)
    }

    fn remove_entries(&self) {
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
