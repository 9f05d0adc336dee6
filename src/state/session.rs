//! Session cache: bearer token + user profile, mirrored in storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `SessionManager` exists per page. The gate restores it on load, the
//! login flow stores into it and the HTTP wrapper reads the token from it
//! and clears it on 401.
//!
//! INVARIANTS
//! ==========
//! - Token and user are written and cleared together; a half-written
//!   persistent session is rolled back.
//! - Corrupt persisted state reads as "logged out" and is never surfaced.
//! - `epoch` advances on every store/clear so in-flight requests can tell
//!   whether the session they were issued under is still current.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::ClientConfig;
use crate::net::types::UserProfile;
use crate::platform::{KeyValueStore, StorageError};

#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

impl Session {
    /// Value for the `Authorization` header.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

pub struct SessionManager {
    storage: Rc<dyn KeyValueStore>,
    token_key: String,
    user_key: String,
    current: RefCell<Option<Session>>,
    epoch: Cell<u64>,
}

impl SessionManager {
    pub fn new(config: &ClientConfig, storage: Rc<dyn KeyValueStore>) -> Self {
        Self {
            storage,
            token_key: config.token_key.clone(),
            user_key: config.user_key.clone(),
            current: RefCell::new(None),
            epoch: Cell::new(0),
        }
    }

    /// Read the persisted session without touching the in-memory cache.
    pub fn load(&self) -> Option<Session> {
        let token = self.storage.get(&self.token_key).filter(|t| !t.is_empty())?;
        let raw_user = self.storage.get(&self.user_key)?;
        match serde_json::from_str::<UserProfile>(&raw_user) {
            Ok(user) => Some(Session { token, user }),
            Err(e) => {
                log::debug!("ignoring unreadable stored user: {e}");
                None
            }
        }
    }

    /// Replace the in-memory session with whatever storage holds.
    pub fn restore(&self) -> Option<Session> {
        let loaded = self.load();
        let changed = *self.current.borrow() != loaded;
        if changed {
            *self.current.borrow_mut() = loaded.clone();
            self.bump_epoch();
        }
        loaded
    }

    /// Persist and cache a new session.
    ///
    /// # Errors
    ///
    /// Returns an error if either key cannot be written; storage and cache
    /// are left as they were before the call's token write.
    pub fn store(&self, session: Session) -> Result<(), StorageError> {
        let user_json = serde_json::to_string(&session.user).map_err(|e| StorageError::Write {
            key: self.user_key.clone(),
            detail: e.to_string(),
        })?;

        self.storage.set(&self.token_key, &session.token)?;
        if let Err(e) = self.storage.set(&self.user_key, &user_json) {
            self.storage.remove(&self.token_key);
            return Err(e);
        }

        *self.current.borrow_mut() = Some(session);
        self.bump_epoch();
        Ok(())
    }

    /// Drop both persisted keys and the cached session. Always safe to call.
    pub fn clear(&self) {
        self.storage.remove(&self.token_key);
        self.storage.remove(&self.user_key);
        self.current.borrow_mut().take();
        self.bump_epoch();
    }

    pub fn current(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.current.borrow().as_ref().map(|s| s.user.clone())
    }

    pub fn token(&self) -> Option<String> {
        self.current.borrow().as_ref().map(|s| s.token.clone())
    }

    /// `Authorization` header value, present only while a token is cached.
    pub fn authorization(&self) -> Option<String> {
        self.current.borrow().as_ref().map(Session::bearer)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.borrow().is_some()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch.get()
    }

    fn bump_epoch(&self) {
        self.epoch.set(self.epoch.get().wrapping_add(1));
    }
}
