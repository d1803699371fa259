//! Session Flag Store: the shared "is logged in" flag.
//!
//! DESIGN
//! ======
//! `SessionFlag` owns the in-memory flag and its durable mirror. Setters
//! write the mirror first and flip the flag only after the write succeeded,
//! so the two never disagree. There is no credential check: `login` always
//! accepts.
//!
//! `SessionHandle` is the one instance shared by every consumer; clones
//! point at the same flag.
//!
//! ERROR HANDLING
//! ==============
//! A mirror that cannot be read at startup is treated as logged out.
//! Write failures are returned to the caller.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{info, warn};

use crate::mirror::{DurableMirror, MirrorError};

/// Mirror key used when none is configured.
pub const DEFAULT_SESSION_KEY: &str = "isLoggedIn";

/// Stored value meaning "logged in". Anything else means logged out.
pub const LOGGED_IN_SENTINEL: &str = "1";

/// Errors produced by session mutations.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("failed to persist session flag: {0}")]
    Mirror(#[from] MirrorError),
}

// =============================================================================
// FLAG
// =============================================================================

/// In-memory logged-in flag backed by a durable mirror.
#[derive(Debug)]
pub struct SessionFlag<M> {
    key: String,
    logged_in: bool,
    mirror: M,
}

impl<M: DurableMirror> SessionFlag<M> {
    /// Restore the flag from `mirror` under `key`. Reads the mirror once.
    #[must_use]
    pub fn initialize(mirror: M, key: impl Into<String>) -> Self {
        let key = key.into();
        let logged_in = match mirror.read(&key) {
            Ok(stored) => stored.as_deref() == Some(LOGGED_IN_SENTINEL),
            Err(e) => {
                warn!(error = %e, key = %key, "session flag unreadable; starting logged out");
                false
            }
        };
        info!(logged_in, "session flag restored");
        Self { key, logged_in, mirror }
    }

    #[must_use]
    pub fn logged_in(&self) -> bool {
        self.logged_in
    }

    /// Accept the credentials unconditionally and persist the sentinel.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror write fails; the flag is unchanged.
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), SessionError> {
        let _ = password;
        self.mirror.write(&self.key, LOGGED_IN_SENTINEL)?;
        self.logged_in = true;
        info!(%email, "logged in");
        Ok(())
    }

    /// Clear the flag and remove the mirror entry. Safe to repeat.
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror entry cannot be removed; the flag is
    /// unchanged.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.mirror.remove(&self.key)?;
        self.logged_in = false;
        info!("logged out");
        Ok(())
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn mirror(&self) -> &M {
        &self.mirror
    }
}

// =============================================================================
// SHARED HANDLE
// =============================================================================

/// Cheaply cloneable reference to the single session flag.
#[derive(Debug)]
pub struct SessionHandle<M> {
    inner: Arc<Mutex<SessionFlag<M>>>,
}

impl<M> Clone for SessionHandle<M> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<M: DurableMirror> SessionHandle<M> {
    #[must_use]
    pub fn initialize(mirror: M, key: impl Into<String>) -> Self {
        Self::from_flag(SessionFlag::initialize(mirror, key))
    }

    #[must_use]
    pub fn from_flag(flag: SessionFlag<M>) -> Self {
        Self { inner: Arc::new(Mutex::new(flag)) }
    }

    fn lock(&self) -> MutexGuard<'_, SessionFlag<M>> {
        self.inner.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[must_use]
    pub fn logged_in(&self) -> bool {
        self.lock().logged_in()
    }

    /// See [`SessionFlag::login`].
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror write fails.
    pub fn login(&self, email: &str, password: &str) -> Result<(), SessionError> {
        self.lock().login(email, password)
    }

    /// See [`SessionFlag::logout`].
    ///
    /// # Errors
    ///
    /// Returns an error if the mirror entry cannot be removed.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.lock().logout()
    }

    /// Run `f` against the flag while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&SessionFlag<M>) -> R) -> R {
        f(&self.lock())
    }

    /// `true` when both handles share one flag.
    #[must_use]
    pub fn same_session(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
